use clap::Parser;
use cv_checker::utils::{logger, validation::Validate};
use cv_checker::{
    ChatClient, CheckerError, CliConfig, FileDocumentLoader, HeadlessBrowserExtractor,
    ModelCatalog, PromptEngine, Session, Settings,
};

#[tokio::main]
async fn main() {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cv-checker v{}", env!("CARGO_PKG_VERSION"));
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config).await {
        tracing::error!("❌ cv-checker failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<(), CheckerError> {
    config.validate()?;

    let settings = Settings::load(&config.config)?;
    settings.validate()?;

    let catalog = ModelCatalog::from_file(settings.models_file())?;
    catalog.ensure_allowed(&config.model_type)?;

    let client = ChatClient::new(&settings.llm, settings.api_key()?)?;
    let engine = PromptEngine::new(client, config.model_type.clone());
    tracing::info!(
        "Model: {}, learn mode: {}",
        engine.model(),
        config.learn_mode
    );

    let loader = FileDocumentLoader::new(settings.download_dir())?;
    let extractor = HeadlessBrowserExtractor::new(settings.browser.clone());

    let session = Session::new(
        loader,
        extractor,
        engine,
        config.learn_mode,
        settings.examples_file(),
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let summary = session.run(&config.cv, stdin, &mut stdout).await?;

    tracing::info!(
        "✅ Done: {} posting(s) compared, {} failed",
        summary.postings_processed,
        summary.postings_failed
    );
    Ok(())
}
