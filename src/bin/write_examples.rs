use clap::Parser;
use cv_checker::core::examples::write_examples;
use cv_checker::utils::logger;

#[derive(Parser)]
#[command(name = "write-examples")]
#[command(about = "Write the built-in one-shot examples used by cv-checker")]
struct Args {
    /// Destination file
    #[arg(short, long, default_value = "examples.json")]
    output: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    match write_examples(&args.output) {
        Ok(examples) => {
            println!(
                "✅ Wrote examples to {} (info: {} chars, compare: {} chars)",
                args.output,
                examples.info.len(),
                examples.compare.len()
            );
        }
        Err(e) => {
            tracing::error!("❌ Failed to write examples: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
