use crate::core::examples::examples_for;
use crate::core::prompts::comparison_input;
use crate::domain::model::{EvaluationMode, ExamplePair, LearnMode, SessionSummary};
use crate::domain::ports::{DocumentLoader, Evaluator, PageExtractor};
use crate::utils::error::{CheckerError, Result};
use crate::utils::validation::validate_url;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const URL_PROMPT: &str = "\nEnter the link of the position (or just press enter to quit):";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Init,
    /// CV text is loaded; the example pair is loaded next.
    Ready,
    AwaitingUrl,
    Processing(String),
    Done,
}

/// Loads the CV once, then compares it with every job posting the user enters.
pub struct Session<L, X, E> {
    loader: L,
    extractor: X,
    evaluator: E,
    learn_mode: LearnMode,
    examples_path: PathBuf,
}

impl<L, X, E> Session<L, X, E>
where
    L: DocumentLoader,
    X: PageExtractor,
    E: Evaluator,
{
    pub fn new(
        loader: L,
        extractor: X,
        evaluator: E,
        learn_mode: LearnMode,
        examples_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            loader,
            extractor,
            evaluator,
            learn_mode,
            examples_path: examples_path.into(),
        }
    }

    /// Runs until `input` yields an empty line or EOF. Only CV loading, example
    /// loading and terminal I/O failures end the session early.
    pub async fn run<R, W>(&self, cv_location: &str, mut input: R, output: &mut W) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut summary = SessionSummary::default();
        let mut cv_text = String::new();
        let mut examples = ExamplePair::default();
        let mut state = SessionState::Init;

        loop {
            tracing::debug!("Session state: {:?}", state);
            state = match state {
                SessionState::Init => {
                    writeln!(output, "\nParsing the information from the CV...")?;
                    cv_text = self.loader.load_document(cv_location).await?;
                    SessionState::Ready
                }
                SessionState::Ready => {
                    examples = examples_for(self.learn_mode, &self.examples_path)?;
                    SessionState::AwaitingUrl
                }
                SessionState::AwaitingUrl => {
                    writeln!(output, "{}", URL_PROMPT)?;
                    output.flush()?;

                    let mut line = String::new();
                    let read = input.read_line(&mut line).await?;
                    let url = line.trim();
                    if read == 0 || url.is_empty() {
                        SessionState::Done
                    } else {
                        SessionState::Processing(url.to_string())
                    }
                }
                SessionState::Processing(url) => {
                    match self.process_posting(&url, &cv_text, &examples, output).await {
                        Ok(report) => {
                            writeln!(output, "{}", report)?;
                            summary.postings_processed += 1;
                        }
                        Err(e) => {
                            tracing::warn!("Comparison for {} failed: {}", url, e);
                            writeln!(output, "❌ {}", e.user_friendly_message())?;
                            writeln!(output, "💡 {}", e.recovery_suggestion())?;
                            summary.postings_failed += 1;
                        }
                    }
                    SessionState::AwaitingUrl
                }
                SessionState::Done => break,
            };
        }

        tracing::info!(
            "Session finished: {} processed, {} failed",
            summary.postings_processed,
            summary.postings_failed
        );
        Ok(summary)
    }

    /// Page text, then extraction, then comparison. Returns the comparison reply.
    pub async fn process_posting<W: Write>(
        &self,
        url: &str,
        cv_text: &str,
        examples: &ExamplePair,
        output: &mut W,
    ) -> Result<String> {
        validate_url("job_url", url).map_err(|e| CheckerError::page(url, e))?;

        writeln!(output, "\nParsing the information from the link...")?;
        let page_text = self.extractor.extract_page_text(url).await?;

        let mode = EvaluationMode::Extract;
        let job_info = self
            .evaluator
            .evaluate(&page_text, examples.for_mode(mode), mode)
            .await?;

        writeln!(output, "Making the comparison...\n")?;
        let mode = EvaluationMode::Compare;
        self.evaluator
            .evaluate(
                &comparison_input(&job_info, cv_text),
                examples.for_mode(mode),
                mode,
            )
            .await
    }
}
