use crate::config::settings::BrowserSettings;
use crate::domain::ports::PageExtractor;
use crate::utils::error::{CheckerError, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, info};

/// Renders job postings in a fresh headless Chromium per call.
#[derive(Debug, Clone)]
pub struct HeadlessBrowserExtractor {
    settings: BrowserSettings,
}

impl HeadlessBrowserExtractor {
    pub fn new(settings: BrowserSettings) -> Self {
        Self { settings }
    }

    fn launch(&self) -> anyhow::Result<Browser> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .path(self.settings.chrome_path.clone())
            .build()?;
        Browser::new(options)
    }

    /// Blocking. The browser process is killed when `browser` drops, on every path.
    fn render_body_text(&self, url: &str) -> anyhow::Result<String> {
        let browser = self.launch()?;
        let tab = browser.new_tab()?;
        tab.set_default_timeout(Duration::from_secs(self.settings.element_timeout_seconds));

        tab.navigate_to(url)?;
        tab.wait_until_navigated()?;
        std::thread::sleep(Duration::from_millis(self.settings.settle_delay_ms));

        let body = tab.wait_for_element("body")?;
        body.get_inner_text()
    }
}

#[async_trait]
impl PageExtractor for HeadlessBrowserExtractor {
    async fn extract_page_text(&self, url: &str) -> Result<String> {
        info!("Rendering {}", url);

        let extractor = self.clone();
        let target = url.to_string();
        let text = tokio::task::spawn_blocking(move || extractor.render_body_text(&target))
            .await
            .map_err(|e| CheckerError::page(url, format!("browser task failed: {}", e)))?
            .map_err(|e| CheckerError::page(url, format!("{:#}", e)))?;

        let text = normalize_page_text(&text);
        debug!("Extracted {} characters from {}", text.len(), url);

        if text.is_empty() {
            return Err(CheckerError::page(url, "page body has no visible text"));
        }
        Ok(text)
    }
}

fn blank_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("blank-line pattern is valid"))
}

/// Strips trailing whitespace per line and collapses runs of blank lines.
pub fn normalize_page_text(text: &str) -> String {
    let trimmed_lines = text
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    blank_run_regex()
        .replace_all(&trimmed_lines, "\n\n")
        .trim()
        .to_string()
}
