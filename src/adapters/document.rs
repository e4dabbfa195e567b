use crate::domain::ports::DocumentLoader;
use crate::utils::error::{CheckerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

const PDF_SIGNATURE: &[u8] = b"%PDF";

/// Loads a CV from disk, downloading it into `download_dir` first when given a URL.
#[derive(Debug, Clone)]
pub struct FileDocumentLoader {
    client: Client,
    download_dir: PathBuf,
}

impl FileDocumentLoader {
    pub fn new(download_dir: impl Into<PathBuf>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("cv-checker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CheckerError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            download_dir: download_dir.into(),
        })
    }

    /// Fetches `location` once and stores the body under the URL's last path segment.
    pub async fn download(&self, location: &str) -> Result<PathBuf> {
        let file_name = download_file_name(location)?;
        let target = self.download_dir.join(&file_name);

        info!("Downloading CV from {}", location);
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| CheckerError::document(location, format!("download failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckerError::document(
                location,
                format!("download returned HTTP {}", status),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CheckerError::document(location, format!("failed to read body: {}", e)))?;

        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(|e| CheckerError::document(location, e))?;
        tokio::fs::write(&target, &bytes)
            .await
            .map_err(|e| CheckerError::document(location, e))?;

        debug!("Saved {} bytes to {}", bytes.len(), target.display());
        Ok(target)
    }

    async fn convert_file(&self, path: &Path) -> Result<String> {
        let location = path.display().to_string();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CheckerError::document(location.clone(), e))?;

        let task_location = location.clone();
        tokio::task::spawn_blocking(move || extract_text(&task_location, &bytes))
            .await
            .map_err(|e| CheckerError::document(location, format!("conversion task failed: {}", e)))?
    }
}

#[async_trait]
impl DocumentLoader for FileDocumentLoader {
    async fn load_document(&self, location: &str) -> Result<String> {
        let local = Path::new(location);
        let path = if local.is_file() {
            local.to_path_buf()
        } else {
            self.download(location).await?
        };

        let text = self.convert_file(&path).await?;
        info!("Extracted {} characters from {}", text.len(), path.display());
        Ok(text)
    }
}

/// Local file name for a downloaded CV: the final path segment of `location`.
pub fn download_file_name(location: &str) -> Result<String> {
    let url = Url::parse(location).map_err(|e| {
        CheckerError::document(location, format!("not an existing file or a valid URL ({})", e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CheckerError::document(
            location,
            format!("unsupported URL scheme: {}", url.scheme()),
        ));
    }

    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .ok_or_else(|| CheckerError::document(location, "URL has no file name in its path"))
}

/// PDF bytes go through `pdf-extract`; anything else must be UTF-8 text.
pub fn extract_text(location: &str, bytes: &[u8]) -> Result<String> {
    let text = if bytes.starts_with(PDF_SIGNATURE) {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| CheckerError::document(location, format!("PDF conversion failed: {}", e)))?
    } else {
        String::from_utf8(bytes.to_vec()).map_err(|_| {
            CheckerError::document(location, "unsupported format, expected PDF or UTF-8 text")
        })?
    };

    if text.trim().is_empty() {
        return Err(CheckerError::document(location, "document contains no extractable text"));
    }

    Ok(text)
}
