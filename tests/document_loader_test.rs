use cv_checker::domain::ports::DocumentLoader;
use cv_checker::{CheckerError, FileDocumentLoader};
use httpmock::prelude::*;
use tempfile::TempDir;

const CV_PDF: &[u8] = include_bytes!("fixtures/cv.pdf");

#[tokio::test]
async fn test_url_cv_is_downloaded_once_and_saved_under_last_segment() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    let cv = "# Jane Doe\n\nSkills: Python, TensorFlow, Threat Modeling\n";

    let download_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/files/resume.md");
            then.status(200)
                .header("Content-Type", "text/markdown")
                .body(cv);
        })
        .await;

    let loader = FileDocumentLoader::new(temp_dir.path()).unwrap();
    let text = loader
        .load_document(&server.url("/files/resume.md"))
        .await
        .unwrap();

    download_mock.assert_hits_async(1).await;
    assert_eq!(text, cv);

    let saved = temp_dir.path().join("resume.md");
    assert!(saved.exists());
    assert_eq!(std::fs::read_to_string(saved).unwrap(), cv);
}

#[tokio::test]
async fn test_broken_pdf_download_is_saved_then_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;

    let download_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/resume.pdf");
            then.status(200)
                .header("Content-Type", "application/pdf")
                .body("%PDF-1.4\ntruncated upload");
        })
        .await;

    let loader = FileDocumentLoader::new(temp_dir.path()).unwrap();
    let result = loader.load_document(&server.url("/resume.pdf")).await;

    download_mock.assert_hits_async(1).await;
    assert!(temp_dir.path().join("resume.pdf").exists());
    assert!(matches!(result, Err(CheckerError::DocumentLoad { .. })));
}

#[tokio::test]
async fn test_local_pdf_is_converted_to_text() {
    let temp_dir = TempDir::new().unwrap();
    let cv_path = temp_dir.path().join("cv.pdf");
    std::fs::write(&cv_path, CV_PDF).unwrap();

    let loader = FileDocumentLoader::new(temp_dir.path()).unwrap();
    let text = loader
        .load_document(cv_path.to_str().unwrap())
        .await
        .unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Skills: Rust, Python"));
}

#[tokio::test]
async fn test_downloaded_pdf_is_saved_and_converted() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;

    let download_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/resume.pdf");
            then.status(200)
                .header("Content-Type", "application/pdf")
                .body(CV_PDF);
        })
        .await;

    let loader = FileDocumentLoader::new(temp_dir.path()).unwrap();
    let text = loader
        .load_document(&server.url("/resume.pdf"))
        .await
        .unwrap();

    download_mock.assert_hits_async(1).await;
    assert!(text.contains("Jane Doe"));

    let saved = temp_dir.path().join("resume.pdf");
    assert_eq!(std::fs::read(saved).unwrap(), CV_PDF);
}

#[tokio::test]
async fn test_http_error_is_document_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;

    let download_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/missing.pdf");
            then.status(404);
        })
        .await;

    let loader = FileDocumentLoader::new(temp_dir.path()).unwrap();
    let result = loader.load_document(&server.url("/missing.pdf")).await;

    download_mock.assert_hits_async(1).await;
    match result {
        Err(CheckerError::DocumentLoad { message, .. }) => assert!(message.contains("404")),
        other => panic!("expected document load error, got {:?}", other),
    }
    assert!(!temp_dir.path().join("missing.pdf").exists());
}

#[tokio::test]
async fn test_missing_local_path_is_document_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let loader = FileDocumentLoader::new(temp_dir.path()).unwrap();

    let result = loader.load_document("./no-such-cv.pdf").await;

    assert!(matches!(result, Err(CheckerError::DocumentLoad { .. })));
}

#[tokio::test]
async fn test_local_file_is_preferred_over_download() {
    let temp_dir = TempDir::new().unwrap();
    let cv_path = temp_dir.path().join("cv.txt");
    std::fs::write(&cv_path, "Education: PhD in Artificial Intelligence").unwrap();

    let loader = FileDocumentLoader::new(temp_dir.path().join("downloads")).unwrap();
    let text = loader
        .load_document(cv_path.to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(text, "Education: PhD in Artificial Intelligence");
    assert!(!temp_dir.path().join("downloads").exists());
}
