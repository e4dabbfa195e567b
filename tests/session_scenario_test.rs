use async_trait::async_trait;
use cv_checker::config::settings::LlmSettings;
use cv_checker::domain::model::LearnMode;
use cv_checker::domain::ports::{DocumentLoader, PageExtractor};
use cv_checker::{ChatClient, FileDocumentLoader, PromptEngine, Result, Session};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

struct CountingLoader {
    inner: FileDocumentLoader,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl DocumentLoader for CountingLoader {
    async fn load_document(&self, location: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.load_document(location).await
    }
}

struct StaticPage {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl PageExtractor for StaticPage {
    async fn extract_page_text(&self, url: &str) -> Result<String> {
        assert_eq!(url, "https://example.com/job");
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("AI/ML Security Engineer\nWhat you need to be successful:\nPython, SQL".to_string())
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

/// Local CV, zero-shot, one posting, then an empty line.
#[tokio::test]
async fn test_zero_shot_single_posting_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let cv_path = temp_dir.path().join("cv.md");
    std::fs::write(&cv_path, "Skills: Python, TensorFlow\nEducation: PhD").unwrap();

    // An examples file on disk must not leak into zero-shot prompts.
    let examples_path = temp_dir.path().join("examples.json");
    std::fs::write(&examples_path, r#"{"info": "DISK INFO", "compare": "DISK COMPARE"}"#).unwrap();

    let server = MockServer::start_async().await;
    let extract_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .body_contains("parse me Responsibilities and Requirements")
                .body_contains(r"Example:\n\n\n\nNow, given the following job description")
                .body_contains("What you need to be successful");
            then.status(200).json_body(completion(
                r#"{"Requirements": ["Python", "SQL"], "Responsibilities": ["Secure AI/ML models"]}"#,
            ));
        })
        .await;
    let compare_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .body_contains("**Job Description** and **CV**")
                .body_contains(r"Example:\n\n\n\nNow, given the following")
                .body_contains("Skills: Python, TensorFlow");
            then.status(200).json_body(completion(
                r#"{"The Semantic Similarity Percentage": 61.0, "Similar keywords": ["Python"], "Different keywords": ["SQL"], "Similarity percentage of the keywords": 50.0}"#,
            ));
        })
        .await;

    let settings = LlmSettings {
        base_url: server.base_url(),
        api_key: None,
        request_timeout_seconds: None,
    };
    let engine = PromptEngine::new(ChatClient::new(&settings, "sk-test").unwrap(), "X");

    let load_calls = Arc::new(AtomicUsize::new(0));
    let page_calls = Arc::new(AtomicUsize::new(0));
    let session = Session::new(
        CountingLoader {
            inner: FileDocumentLoader::new(temp_dir.path()).unwrap(),
            calls: load_calls.clone(),
        },
        StaticPage {
            calls: page_calls.clone(),
        },
        engine,
        LearnMode::ZeroShot,
        &examples_path,
    );

    let mut output = Vec::new();
    let summary = session
        .run(
            cv_path.to_str().unwrap(),
            "https://example.com/job\n\n".as_bytes(),
            &mut output,
        )
        .await
        .unwrap();

    assert_eq!(load_calls.load(Ordering::SeqCst), 1);
    assert_eq!(page_calls.load(Ordering::SeqCst), 1);
    extract_mock.assert_hits_async(1).await;
    compare_mock.assert_hits_async(1).await;
    assert_eq!(summary.postings_processed, 1);
    assert_eq!(summary.postings_failed, 0);

    let printed = String::from_utf8(output).unwrap();
    assert_eq!(printed.matches("The Semantic Similarity Percentage").count(), 1);
    assert!(!printed.contains("DISK"));
}

/// A failing model call is reported and the next posting still runs.
#[tokio::test]
async fn test_remote_failure_is_isolated_to_one_iteration() {
    let temp_dir = TempDir::new().unwrap();
    let cv_path = temp_dir.path().join("cv.txt");
    std::fs::write(&cv_path, "Skills: Rust").unwrap();

    let server = MockServer::start_async().await;
    let failing_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(503)
                .json_body(json!({"error": {"message": "upstream unavailable"}}));
        })
        .await;

    let settings = LlmSettings {
        base_url: server.base_url(),
        api_key: None,
        request_timeout_seconds: Some(5),
    };
    let engine = PromptEngine::new(ChatClient::new(&settings, "sk-test").unwrap(), "X");
    let page_calls = Arc::new(AtomicUsize::new(0));

    let session = Session::new(
        FileDocumentLoader::new(temp_dir.path()).unwrap(),
        StaticPage {
            calls: page_calls.clone(),
        },
        engine,
        LearnMode::ZeroShot,
        temp_dir.path().join("examples.json"),
    );

    let mut output = Vec::new();
    let summary = session
        .run(
            cv_path.to_str().unwrap(),
            "https://example.com/job\nhttps://example.com/job\n\n".as_bytes(),
            &mut output,
        )
        .await
        .unwrap();

    // Only the extract step is reached each time.
    failing_mock.assert_hits_async(2).await;
    assert_eq!(page_calls.load(Ordering::SeqCst), 2);
    assert_eq!(summary.postings_failed, 2);

    let printed = String::from_utf8(output).unwrap();
    assert_eq!(
        printed
            .matches("The model service did not return a result")
            .count(),
        2
    );
}
