//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with methods for the two server endpoints. When routes or
//! request formats change, update only this file.

use reqwest::Response;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    pub async fn index(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("index request failed")
    }

    /// GET /emotionDetector with the given textToAnalyze value.
    pub async fn detect(&self, text: &str) -> Response {
        self.client
            .get(format!("{}/emotionDetector", self.base_url))
            .query(&[("textToAnalyze", text)])
            .send()
            .await
            .expect("emotionDetector request failed")
    }

    /// GET /emotionDetector without the textToAnalyze parameter.
    pub async fn detect_without_text(&self) -> Response {
        self.client
            .get(format!("{}/emotionDetector", self.base_url))
            .send()
            .await
            .expect("emotionDetector request failed")
    }
}
