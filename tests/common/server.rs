//! Test server lifecycle management
//!
//! Spawns an isolated server on a random port per test, backed by whatever
//! classifier the test supplies. When dropped, the server shuts down.

use async_trait::async_trait;
use emotion_server::classifier::{
    ClassifierError, EmotionClassifier, EmotionDetector, EmotionScores,
};
use emotion_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Classifier double returning a fixed score set, no network involved.
pub struct CannedClassifier {
    pub scores: EmotionScores,
}

#[async_trait]
impl EmotionClassifier for CannedClassifier {
    fn name(&self) -> &str {
        "canned"
    }

    async fn classify(&self, _text: &str) -> Result<EmotionScores, ClassifierError> {
        Ok(self.scores)
    }
}

/// Classifier double that always fails with a connection error.
pub struct UnreachableClassifier;

#[async_trait]
impl EmotionClassifier for UnreachableClassifier {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn classify(&self, _text: &str) -> Result<EmotionScores, ClassifierError> {
        Err(ClassifierError::Connection("connection refused".to_string()))
    }
}

/// Test server instance listening on an ephemeral port
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    // Private field - dropping it shuts the server down
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server backed by the given classifier.
    ///
    /// # Panics
    ///
    /// Panics if port binding or server startup fails.
    pub async fn spawn(classifier: Arc<dyn EmotionClassifier>) -> Self {
        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            host: "127.0.0.1".to_string(),
            port,
            frontend_dir_path: None,
        };

        let app = make_app(config, EmotionDetector::new(classifier));

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Test server failed");
        });

        Self {
            base_url,
            port,
            _shutdown_tx: Some(shutdown_tx),
        }
    }
}
