//! Emotion Detection Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod classifier;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use classifier::{EmotionClassifier, EmotionDetector, WatsonEmotionClassifier};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
