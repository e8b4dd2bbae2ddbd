//! Emotion classification: the outbound adapter and its normalized records.

mod detector;
pub mod provider;
pub mod watson;

pub use detector::EmotionDetector;
pub use provider::{ClassifierError, Emotion, EmotionClassifier, EmotionRecord, EmotionScores};
pub use watson::WatsonEmotionClassifier;
