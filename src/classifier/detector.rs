//! Normalization of classifier results into per-request records.

use super::provider::{ClassifierError, EmotionClassifier, EmotionRecord};
use std::sync::Arc;
use tracing::{debug, warn};

/// Owns the outbound classifier and the collapsing of its failures.
///
/// Every failure maps to the same [`EmotionRecord::Unscored`] record; the
/// cause is only visible in the logs. Rejected input is expected traffic
/// and stays out of the warn log.
#[derive(Clone)]
pub struct EmotionDetector {
    classifier: Arc<dyn EmotionClassifier>,
}

impl EmotionDetector {
    pub fn new(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self { classifier }
    }

    pub async fn detect(&self, text: &str) -> EmotionRecord {
        match self.classifier.classify(text).await {
            Ok(scores) => EmotionRecord::scored(scores),
            Err(ClassifierError::RejectedInput) => {
                debug!(
                    classifier = self.classifier.name(),
                    "Classifier rejected the input"
                );
                EmotionRecord::Unscored
            }
            Err(err) => {
                warn!(
                    classifier = self.classifier.name(),
                    "Emotion classification failed: {}", err
                );
                EmotionRecord::Unscored
            }
        }
    }
}
