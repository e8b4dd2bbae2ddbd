//! Emotion classifier trait definition.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// The five emotion categories tracked by the service.
///
/// Declaration order doubles as the tie-breaking order when picking the
/// dominant emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-category scores for a single piece of text, as returned by a
/// classifier backend. Scores are in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// The highest-scoring emotion. Ties go to the category declared first
    /// in [`Emotion::ALL`].
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::ALL[0];
        for emotion in Emotion::ALL.into_iter().skip(1) {
            if self.score(emotion) > self.score(best) {
                best = emotion;
            }
        }
        best
    }
}

/// Normalized result of one classification call.
///
/// Every failure cause collapses into `Unscored`; callers can only observe
/// scored vs. unscored. Causes are logged by the detector instead.
#[derive(Debug, Clone, PartialEq)]
pub enum EmotionRecord {
    Scored {
        scores: EmotionScores,
        dominant: Emotion,
    },
    Unscored,
}

impl EmotionRecord {
    /// Build a scored record, deriving the dominant emotion from the scores.
    pub fn scored(scores: EmotionScores) -> Self {
        let dominant = scores.dominant();
        EmotionRecord::Scored { scores, dominant }
    }
}

/// Errors that can occur when calling a classifier backend.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The service rejected the input as unanalyzable (HTTP 400).
    #[error("Input rejected by the classifier")]
    RejectedInput,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timeout")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for emotion classification backends.
///
/// Implementations own the outbound call to a scoring service; the rest of
/// the server only sees scores coming back, so backends can be swapped for
/// doubles in tests.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Get the classifier's name (e.g., "watson-nlp").
    fn name(&self) -> &str;

    /// Score `text` across the five emotion categories.
    async fn classify(&self, text: &str) -> Result<EmotionScores, ClassifierError>;
}
