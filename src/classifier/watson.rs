//! Watson NLP emotion classifier implementation.

use super::provider::{ClassifierError, EmotionClassifier, EmotionScores};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_ENDPOINT_URL: &str =
    "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// Watson NLP emotion classifier.
///
/// Posts documents to the EmotionPredict endpoint and maps the first
/// prediction of the response into [`EmotionScores`]. One outbound call per
/// invocation, no retries.
pub struct WatsonEmotionClassifier {
    client: Client,
    endpoint_url: String,
    model_id: String,
    timeout: Duration,
}

impl WatsonEmotionClassifier {
    /// Create a new Watson classifier.
    ///
    /// # Arguments
    /// * `endpoint_url` - Full URL of the EmotionPredict endpoint.
    /// * `model_id` - Model id sent in the `grpc-metadata-mm-model-id` header.
    /// * `timeout` - Ceiling for the whole request.
    pub fn new(
        endpoint_url: impl Into<String>,
        model_id: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint_url: endpoint_url.into(),
            model_id: model_id.into(),
            timeout,
        }
    }
}

#[async_trait]
impl EmotionClassifier for WatsonEmotionClassifier {
    fn name(&self) -> &str {
        "watson-nlp"
    }

    async fn classify(&self, text: &str) -> Result<EmotionScores, ClassifierError> {
        let request = EmotionPredictRequest {
            raw_document: RawDocument { text },
        };

        debug!(
            model_id = %self.model_id,
            text_len = text.len(),
            "Sending emotion predict request"
        );

        let response = self
            .client
            .post(&self.endpoint_url)
            .header(MODEL_ID_HEADER, &self.model_id)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Timeout
                } else {
                    ClassifierError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST {
            return Err(ClassifierError::RejectedInput);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let predict_response: EmotionPredictResponse = response.json().await.map_err(|e| {
            ClassifierError::InvalidResponse(format!("Failed to parse emotion response: {}", e))
        })?;

        let prediction = predict_response
            .emotion_predictions
            .into_iter()
            .next()
            .ok_or_else(|| {
                ClassifierError::InvalidResponse("No emotion predictions in response".to_string())
            })?;

        let scores = EmotionScores::from(prediction.emotion);

        debug!(?scores, "Received emotion predict response");

        Ok(scores)
    }
}

// Watson API types

#[derive(Debug, Serialize)]
struct EmotionPredictRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Debug, Serialize)]
struct RawDocument<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmotionPredictResponse {
    #[serde(rename = "emotionPredictions", default)]
    emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Deserialize)]
struct EmotionPrediction {
    #[serde(default)]
    emotion: WatsonEmotion,
}

/// Score map as Watson returns it. Categories the model did not score
/// default to 0.0.
#[derive(Debug, Default, Deserialize)]
struct WatsonEmotion {
    #[serde(default)]
    anger: f64,
    #[serde(default)]
    disgust: f64,
    #[serde(default)]
    fear: f64,
    #[serde(default)]
    joy: f64,
    #[serde(default)]
    sadness: f64,
}

impl From<WatsonEmotion> for EmotionScores {
    fn from(emotion: WatsonEmotion) -> Self {
        EmotionScores {
            anger: emotion.anger,
            disgust: emotion.disgust,
            fear: emotion.fear,
            joy: emotion.joy,
            sadness: emotion.sadness,
        }
    }
}
