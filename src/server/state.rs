use axum::extract::FromRef;

use super::ServerConfig;
use crate::classifier::EmotionDetector;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub detector: EmotionDetector,
}

impl FromRef<ServerState> for EmotionDetector {
    fn from_ref(input: &ServerState) -> Self {
        input.detector.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
