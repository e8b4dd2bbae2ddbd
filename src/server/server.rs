use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    middleware,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tracing::info;

use super::{log_requests, state::ServerState, ServerConfig};
use crate::classifier::{EmotionDetector, EmotionRecord};

const INDEX_PAGE: &str = include_str!("../../static/index.html");

const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

#[derive(Deserialize, Debug)]
struct EmotionDetectorParams {
    #[serde(rename = "textToAnalyze")]
    text_to_analyze: Option<String>,
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Scores the query text and renders the result as a plain-text sentence.
///
/// Success and failure both answer 200; the distinction lives in the body
/// only. A missing `textToAnalyze` parameter is forwarded to the detector
/// as empty text like any other input.
async fn detect_emotion(
    State(detector): State<EmotionDetector>,
    Query(params): Query<EmotionDetectorParams>,
) -> String {
    let text = params.text_to_analyze.unwrap_or_default();

    match detector.detect(&text).await {
        EmotionRecord::Scored { scores, dominant } => format!(
            "For the given statement, the system response is 'anger': {} 'disgust': {}, \
             'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
            scores.anger, scores.disgust, scores.fear, scores.joy, scores.sadness, dominant
        ),
        EmotionRecord::Unscored => INVALID_TEXT_MESSAGE.to_string(),
    }
}

pub fn make_app(config: ServerConfig, detector: EmotionDetector) -> Router {
    let state = ServerState {
        config: config.clone(),
        detector,
    };

    let detector_routes: Router = Router::new()
        .route("/emotionDetector", get(detect_emotion))
        .with_state(state.clone());

    let index_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new().route("/", get(index)),
    };

    index_router
        .merge(detector_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(config: ServerConfig, detector: EmotionDetector) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let app = make_app(config, detector);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on {}", addr);

    Ok(axum::serve(listener, app).await?)
}
