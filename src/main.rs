use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use emotion_server::classifier::{watson, EmotionDetector, WatsonEmotionClassifier};
use emotion_server::config::{AppConfig, CliConfig, FileConfig};
use emotion_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The address to bind to.
    #[clap(long, default_value = "0.0.0.0")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 5000)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to a frontend directory to serve instead of the built-in page.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// URL of the emotion classification endpoint.
    #[clap(long, default_value = watson::DEFAULT_ENDPOINT_URL)]
    pub classifier_url: String,

    /// Model id sent to the classification endpoint.
    #[clap(long, default_value = watson::DEFAULT_MODEL_ID)]
    pub classifier_model_id: String,

    /// Timeout in seconds for classification requests.
    #[clap(long, default_value_t = watson::DEFAULT_TIMEOUT.as_secs())]
    pub classifier_timeout_secs: u64,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            host: args.host.clone(),
            port: args.port,
            logging_level: args.logging_level.clone(),
            frontend_dir_path: args.frontend_dir_path.clone(),
            classifier_url: args.classifier_url.clone(),
            classifier_model_id: args.classifier_model_id.clone(),
            classifier_timeout_secs: args.classifier_timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    info!("Using emotion classifier at {}", config.classifier_url);
    let classifier = Arc::new(WatsonEmotionClassifier::new(
        config.classifier_url.clone(),
        config.classifier_model_id.clone(),
        config.classifier_timeout,
    ));
    let detector = EmotionDetector::new(classifier);

    let server_config = ServerConfig {
        requests_logging_level: config.logging_level.clone(),
        host: config.host.clone(),
        port: config.port,
        frontend_dir_path: config.frontend_dir_path.clone(),
    };

    info!("Starting server on {}:{}", config.host, config.port);
    run_server(server_config, detector).await
}
