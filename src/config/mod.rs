mod file_config;

pub use file_config::FileConfig;

use crate::classifier::watson;
use crate::server::RequestsLoggingLevel;
use anyhow::Result;
use clap::ValueEnum;
use std::time::Duration;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub host: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub classifier_url: String,
    pub classifier_model_id: String,
    pub classifier_timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            logging_level: RequestsLoggingLevel::default(),
            frontend_dir_path: None,
            classifier_url: watson::DEFAULT_ENDPOINT_URL.to_string(),
            classifier_model_id: watson::DEFAULT_MODEL_ID.to_string(),
            classifier_timeout_secs: watson::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub classifier_url: String,
    pub classifier_model_id: String,
    pub classifier_timeout: Duration,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let host = file.host.unwrap_or_else(|| cli.host.clone());
        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let classifier_url = file
            .classifier_url
            .unwrap_or_else(|| cli.classifier_url.clone());
        let classifier_model_id = file
            .classifier_model_id
            .unwrap_or_else(|| cli.classifier_model_id.clone());
        let classifier_timeout = Duration::from_secs(
            file.classifier_timeout_secs
                .unwrap_or(cli.classifier_timeout_secs),
        );

        Ok(AppConfig {
            host,
            port,
            logging_level,
            frontend_dir_path,
            classifier_url,
            classifier_model_id,
            classifier_timeout,
        })
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
