//! Shared domain types and configuration for the leadscout pipeline.

pub mod app_config;
pub mod config;
pub mod leads;
pub mod profile;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, load_log_level_from_env};
pub use leads::{AcceptedLead, RawLead, DEFAULT_COMPANY, DEFAULT_SCORE};
pub use profile::{load_profile, RoleProfile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read role profile {path}: {source}")]
    ProfileFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse role profile: {0}")]
    ProfileFileParse(#[from] serde_yaml::Error),

    #[error("invalid role profile: {0}")]
    Validation(String),
}
