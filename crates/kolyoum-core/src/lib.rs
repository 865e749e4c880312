pub mod age;
pub mod app_config;
pub mod config;
pub mod profile;

pub use age::{calculate_age, calculate_age_today, get_age};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, log_level_from_env};
pub use profile::Profile;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgeError {
    #[error("invalid birthdate \"{input}\": {reason}")]
    InvalidBirthdate { input: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
