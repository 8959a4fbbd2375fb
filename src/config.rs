//! Quiz configuration.
//!
//! Values come from defaults, an optional JSON file, or `SUBNET_QUIZ_*` environment
//! variables (a `.env` file is loaded first).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Correct answers needed to complete a session.
pub const DEFAULT_TARGET_CORRECT: u32 = 5;

/// CIDR prefixes the generator draws question masks from.
pub const MASK_POOL_PREFIXES: [u8; 8] = [8, 16, 22, 23, 24, 25, 26, 27];

pub const ENV_TARGET: &str = "SUBNET_QUIZ_TARGET";
pub const ENV_SEED: &str = "SUBNET_QUIZ_SEED";
pub const ENV_SHOW_BINARY: &str = "SUBNET_QUIZ_SHOW_BINARY";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QuizConfig {
    /// Correct answers needed before the session completes.
    pub target_correct: u32,
    /// Fixed random seed, `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Show binary forms of the question in the terminal host.
    pub show_binary: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            target_correct: DEFAULT_TARGET_CORRECT,
            seed: None,
            show_binary: true,
        }
    }
}

impl QuizConfig {
    /// Read config from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: &str) -> Result<QuizConfig, Box<dyn Error>> {
        if !Path::new(path).exists() {
            return Err(format!("Config file does not exist: {path}").into());
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading config file {path}: {e}"))?;
        log::info!("Reading config file: {path}");

        let mut deserializer = serde_json::Deserializer::from_str(&json);
        let config: QuizConfig = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|e| format!("Error parsing config {path}: path={} error={}", e.path(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `SUBNET_QUIZ_*` environment variables.
    pub fn from_env() -> Result<QuizConfig, Box<dyn Error>> {
        dotenv::dotenv().ok();
        let mut config = QuizConfig::default();

        if let Ok(value) = std::env::var(ENV_TARGET) {
            config.target_correct = value
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_TARGET}={value}: {e}"))?;
        }
        if let Ok(value) = std::env::var(ENV_SEED) {
            let seed = value
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_SEED}={value}: {e}"))?;
            config.seed = Some(seed);
        }
        if let Ok(value) = std::env::var(ENV_SHOW_BINARY) {
            config.show_binary = parse_flag(&value)
                .ok_or_else(|| format!("Invalid {ENV_SHOW_BINARY}={value}: expected true or false"))?;
        }

        config.validate()?;
        log::debug!("config from env: {config:?}");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.target_correct == 0 {
            return Err("target_correct must be at least 1".into());
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.target_correct, 5);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_target_rejected() {
        let config = QuizConfig {
            target_correct: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: QuizConfig = serde_json::from_str(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.target_correct, DEFAULT_TARGET_CORRECT);
        assert!(config.show_binary);
    }

    #[test]
    fn test_from_file_reports_field_path() {
        let path = std::env::temp_dir().join("subnet_quiz_bad_config.json");
        std::fs::write(&path, r#"{ "target_correct": "five" }"#).unwrap();
        let err = QuizConfig::from_file(path.to_str().unwrap())
            .unwrap_err()
            .to_string();
        assert!(err.contains("target_correct"), "unexpected error: {err}");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_file_missing() {
        assert!(QuizConfig::from_file("does/not/exist.json").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
