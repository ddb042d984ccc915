use std::io::ErrorKind;

use common::games::tictactoe::{BotKind, FirstPlayerMode};
use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum BotConfig {
    Random,
    Minimax,
}

impl From<BotConfig> for BotKind {
    fn from(bot: BotConfig) -> Self {
        match bot {
            BotConfig::Random => BotKind::Random,
            BotConfig::Minimax => BotKind::Minimax,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerConfig {
    Human,
    Ai,
    Random,
}

impl From<FirstPlayerConfig> for FirstPlayerMode {
    fn from(first: FirstPlayerConfig) -> Self {
        match first {
            FirstPlayerConfig::Human => FirstPlayerMode::Human,
            FirstPlayerConfig::Ai => FirstPlayerMode::Ai,
            FirstPlayerConfig::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub bot: BotConfig,
    pub first_player: FirstPlayerConfig,
    pub highlight_winning_line: bool,
    pub ai_move_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig::Minimax,
            first_player: FirstPlayerConfig::Human,
            highlight_winning_line: true,
            ai_move_delay_ms: 300,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.ai_move_delay_ms > 10_000 {
            return Err("ai_move_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}

/// Reads the YAML config, falling back to defaults when the file is absent.
/// A present but unreadable or invalid file is an error.
pub fn load_config(path: &str) -> Result<Config, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let config: Config = serde_yaml_ng::from_str(&content)
                .map_err(|e| format!("Failed to deserialize config: {}", e))?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            Ok(config)
        }
        Err(err) => match err.kind() {
            ErrorKind::NotFound => Ok(Config::default()),
            _ => Err(format!("Failed to read config file: {}", err)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = "bot: random\nfirst_player: ai\nhighlight_winning_line: false\nai_move_delay_ms: 0\n";
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.bot, BotConfig::Random);
        assert_eq!(config.first_player, FirstPlayerConfig::Ai);
        assert!(!config.highlight_winning_line);
        assert_eq!(config.ai_move_delay_ms, 0);
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_excessive_delay_rejected() {
        let config = Config {
            ai_move_delay_ms: 60_000,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = load_config("does_not_exist_tictactoe_config.yaml").unwrap();
        assert_eq!(config, Config::default());
    }
}
