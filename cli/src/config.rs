use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_engine::Difficulty;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum FirstPlayer {
    Human,
    Bot,
    Random,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub difficulty: Difficulty,
    pub first_player: FirstPlayer,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            first_player: FirstPlayer::Human,
            seed: None,
        }
    }
}

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load(path: Option<&str>) -> Result<Config, String> {
    let path = path.map(PathBuf::from).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let unique = std::process::id();
        path.push(format!("temp_tictactoe_config_{}.yaml", unique));
        path
    }

    #[test]
    fn test_default_config_roundtrips_through_yaml() {
        let default_config = Config::default();

        let serialized = serde_yaml_ng::to_string(&default_config).unwrap();
        let deserialized: Config = serde_yaml_ng::from_str(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load(Some("/nonexistent/tictactoe_config.yaml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_file_is_loaded() {
        let path = get_temp_file_path();
        let expected = Config {
            difficulty: Difficulty::Hard,
            first_player: FirstPlayer::Random,
            seed: Some(7),
        };
        std::fs::write(&path, serde_yaml_ng::to_string(&expected).unwrap()).unwrap();

        let config = load(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, expected);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = get_temp_file_path().with_extension("bad.yaml");
        std::fs::write(&path, "difficulty: [not a difficulty").unwrap();

        let result = load(path.to_str());
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
