use std::path::{Path, PathBuf};

use anyhow::Context;
use astar::Point;
use serde::{Deserialize, Serialize};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "BOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// board file, relative to the working directory
    pub board: PathBuf,
    pub start: Point,
    pub goal: Point,
    /// draw start and finish markers over the path
    pub mark_endpoints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: PathBuf::from("board.txt"),
            start: Point::new(0, 0),
            goal: Point::new(4, 5),
            mark_endpoints: false,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, anyhow::Error> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        Self::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load the file named by [`CONFIG_ENV`], or fall back to the defaults if it is not set.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.board, PathBuf::from("board.txt"));
        assert_eq!(config.goal, Point::new(4, 5));
    }

    #[test]
    fn test_partial() {
        let config =
            Config::from_json(r#"{ "goal": { "row": 2, "col": 3 }, "mark_endpoints": true }"#)
                .unwrap();

        assert_eq!(config.start, Point::new(0, 0));
        assert_eq!(config.goal, Point::new(2, 3));
        assert!(config.mark_endpoints);
    }

    #[test]
    fn test_invalid() {
        assert!(Config::from_json(r#"{ "start": "origin" }"#).is_err());
        assert!(Config::load("does/not/exist.json").is_err());
    }
}
