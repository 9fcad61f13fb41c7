use crate::core::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "gomoku_config.json";

/// 対局モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Human moves first against the plain minimax AI.
    #[default]
    HumanVsMinimax,
    /// Minimax AI moves first against the alpha-beta AI.
    MinimaxVsAlphaBeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub minimax_depth: usize,
    pub alpha_beta_depth: usize,
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 6,
            minimax_depth: 2,
            alpha_beta_depth: 2,
            mode: GameMode::default(),
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            operation: format!("read {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load_from_or_default(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            eprintln!("[CONFIG] {} ignored, using defaults: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(GameError::InvalidConfig {
                message: format!(
                    "board size {} must be between {} and {}",
                    self.board_size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
                ),
            });
        }
        if self.minimax_depth < 1 || self.alpha_beta_depth < 1 {
            return Err(GameError::InvalidConfig {
                message: format!(
                    "search depths must be at least 1 (minimax {}, alpha-beta {})",
                    self.minimax_depth, self.alpha_beta_depth
                ),
            });
        }
        Ok(())
    }

    /// 入力値を寛容に補正する (小さすぎる盤は 5、大きすぎる盤は 15、深さは最低 1)
    pub fn clamped(mut self) -> Self {
        if self.board_size < MIN_BOARD_SIZE {
            self.board_size = MIN_BOARD_SIZE;
        } else if self.board_size > MAX_BOARD_SIZE {
            self.board_size = 15;
        }
        self.minimax_depth = self.minimax_depth.max(1);
        self.alpha_beta_depth = self.alpha_beta_depth.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size, 6);
        assert_eq!(config.mode, GameMode::HumanVsMinimax);
        assert_eq!(GameMode::default(), GameMode::HumanVsMinimax);

        let config: GameConfig = serde_json::from_str(r#"{"board_size": 7}"#).unwrap();
        assert_eq!(config.mode, GameMode::HumanVsMinimax);
    }

    #[test]
    fn test_validate_rejects_bounds() {
        let mut config = GameConfig::default();
        config.board_size = 4;
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig { .. })
        ));
        config.board_size = 20;
        assert!(config.validate().is_err());
        config.board_size = 19;
        config.alpha_beta_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamped() {
        let config = GameConfig {
            board_size: 3,
            minimax_depth: 0,
            alpha_beta_depth: 4,
            mode: GameMode::MinimaxVsAlphaBeta,
        }
        .clamped();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.minimax_depth, 1);
        assert_eq!(config.alpha_beta_depth, 4);

        let config = GameConfig {
            board_size: 40,
            ..GameConfig::default()
        }
        .clamped();
        assert_eq!(config.board_size, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"board_size": 9, "mode": "minimax_vs_alpha_beta"}"#).unwrap();
        assert_eq!(config.board_size, 9);
        assert_eq!(config.minimax_depth, 2);
        assert_eq!(config.mode, GameMode::MinimaxVsAlphaBeta);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load_from_or_default("definitely/not/here.json");
        assert_eq!(config, GameConfig::default());
        assert!(GameConfig::load("definitely/not/here.json").is_err());
    }
}
