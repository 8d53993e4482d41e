use crate::core::{PlayerId, MAX_SIDE, MIN_SIDE};
use crate::error::ConfigurationError;
use crate::player::StrategyKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "stonehenge.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub side_length: usize,
    pub first_player: PlayerId,
    pub player1: StrategyKind,
    pub player2: StrategyKind,
    pub selfplay: SelfPlaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlaySettings {
    pub num_games: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            side_length: 2,
            first_player: PlayerId::Player1,
            player1: StrategyKind::Human,
            player2: StrategyKind::Minimax,
            selfplay: SelfPlaySettings::default(),
        }
    }
}

impl Default for SelfPlaySettings {
    fn default() -> Self {
        SelfPlaySettings {
            num_games: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Missing file means defaults; a file that exists but is broken is an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.side_length) {
            return Err(ConfigurationError::SideLength {
                got: self.side_length,
                min: MIN_SIDE,
                max: MAX_SIDE,
            });
        }
        if self.selfplay.num_games == 0 {
            return Err(ConfigurationError::Invalid(
                "selfplay.num_games must be > 0".into(),
            ));
        }
        Ok(())
    }
}
