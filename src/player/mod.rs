pub mod ai;
pub mod controller;
pub mod human;

pub use ai::{MinimaxAI, RandomAI, RoughOutcomeAI, SearchMode};
pub use controller::PlayerController;
pub use human::HumanController;

use serde::{Deserialize, Serialize};
use std::fmt;

/// 戦略の種類 (設定ファイル・CLIから選択)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Human,
    Rough,
    Minimax,
    MinimaxIterative,
    Random,
}

impl StrategyKind {
    pub fn is_human(self) -> bool {
        self == StrategyKind::Human
    }

    /// Builds a controller. `seed` only affects [`StrategyKind::Random`].
    pub fn build(self, name: &str, seed: Option<u64>) -> Box<dyn PlayerController> {
        match self {
            StrategyKind::Human => Box::new(HumanController::new(name)),
            StrategyKind::Rough => Box::new(RoughOutcomeAI::new(name)),
            StrategyKind::Minimax => Box::new(MinimaxAI::new(name, SearchMode::Recursive)),
            StrategyKind::MinimaxIterative => {
                Box::new(MinimaxAI::new(name, SearchMode::Iterative))
            }
            StrategyKind::Random => match seed {
                Some(seed) => Box::new(RandomAI::with_seed(name, seed)),
                None => Box::new(RandomAI::new(name)),
            },
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            StrategyKind::Human => "Human",
            StrategyKind::Rough => "Rough AI",
            StrategyKind::Minimax => "Minimax AI",
            StrategyKind::MinimaxIterative => "Iterative Minimax AI",
            StrategyKind::Random => "Random AI",
        };
        f.write_str(name)
    }
}
