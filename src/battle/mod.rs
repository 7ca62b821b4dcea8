//! Battles between a player's creature and a wild one

pub mod engagement;
pub mod execution;

use serde::{Deserialize, Serialize};

pub use engagement::{try_capture, Battle};
pub use execution::{run_rounds, Battlefield};

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleResult {
    /// The player had nothing able to fight
    GameOver,
    Victory,
    Defeat,
    /// No battle took place
    None,
}

impl BattleResult {
    pub fn is_game_over(&self) -> bool {
        matches!(self, BattleResult::GameOver)
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, BattleResult::Victory)
    }

    pub fn is_defeat(&self) -> bool {
        matches!(self, BattleResult::Defeat)
    }
}
