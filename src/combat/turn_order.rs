//! Who acts first in a round
//!
//! Faster creature first; ties go to the trainer's creature.

use serde::{Deserialize, Serialize};

/// One of the two combatants in a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Trainer,
    Wild,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Trainer => Side::Wild,
            Side::Wild => Side::Trainer,
        }
    }
}

/// A round's two phases as (attacker, defender) pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    pub phases: [(Side, Side); 2],
}

impl TurnOrder {
    pub fn new(first: Side) -> Self {
        let second = first.opponent();
        Self {
            phases: [(first, second), (second, first)],
        }
    }

    /// Order by descending agility
    pub fn by_agility(trainer_agility: u32, wild_agility: u32) -> Self {
        if trainer_agility >= wild_agility {
            Self::new(Side::Trainer)
        } else {
            Self::new(Side::Wild)
        }
    }

    pub fn first(&self) -> Side {
        self.phases[0].0
    }
}
