//! Creatures: generated stats, ownership and stat damage

use serde::{Deserialize, Serialize};

use crate::combat::{BattleAction, Element};
use crate::core::GameRng;

/// A battling creature
///
/// Stats are rolled once in [`Creature::generate`]. `Clone` yields an
/// independent copy with the same stats and the same owner, which is how
/// battles get a scratch copy to damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub element: Element,
    pub level: u32,
    pub life: u32,
    pub max_life: u32,
    pub strength: u32,
    pub defense: u32,
    pub agility: u32,
    /// Name of the trainer holding this creature; `None` means wild
    owner: Option<String>,
}

impl Creature {
    /// Roll a new wild creature. A positive `level` overrides the random level.
    pub fn generate(name: impl Into<String>, level: Option<u32>, rng: &mut GameRng) -> Self {
        let element = rng.element();
        let level = rng.level(level);
        let life = rng.life(level);

        Self {
            name: name.into(),
            element,
            level,
            life,
            max_life: life,
            strength: rng.stat(),
            defense: rng.stat(),
            agility: rng.stat(),
            owner: None,
        }
    }

    /// Build a creature from explicit stats (wild, full life)
    pub fn with_stats(
        name: impl Into<String>,
        element: Element,
        level: u32,
        life: u32,
        strength: u32,
        defense: u32,
        agility: u32,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            level,
            life,
            max_life: life,
            strength,
            defense,
            agility,
            owner: None,
        }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn set_owner(&mut self, owner: Option<String>) {
        self.owner = owner;
    }

    pub fn is_wild(&self) -> bool {
        self.owner.is_none()
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// The three moves every creature knows, in menu order
    pub fn actions(&self) -> [BattleAction; 3] {
        BattleAction::all()
    }

    pub fn type_multiplier(&self, enemy: &Creature) -> f64 {
        self.element.multiplier_against(enemy.element)
    }

    /// Lose `strength - resistance` life, never below zero
    pub fn get_hit(&mut self, strength: u32, resistance: u32) {
        self.life = self.life.saturating_sub(strength.saturating_sub(resistance));
    }

    /// Lose `strength - resistance` strength, never below zero
    pub fn get_weakened(&mut self, strength: u32, resistance: u32) {
        self.strength = self.strength.saturating_sub(strength.saturating_sub(resistance));
    }

    /// Lose `strength - resistance` defense, never below zero
    pub fn get_scared(&mut self, strength: u32, resistance: u32) {
        self.defense = self.defense.saturating_sub(strength.saturating_sub(resistance));
    }
}
