//! Battle actions and how each one rolls its attack
//!
//! Every action compares an attacking power against a defending power.
//! Nothing is applied here; the returned result decides what changes.

use serde::{Deserialize, Serialize};

use crate::combat::outcome::{BattleActionResult, Exchange};
use crate::core::GameRng;
use crate::entity::Creature;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleAction {
    /// Elemental strike against life
    Attack,
    /// Lowers the target's strength
    Growl,
    /// Lowers the target's defense
    Screech,
}

impl BattleAction {
    /// All actions in menu order
    pub fn all() -> [BattleAction; 3] {
        [BattleAction::Attack, BattleAction::Growl, BattleAction::Screech]
    }

    /// Menu label; attacks are named after the actor's element
    pub fn name(&self, actor: &Creature) -> String {
        match self {
            BattleAction::Attack => format!("{} attack", actor.element),
            BattleAction::Growl => "Growl".into(),
            BattleAction::Screech => "Screech".into(),
        }
    }

    /// Roll this action from `actor` against `enemy`
    pub fn perform(&self, actor: &Creature, enemy: &Creature, rng: &mut GameRng) -> BattleActionResult {
        match self {
            BattleAction::Attack => {
                let roll = rng.d10() as f64 * actor.type_multiplier(enemy);
                let strength = (actor.strength as f64 + roll).floor() as u32;
                let resistance = enemy.defense + rng.d10();
                BattleActionResult::Hit(Exchange::new(enemy, strength, resistance))
            }
            BattleAction::Growl => BattleActionResult::Weakened(status_exchange(actor, enemy, rng)),
            BattleAction::Screech => BattleActionResult::Scared(status_exchange(actor, enemy, rng)),
        }
    }
}

/// Level-versus-level contest shared by the status moves.
/// Both sides draw their bonus from the target's agility.
fn status_exchange(actor: &Creature, enemy: &Creature, rng: &mut GameRng) -> Exchange {
    let strength = actor.level + rng.range(enemy.agility) + rng.d10();
    let resistance = enemy.level + rng.range(enemy.agility) + rng.d10();
    Exchange::new(enemy, strength, resistance)
}
