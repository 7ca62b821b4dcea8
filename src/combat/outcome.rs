//! Results of a performed battle action
//!
//! A result is computed first and committed second so the narration can
//! describe it before the target changes.

use serde::{Deserialize, Serialize};

use crate::entity::Creature;

/// Attacking strength against defending resistance, aimed at one creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Name of the creature the action was aimed at
    pub target: String,
    pub strength: u32,
    pub resistance: u32,
}

impl Exchange {
    pub fn new(target: &Creature, strength: u32, resistance: u32) -> Self {
        Self {
            target: target.name.clone(),
            strength,
            resistance,
        }
    }

    /// Strength beat resistance
    pub fn landed(&self) -> bool {
        self.strength > self.resistance
    }

    /// How far strength got past resistance (0 when it did not)
    pub fn margin(&self) -> u32 {
        self.strength.saturating_sub(self.resistance)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleActionResult {
    /// Damage to life
    Hit(Exchange),
    /// Damage to strength
    Weakened(Exchange),
    /// Damage to defense
    Scared(Exchange),
}

impl BattleActionResult {
    pub fn exchange(&self) -> &Exchange {
        match self {
            BattleActionResult::Hit(ex)
            | BattleActionResult::Weakened(ex)
            | BattleActionResult::Scared(ex) => ex,
        }
    }

    /// One line of narration for this result
    pub fn describe(&self) -> String {
        match self {
            BattleActionResult::Hit(ex) => {
                if ex.landed() {
                    format!("{} took {} damage!", ex.target, ex.margin())
                } else if ex.strength < ex.resistance {
                    format!("{} dodged the attack!", ex.target)
                } else {
                    format!("{} blocked the attack!", ex.target)
                }
            }
            BattleActionResult::Weakened(ex) => {
                if ex.landed() {
                    format!("{} has become weakened!", ex.target)
                } else {
                    format!("{} resisted the threat!", ex.target)
                }
            }
            BattleActionResult::Scared(ex) => {
                if ex.landed() {
                    format!("{} has become scared!", ex.target)
                } else {
                    format!("{} resisted the threat!", ex.target)
                }
            }
        }
    }

    /// Apply the result to its target. No-op unless strength beat resistance.
    pub fn commit(&self, target: &mut Creature) {
        let ex = self.exchange();
        if !ex.landed() {
            return;
        }
        match self {
            BattleActionResult::Hit(_) => target.get_hit(ex.strength, ex.resistance),
            BattleActionResult::Weakened(_) => target.get_weakened(ex.strength, ex.resistance),
            BattleActionResult::Scared(_) => target.get_scared(ex.strength, ex.resistance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Element;

    fn target() -> Creature {
        Creature::with_stats("Goldeen", Element::Water, 4, 10, 6, 5, 4)
    }

    fn exchange(strength: u32, resistance: u32) -> Exchange {
        Exchange::new(&target(), strength, resistance)
    }

    #[test]
    fn test_hit_descriptions() {
        assert_eq!(
            BattleActionResult::Hit(exchange(9, 4)).describe(),
            "Goldeen took 5 damage!"
        );
        assert_eq!(
            BattleActionResult::Hit(exchange(3, 4)).describe(),
            "Goldeen dodged the attack!"
        );
        assert_eq!(
            BattleActionResult::Hit(exchange(4, 4)).describe(),
            "Goldeen blocked the attack!"
        );
    }

    #[test]
    fn test_status_descriptions() {
        assert_eq!(
            BattleActionResult::Weakened(exchange(9, 4)).describe(),
            "Goldeen has become weakened!"
        );
        assert_eq!(
            BattleActionResult::Scared(exchange(9, 4)).describe(),
            "Goldeen has become scared!"
        );
        assert_eq!(
            BattleActionResult::Scared(exchange(4, 4)).describe(),
            "Goldeen resisted the threat!"
        );
    }

    #[test]
    fn test_commit_mutates_matching_stat() {
        let mut c = target();
        BattleActionResult::Hit(exchange(15, 5)).commit(&mut c);
        assert_eq!(c.life, 0);

        let mut c = target();
        BattleActionResult::Weakened(exchange(8, 5)).commit(&mut c);
        assert_eq!((c.life, c.strength, c.defense), (10, 3, 5));

        let mut c = target();
        BattleActionResult::Scared(exchange(8, 5)).commit(&mut c);
        assert_eq!((c.life, c.strength, c.defense), (10, 6, 2));
    }

    #[test]
    fn test_commit_ignores_failed_exchange() {
        let mut c = target();
        BattleActionResult::Hit(exchange(5, 5)).commit(&mut c);
        BattleActionResult::Weakened(exchange(1, 5)).commit(&mut c);
        assert_eq!(c, target());
    }
}
