//! Round-by-round execution of a battle
//!
//! Rounds repeat while both creatures stand. Each round has two phases in
//! agility order, and a phase that knocks the defender out ends the fight.

use crate::combat::{BattleAction, Side, TurnOrder};
use crate::core::error::Result;
use crate::core::GameRng;
use crate::entity::Creature;
use crate::ui::{Console, Terminal};

/// The two creatures on the field
#[derive(Debug, Clone)]
pub struct Battlefield {
    pub trainer: Creature,
    pub wild: Creature,
}

impl Battlefield {
    pub fn new(trainer: Creature, wild: Creature) -> Self {
        Self { trainer, wild }
    }

    pub fn get(&self, side: Side) -> &Creature {
        match side {
            Side::Trainer => &self.trainer,
            Side::Wild => &self.wild,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut Creature {
        match side {
            Side::Trainer => &mut self.trainer,
            Side::Wild => &mut self.wild,
        }
    }

    pub fn both_alive(&self) -> bool {
        self.trainer.is_alive() && self.wild.is_alive()
    }

    pub fn turn_order(&self) -> TurnOrder {
        TurnOrder::by_agility(self.trainer.agility, self.wild.agility)
    }
}

/// Owned creatures take orders from the menu; wild ones act at random
pub fn select_action<T: Terminal>(
    actor: &Creature,
    console: &mut Console<T>,
    rng: &mut GameRng,
) -> Result<BattleAction> {
    let actions = actor.actions();

    if actor.is_wild() {
        let index = rng.choose_index(actions.len()).unwrap_or(0);
        return Ok(actions[index]);
    }

    console.show_action_menu(actor)?;
    let keys: Vec<String> = (1..=actions.len()).map(|n| n.to_string()).collect();
    let key = console.choose("Select your action", &keys)?;
    let index = keys.iter().position(|k| *k == key).unwrap_or(0);
    Ok(actions[index])
}

/// One phase: `attacker` picks and performs an action on its opponent
pub fn run_phase<T: Terminal>(
    field: &mut Battlefield,
    attacker: Side,
    console: &mut Console<T>,
    rng: &mut GameRng,
) -> Result<()> {
    let defender = attacker.opponent();

    let action = select_action(field.get(attacker), console, rng)?;
    let result = {
        let actor = field.get(attacker);
        console.log(format!("{} {}", actor.name, action.name(actor)))?;
        action.perform(actor, field.get(defender), rng)
    };

    let delay = console.pacing().action;
    console.sleep(delay);
    console.log(result.describe())?;
    result.commit(field.get_mut(defender));

    tracing::debug!(
        attacker = %field.get(attacker).name,
        action = ?action,
        strength = result.exchange().strength,
        resistance = result.exchange().resistance,
        "phase resolved"
    );
    Ok(())
}

/// Fight until one side drops. Returns the number of rounds fought.
pub fn run_rounds<T: Terminal>(
    field: &mut Battlefield,
    console: &mut Console<T>,
    rng: &mut GameRng,
) -> Result<u32> {
    let mut turn = 0;

    while field.both_alive() {
        turn += 1;
        console.log_battle_turn(turn)?;

        let order = field.turn_order();
        console.show_battle_stats(&[&field.trainer, &field.wild])?;

        for (attacker, defender) in order.phases {
            run_phase(field, attacker, console, rng)?;
            if !field.get(defender).is_alive() {
                return Ok(turn);
            }
        }

        let delay = console.pacing().round;
        console.sleep(delay);
    }

    Ok(turn)
}
