//! A wild encounter from first cry to capture

use crate::battle::execution::{run_rounds, Battlefield};
use crate::battle::BattleResult;
use crate::core::error::Result;
use crate::core::GameRng;
use crate::entity::{Creature, Item, Player};
use crate::ui::{Console, Terminal};

/// A battle between a player and one wild creature
#[derive(Debug, Clone)]
pub struct Battle {
    wild: Creature,
}

impl Battle {
    pub fn new(wild: Creature) -> Self {
        Self { wild }
    }

    /// Run the encounter to its end
    ///
    /// Both creatures fight as scratch copies. Afterwards only life is carried
    /// back: to the player's roster creature, and to the untouched copy of the
    /// wild creature that gets captured on success.
    pub fn start<T: Terminal>(
        self,
        player: &mut Player,
        console: &mut Console<T>,
        rng: &mut GameRng,
    ) -> Result<BattleResult> {
        let wild = self.wild;

        console.battle_starts()?;
        console.wants_to_battle(&wild.name)?;
        console.show_creature(&wild, true)?;
        console.out_of_pokeball(&wild)?;

        let Some(index) = player.choose_creature(console)? else {
            tracing::info!(player = %player.name, "no creature able to fight");
            return Ok(BattleResult::GameOver);
        };

        let mut original_wild = wild.clone();
        let fighter = player.creatures()[index].clone();
        console.out_of_pokeball(&fighter)?;

        tracing::info!(
            player = %player.name,
            fighter = %fighter.name,
            wild = %wild.name,
            wild_level = wild.level,
            "battle started"
        );

        let mut field = Battlefield::new(fighter, wild);
        let rounds = run_rounds(&mut field, console, rng)?;

        if let Some(own) = player.creature_mut(index) {
            own.life = field.trainer.life;
        }
        original_wild.life = field.wild.life;

        let result = if field.trainer.is_alive() {
            BattleResult::Victory
        } else {
            BattleResult::Defeat
        };
        tracing::info!(player = %player.name, rounds, result = ?result, "battle finished");

        match result {
            BattleResult::Victory => {
                console.battle_won(&player.name)?;
                try_capture(player, original_wild, console, rng)?;
            }
            _ => console.battle_lost(&player.name)?,
        }

        Ok(result)
    }
}

/// Offer a pokeball throw at a beaten wild creature. Returns true if caught.
pub fn try_capture<T: Terminal>(
    player: &mut Player,
    creature: Creature,
    console: &mut Console<T>,
    rng: &mut GameRng,
) -> Result<bool> {
    if !player.inventory().has(Item::Pokeball) {
        return Ok(false);
    }

    let question = format!("Throw a pokeball at {}?", creature.name);
    if !console.confirm(&question)? {
        return Ok(false);
    }

    player.inventory_mut().toss(Item::Pokeball);
    console.catch_attempt(&player.name, &creature.name)?;

    let caught = rng.is_good();
    tracing::info!(player = %player.name, creature = %creature.name, caught, "pokeball thrown");

    if caught {
        player.catch_creature(creature, console)?;
    } else {
        console.creature_ran_away(&creature.name)?;
    }
    Ok(caught)
}
