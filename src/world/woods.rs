//! The woods, where wild creatures are found

use crate::battle::{Battle, BattleResult};
use crate::core::constants::{WILD_LEVEL_BASE, WILD_LEVEL_SPREAD};
use crate::core::error::Result;
use crate::core::GameRng;
use crate::entity::{Creature, Player};
use crate::ui::{Console, Terminal};
use crate::world::species::StarterPool;

/// Spawn a fresh wild creature of a random pool species, or `None` if the pool is empty
pub fn spawn_wild(pool: &StarterPool, rng: &mut GameRng) -> Option<Creature> {
    let species = pool.random_species(rng)?.to_string();
    let level = WILD_LEVEL_BASE + rng.range(WILD_LEVEL_SPREAD);
    Some(Creature::generate(species, Some(level), rng))
}

/// Search for a wild creature and battle it
pub fn find_battle<T: Terminal>(
    player: &mut Player,
    pool: &StarterPool,
    console: &mut Console<T>,
    rng: &mut GameRng,
) -> Result<BattleResult> {
    console.log(format!("{} went to the woods", player.name))?;
    console.log(format!("{} is searching for a pokemon to battle", player.name))?;
    console.log("...")?;

    match spawn_wild(pool, rng) {
        Some(wild) => Battle::new(wild).start(player, console, rng),
        None => {
            console.log(format!("{} no pokemons were found", player.name))?;
            Ok(BattleResult::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Pacing;
    use crate::ui::ScriptedTerminal;

    #[test]
    fn test_wild_levels_in_band() {
        let mut rng = GameRng::new(12);
        let pool = StarterPool::generate(&mut rng);
        for _ in 0..200 {
            let wild = spawn_wild(&pool, &mut rng).unwrap();
            assert!((2..=5).contains(&wild.level));
            assert!(wild.is_wild());
            assert!(pool.get(&wild.name).is_some());
        }
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn test_empty_woods() {
        let mut rng = GameRng::new(12);
        let mut con = Console::new(ScriptedTerminal::default(), Pacing::instant());
        let mut player = Player::with_money("Ash", 0);
        let result = find_battle(&mut player, &StarterPool::default(), &mut con, &mut rng).unwrap();
        assert_eq!(result, BattleResult::None);
        assert!(con.terminal().saw("Ash no pokemons were found"));
    }
}
