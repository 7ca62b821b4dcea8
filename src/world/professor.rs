//! Starter assignment by the professor

use crate::core::error::Result;
use crate::entity::Player;
use crate::ui::{Console, Terminal};
use crate::world::species::StarterPool;

/// Let `player` pick a starter from the shared pool
///
/// Loops until the player confirms a starter that is still there. Returns
/// false if the pool is (or becomes) empty.
pub fn assign_starter<T: Terminal>(
    player: &mut Player,
    pool: &mut StarterPool,
    console: &mut Console<T>,
) -> Result<bool> {
    if pool.is_empty() {
        console.professor(format!("Hello {}! I have no more pokemons for you!", player.name))?;
        return Ok(false);
    }

    console.professor(format!(
        "Hello {}! To start your journey you must choose your first pokemon!",
        player.name
    ))?;
    console.show_creatures(pool.creatures())?;

    loop {
        let names = pool.names();
        if names.is_empty() {
            console.professor("There are no pokemons for you anymore!")?;
            return Ok(false);
        }

        let question = console.professor_question("Here are the options:");
        let choice = console.choose(&question, &names)?;

        let Some(selected) = pool.get(&choice) else {
            console.professor("There are no pokemons for you anymore!")?;
            continue;
        };

        let question = console.professor_question(&format!("Are you sure choosing {}?", selected.name));
        if !console.confirm(&question)? {
            console.professor("Very well, choose wisely!")?;
            continue;
        }

        match pool.claim(&choice) {
            Some(starter) => {
                console.professor("Here you go!")?;
                tracing::info!(player = %player.name, starter = %starter.name, left = pool.len(), "starter claimed");
                player.catch_creature(starter, console)?;
                return Ok(true);
            }
            None => {
                console.professor("I'm sorry but another trainer took this pokemon a moment ago!")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Pacing;
    use crate::core::GameRng;
    use crate::ui::ScriptedTerminal;

    fn console(answers: &[&str]) -> Console<ScriptedTerminal> {
        Console::new(ScriptedTerminal::new(answers.iter().copied()), Pacing::instant())
    }

    #[test]
    fn test_confirmed_choice_leaves_pool() {
        let mut rng = GameRng::new(4);
        let mut pool = StarterPool::generate(&mut rng);
        let mut player = Player::with_money("Ash", 0);
        let mut con = console(&["Pikachu", "y"]);

        assert!(assign_starter(&mut player, &mut pool, &mut con).unwrap());
        assert_eq!(player.creatures()[0].name, "Pikachu");
        assert_eq!(player.creatures()[0].owner(), Some("Ash"));
        assert!(pool.get("Pikachu").is_none());
        assert!(con.terminal().saw("Professor Oak : Here you go!"));
    }

    #[test]
    fn test_declined_choice_asks_again() {
        let mut rng = GameRng::new(4);
        let mut pool = StarterPool::generate(&mut rng);
        let mut player = Player::with_money("Misty", 0);
        let mut con = console(&["Onyx", "n", "Mew", "Goldeen", "OK"]);

        assert!(assign_starter(&mut player, &mut pool, &mut con).unwrap());
        assert_eq!(player.creatures()[0].name, "Goldeen");
        assert!(pool.get("Onyx").is_some());
        assert!(con.terminal().saw("Very well, choose wisely!"));
        assert!(con.terminal().saw("Wrong option!"));
    }

    #[test]
    fn test_empty_pool() {
        let mut pool = StarterPool::default();
        let mut player = Player::with_money("Brock", 0);
        let mut con = console(&[]);
        assert!(!assign_starter(&mut player, &mut pool, &mut con).unwrap());
        assert!(con.terminal().saw("I have no more pokemons for you!"));
        assert!(player.creatures().is_empty());
    }
}
