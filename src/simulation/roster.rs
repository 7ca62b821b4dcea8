//! The ordered set of players in a session

use crate::core::GameRng;
use crate::entity::Player;

#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new player at the back of the line
    pub fn invite(&mut self, name: impl Into<String>, rng: &mut GameRng) {
        let player = Player::new(name, rng);
        tracing::info!(player = %player.name, money = player.money(), "player invited");
        self.players.push(player);
    }

    /// Remove a player by name, returning them if present
    pub fn remove(&mut self, name: &str) -> Option<Player> {
        let index = self.index_of(name)?;
        tracing::info!(player = %name, "player left the roster");
        Some(self.players.remove(index))
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    /// Player names in invitation order
    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
