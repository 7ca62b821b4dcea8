//! The professor's starter pool
//!
//! One pool per session. Starters leave it for good when a player claims
//! them, and wild encounters use whatever remains as species templates.

use crate::core::constants::{STARTER_LEVEL, STARTER_SPECIES};
use crate::core::GameRng;
use crate::entity::Creature;

#[derive(Debug, Clone, Default)]
pub struct StarterPool {
    creatures: Vec<Creature>,
}

impl StarterPool {
    /// Roll the standard starters at the starter level
    pub fn generate(rng: &mut GameRng) -> Self {
        let creatures = STARTER_SPECIES
            .iter()
            .map(|name| Creature::generate(*name, Some(STARTER_LEVEL), rng))
            .collect();
        Self { creatures }
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn names(&self) -> Vec<String> {
        self.creatures.iter().map(|c| c.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.name == name)
    }

    /// Take a starter out of the pool
    pub fn claim(&mut self, name: &str) -> Option<Creature> {
        let index = self.creatures.iter().position(|c| c.name == name)?;
        Some(self.creatures.remove(index))
    }

    /// Pick a species name at random without touching the pool
    pub fn random_species(&self, rng: &mut GameRng) -> Option<&str> {
        rng.choose(&self.creatures).map(|c| c.name.as_str())
    }
}
