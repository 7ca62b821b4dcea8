//! Players: money, bag and caught creatures

use crate::core::error::Result;
use crate::core::GameRng;
use crate::entity::{Creature, Inventory};
use crate::ui::{Console, Terminal};

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    money: u64,
    inventory: Inventory,
    /// Caught creatures in capture order
    creatures: Vec<Creature>,
}

impl Player {
    /// New player with a random starting balance
    pub fn new(name: impl Into<String>, rng: &mut GameRng) -> Self {
        Self::with_money(name, rng.money())
    }

    pub fn with_money(name: impl Into<String>, money: u64) -> Self {
        Self {
            name: name.into(),
            money,
            inventory: Inventory::new(),
            creatures: Vec::new(),
        }
    }

    pub fn money(&self) -> u64 {
        self.money
    }

    /// Balance with dots between thousands, e.g. `12.345`
    pub fn formatted_money(&self) -> String {
        let digits = self.money.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(digit);
        }
        out
    }

    /// Take `amount` from the balance. Refuses (and changes nothing) if it would go negative.
    pub fn withdraw<T: Terminal>(&mut self, amount: u64, console: &mut Console<T>) -> Result<bool> {
        match self.money.checked_sub(amount) {
            Some(rest) => {
                self.money = rest;
                tracing::debug!(player = %self.name, amount, balance = rest, "withdrawal");
                console.money_withdrawn()?;
                Ok(true)
            }
            None => {
                tracing::debug!(player = %self.name, amount, balance = self.money, "insufficient funds");
                console.no_money()?;
                Ok(false)
            }
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn creature_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.creatures.get_mut(index)
    }

    /// Add a creature to the roster and take ownership of it
    pub fn catch_creature<T: Terminal>(&mut self, mut creature: Creature, console: &mut Console<T>) -> Result<()> {
        if self.creatures.is_empty() {
            console.first_creature(&creature.name)?;
        } else {
            console.creature_caught(&self.name, &creature.name)?;
        }

        creature.set_owner(Some(self.name.clone()));
        tracing::info!(player = %self.name, creature = %creature.name, "creature joined roster");
        self.creatures.push(creature);
        Ok(())
    }

    /// Pick a living creature to send into battle, as a roster index
    ///
    /// `None` when there is nothing able to fight. A single candidate is
    /// returned without asking.
    pub fn choose_creature<T: Terminal>(&self, console: &mut Console<T>) -> Result<Option<usize>> {
        if self.creatures.is_empty() {
            console.log("You have no pokemons!")?;
            return Ok(None);
        }

        let alive: Vec<usize> = self
            .creatures
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| i)
            .collect();

        match alive.as_slice() {
            [] => {
                console.log("You have no life available pokemons to choose from!")?;
                Ok(None)
            }
            [only] => Ok(Some(*only)),
            _ => {
                let names: Vec<String> = alive.iter().map(|&i| self.creatures[i].name.clone()).collect();
                let choice = console.choose("Choose your pokemon:", &names)?;
                // choose() only returns listed names
                Ok(alive.into_iter().find(|&i| self.creatures[i].name == choice))
            }
        }
    }
}
