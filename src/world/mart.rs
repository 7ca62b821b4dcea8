//! The Mart, where pokeballs are sold at a fixed price

use crate::core::constants::POKEBALL_PRICE;
use crate::core::error::Result;
use crate::entity::{Item, Player};
use crate::ui::{Console, Terminal};

/// A shop visit by one player
pub struct Mart<'a, T: Terminal> {
    player: &'a mut Player,
    console: &'a mut Console<T>,
    price: u64,
}

impl<'a, T: Terminal> Mart<'a, T> {
    /// Walk in; the clerk greets the player
    pub fn enter(player: &'a mut Player, console: &'a mut Console<T>) -> Result<Self> {
        console.enter_mart()?;
        Ok(Self {
            player,
            console,
            price: POKEBALL_PRICE,
        })
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    /// Buy `quantity` pokeballs, all or nothing
    pub fn buy_item(&mut self, quantity: u32) -> Result<bool> {
        self.console.offer_pokeballs(quantity)?;

        let cost = quantity as u64 * self.price;
        if !self.player.withdraw(cost, self.console)? {
            return Ok(false);
        }

        self.console.item_bought()?;
        for _ in 0..quantity {
            self.player.inventory_mut().add(Item::Pokeball);
        }
        tracing::info!(player = %self.player.name, quantity, cost, "pokeballs bought");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Pacing;
    use crate::ui::ScriptedTerminal;

    #[test]
    fn test_buy_three() {
        let mut con = Console::new(ScriptedTerminal::default(), Pacing::instant());
        let mut player = Player::with_money("Ash", 1000);
        {
            let mut mart = Mart::enter(&mut player, &mut con).unwrap();
            assert_eq!(mart.price(), 200);
            assert!(mart.buy_item(3).unwrap());
        }
        assert_eq!(player.money(), 400);
        assert_eq!(player.inventory().count(Item::Pokeball), 3);
        assert!(con.terminal().saw("Mart : Do you want to buy 3 pokeballs?"));
        assert!(con.terminal().saw("Mart : Thanks for shopping with us!"));
    }

    #[test]
    fn test_no_partial_purchase() {
        let mut con = Console::new(ScriptedTerminal::default(), Pacing::instant());
        let mut player = Player::with_money("Ash", 399);
        {
            let mut mart = Mart::enter(&mut player, &mut con).unwrap();
            assert!(!mart.buy_item(2).unwrap());
            assert!(mart.buy_item(1).unwrap());
        }
        assert_eq!(player.money(), 199);
        assert_eq!(player.inventory().count(Item::Pokeball), 1);
        assert!(con.terminal().saw("Do you want to buy 1 pokeball?"));
        assert!(con.terminal().saw("You have not enough money!"));
    }
}
