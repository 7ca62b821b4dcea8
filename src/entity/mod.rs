pub mod creature;
pub mod inventory;
pub mod player;

pub use creature::Creature;
pub use inventory::{Inventory, Item};
pub use player::Player;
