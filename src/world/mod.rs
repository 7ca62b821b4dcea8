//! Places a player visits during a play-through

pub mod mart;
pub mod professor;
pub mod species;
pub mod woods;

pub use mart::Mart;
pub use professor::assign_starter;
pub use species::StarterPool;
pub use woods::{find_battle, spawn_wild};
