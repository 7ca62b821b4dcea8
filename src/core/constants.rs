//! Game balance constants - all fixed values in one place
//!
//! Balance is not configurable at runtime. Pacing lives in `core::config`.

// Mart
pub const POKEBALL_PRICE: u64 = 200;
pub const POKEBALLS_PER_VISIT: u32 = 20;

// Capture succeeds when a unit draw lands strictly above this (70% odds)
pub const CAPTURE_FAIL_THRESHOLD: f64 = 0.3;

// Life: BASE_LIFE plus MIN + U[0,1) * SPREAD per level, floored at the end
pub const BASE_LIFE: f64 = 15.0;
pub const LIFE_PER_LEVEL_MIN: f64 = 3.0;
pub const LIFE_PER_LEVEL_SPREAD: f64 = 7.0;

// Battle stats (strength, defense, agility)
pub const STAT_BASE: u32 = 2;
pub const STAT_SPREAD: u32 = 10;

// Levels
pub const LEVEL_BASE: u32 = 5;
pub const LEVEL_SPREAD: u32 = 5;
pub const STARTER_LEVEL: u32 = 5;
pub const WILD_LEVEL_BASE: u32 = 2;
pub const WILD_LEVEL_SPREAD: u32 = 4;

// Starting money
pub const MONEY_BASE: u64 = 5_000;
pub const MONEY_SPREAD: u32 = 10_000;

pub const DICE_SIDES: u32 = 10;

/// Species offered by the professor, in the order they are shown
pub const STARTER_SPECIES: [&str; 6] = [
    "Bulbasaur",
    "Squirtle",
    "Charmander",
    "Pikachu",
    "Onyx",
    "Goldeen",
];
