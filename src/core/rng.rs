//! Random number generation for battles and creature generation
//!
//! Uses a seeded ChaCha RNG so a whole session can be replayed from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::Element;
use crate::core::constants::{
    BASE_LIFE, CAPTURE_FAIL_THRESHOLD, DICE_SIDES, LEVEL_BASE, LEVEL_SPREAD, LIFE_PER_LEVEL_MIN,
    LIFE_PER_LEVEL_SPREAD, MONEY_BASE, MONEY_SPREAD, STAT_BASE, STAT_SPREAD,
};

/// Game random number generator
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw from [0, 1)
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform integer in [0, n). Returns 0 if n is 0.
    pub fn range(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Ten-sided die, 1..=10
    pub fn d10(&mut self) -> u32 {
        self.rng.gen_range(1..=DICE_SIDES)
    }

    /// Uniform index into a collection of `len` items
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.choose_index(items.len()).map(|i| &items[i])
    }

    pub fn element(&mut self) -> Element {
        let all = Element::all();
        all[self.rng.gen_range(0..all.len())]
    }

    /// A positive override wins; otherwise 5..=9
    pub fn level(&mut self, level: Option<u32>) -> u32 {
        match level {
            Some(level) if level > 0 => level,
            _ => LEVEL_BASE + self.range(LEVEL_SPREAD),
        }
    }

    /// Strength, defense or agility roll, 2..=11
    pub fn stat(&mut self) -> u32 {
        STAT_BASE + self.range(STAT_SPREAD)
    }

    /// Starting money, 5000..=14999
    pub fn money(&mut self) -> u64 {
        MONEY_BASE + self.range(MONEY_SPREAD) as u64
    }

    /// Life total for a creature of the given level
    pub fn life(&mut self, level: u32) -> u32 {
        let mut life = BASE_LIFE;
        for _ in 0..level {
            life += LIFE_PER_LEVEL_MIN + self.unit() * LIFE_PER_LEVEL_SPREAD;
        }
        life.floor() as u32
    }

    /// True 70% of the time
    pub fn is_good(&mut self) -> bool {
        self.unit() > CAPTURE_FAIL_THRESHOLD
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
