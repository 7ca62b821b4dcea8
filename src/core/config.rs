//! Session configuration with documented pacing values
//!
//! Game balance is fixed (see `core::constants`). What can change between
//! runs is who plays, how fast the narration scrolls, and the RNG seed.

use std::time::Duration;

use crate::core::error::{GameError, Result};

/// Environment variable holding a fixed RNG seed
pub const SEED_ENV: &str = "POCKET_TRAINER_SEED";

/// Environment variable that disables all pacing delays when set
pub const FAST_ENV: &str = "POCKET_TRAINER_FAST";

/// Delays inserted between narrated events
///
/// These only affect how the transcript feels when read live.
/// No game outcome depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after every narrated line
    pub line: Duration,

    /// Pause between choosing a battle action and seeing its result
    pub action: Duration,

    /// Pause after each battle round
    pub round: Duration,

    /// Pause per "Bling..." while a thrown pokeball wobbles
    pub suspense: Duration,

    /// Pause before the next player's adventure begins
    pub next_adventure: Duration,
}

impl Pacing {
    /// No delays at all (tests, autoplay)
    pub fn instant() -> Self {
        Self {
            line: Duration::ZERO,
            action: Duration::ZERO,
            round: Duration::ZERO,
            suspense: Duration::ZERO,
            next_adventure: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            line: Duration::from_millis(120),
            action: Duration::from_secs(2),
            round: Duration::from_secs(2),
            suspense: Duration::from_secs(1),
            next_adventure: Duration::from_secs(10),
        }
    }
}

/// Configuration for one play session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed RNG seed; `None` draws one from entropy
    pub seed: Option<u64>,

    /// Players invited to the roster, in play order
    pub players: Vec<String>,

    pub pacing: Pacing,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            players: vec!["Ash".into(), "Brock".into(), "Misty".into()],
            pacing: Pacing::default(),
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `POCKET_TRAINER_SEED` and `POCKET_TRAINER_FAST`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw.trim().parse::<u64>().map_err(|_| {
                GameError::InvalidConfig(format!("{} must be an unsigned integer, got {:?}", SEED_ENV, raw))
            })?;
            config.seed = Some(seed);
        }

        if lookup(FAST_ENV).is_some() {
            config.pacing = Pacing::instant();
        }

        config.validate()?;
        Ok(config)
    }

    /// Same players, fixed seed, no pacing
    pub fn instant(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            pacing: Pacing::instant(),
            ..Self::default()
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(GameError::InvalidConfig("at least one player is required".into()));
        }

        for (i, name) in self.players.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(GameError::InvalidConfig("player names must not be blank".into()));
            }
            // Roster lookups are by name
            if self.players[..i].contains(name) {
                return Err(GameError::InvalidConfig(format!("duplicate player name {:?}", name)));
            }
        }

        Ok(())
    }
}
