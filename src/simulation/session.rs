//! A play session: every invited player, one full play-through at a time

use serde::{Deserialize, Serialize};

use crate::battle::BattleResult;
use crate::core::constants::POKEBALLS_PER_VISIT;
use crate::core::error::Result;
use crate::core::{GameConfig, GameRng};
use crate::entity::{Item, Player};
use crate::simulation::roster::Roster;
use crate::ui::{Console, Terminal};
use crate::world::{assign_starter, find_battle, Mart, StarterPool};

const PLAYER_SEPARATOR_WIDTH: usize = 70;

/// What a player ended their play-through with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayThroughReport {
    pub player: String,
    pub result: BattleResult,
    /// Creature names in capture order
    pub creatures: Vec<String>,
    pub pokeballs: usize,
    pub money: u64,
}

impl PlayThroughReport {
    fn from_player(player: &Player, result: BattleResult) -> Self {
        Self {
            player: player.name.clone(),
            result,
            creatures: player.creatures().iter().map(|c| c.name.clone()).collect(),
            pokeballs: player.inventory().count(Item::Pokeball),
            money: player.money(),
        }
    }
}

/// All session state, passed explicitly to each phase
pub struct Session<T: Terminal> {
    config: GameConfig,
    console: Console<T>,
    rng: GameRng,
    roster: Roster,
    starters: StarterPool,
}

impl<T: Terminal> Session<T> {
    pub fn new(config: GameConfig, terminal: T) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let starters = StarterPool::generate(&mut rng);
        let console = Console::new(terminal, config.pacing);

        tracing::info!(seed = rng.seed(), players = config.players.len(), "session created");

        Ok(Self {
            config,
            console,
            rng,
            roster: Roster::new(),
            starters,
        })
    }

    pub fn console(&self) -> &Console<T> {
        &self.console
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn starters(&self) -> &StarterPool {
        &self.starters
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn invite(&mut self, name: impl Into<String>) {
        self.roster.invite(name, &mut self.rng);
    }

    /// Invite the configured players and run each to completion, in order
    pub fn run(&mut self) -> Result<Vec<PlayThroughReport>> {
        self.console.start_game()?;

        for name in self.config.players.clone() {
            self.invite(name);
        }

        self.drain()
    }

    /// Run every player currently on the roster, removing each when done
    pub fn drain(&mut self) -> Result<Vec<PlayThroughReport>> {
        let mut reports = Vec::with_capacity(self.roster.len());

        for name in self.roster.names() {
            self.console.log("-".repeat(PLAYER_SEPARATOR_WIDTH))?;

            if let Some(result) = self.play_through(&name)? {
                if let Some(player) = self.roster.remove(&name) {
                    reports.push(PlayThroughReport::from_player(&player, result));
                }
            }

            let left = self.roster.len();
            self.console.game_over(left)?;
        }

        Ok(reports)
    }

    /// Shop, starter, woods. `None` if `name` is not on the roster.
    pub fn play_through(&mut self, name: &str) -> Result<Option<BattleResult>> {
        let Self {
            console,
            rng,
            roster,
            starters,
            ..
        } = self;

        let Some(player) = roster.get_mut(name) else {
            tracing::warn!(player = %name, "player missing from roster");
            return Ok(None);
        };

        console.new_player(&player.name)?;
        show_bag(player, console)?;

        Mart::enter(player, console)?.buy_item(POKEBALLS_PER_VISIT)?;
        show_bag(player, console)?;

        assign_starter(player, starters, console)?;

        let result = find_battle(player, starters, console, rng)?;

        console.show_creatures(player.creatures())?;
        console.show_inventory(player.inventory())?;

        Ok(Some(result))
    }
}

fn show_bag<T: Terminal>(player: &Player, console: &mut Console<T>) -> Result<()> {
    console.show_inventory(player.inventory())?;
    console.show_money(&player.formatted_money())
}
