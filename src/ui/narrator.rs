//! Fixed narration and stat panels
//!
//! Every player-facing message of the game is spelled out here so the flow
//! code only says *what* happened.

use crate::core::error::Result;
use crate::entity::{Creature, Inventory};
use crate::ui::console::Console;
use crate::ui::table::DrawingPlan;
use crate::ui::terminal::Terminal;

const MART: &str = "Mart";
const PROFESSOR: &str = "Professor Oak";

/// Stat panel for one creature. Wild creatures hide strength, defense and agility.
pub fn plan_creature_stats(creature: &Creature, wild_view: bool) -> DrawingPlan {
    let mut lines = vec![
        format!("{} Lv{}", creature.name, creature.level),
        "-".to_string(),
        format!("Typ {}", creature.element),
        "-".to_string(),
        format!("Lif {}/{}", creature.life, creature.max_life),
    ];
    if !wild_view {
        lines.push(format!("Str {}", creature.strength));
        lines.push(format!("Def {}", creature.defense));
        lines.push(format!("Agi {}", creature.agility));
    }
    DrawingPlan::new("Pokemon stats", lines)
}

/// Numbered action menu lines, e.g. `1) Fire attack`
pub fn plan_action_menu(creature: &Creature) -> Vec<String> {
    creature
        .actions()
        .iter()
        .enumerate()
        .map(|(i, action)| format!("{}) {}", i + 1, action.name(creature)))
        .collect()
}

/// Inventory lines grouped by item name, e.g. `Pokeball x20`
pub fn plan_inventory(inventory: &Inventory) -> Vec<String> {
    inventory
        .summary()
        .into_iter()
        .map(|(name, count)| format!("{} x{}", name, count))
        .collect()
}

impl<T: Terminal> Console<T> {
    // === Panels ===

    pub fn show_creature(&mut self, creature: &Creature, wild_view: bool) -> Result<()> {
        let plan = plan_creature_stats(creature, wild_view);
        self.draw_table(&plan.title, &plan.lines)
    }

    /// Full stats for a group of creatures, side by side
    pub fn show_creatures(&mut self, creatures: &[Creature]) -> Result<()> {
        let plans: Vec<DrawingPlan> = creatures.iter().map(|c| plan_creature_stats(c, false)).collect();
        self.draw_tables("Pokemons stats", &plans)
    }

    /// Both combatants; wild stats stay hidden
    pub fn show_battle_stats(&mut self, combatants: &[&Creature]) -> Result<()> {
        let plans: Vec<DrawingPlan> = combatants
            .iter()
            .map(|c| plan_creature_stats(c, c.is_wild()))
            .collect();
        self.draw_tables("Battling pokemons", &plans)
    }

    pub fn show_inventory(&mut self, inventory: &Inventory) -> Result<()> {
        self.draw_table("Inventory", &plan_inventory(inventory))
    }

    pub fn show_money(&mut self, formatted: &str) -> Result<()> {
        self.draw_table("Money", &[format!("P {}", formatted)])
    }

    pub fn show_action_menu(&mut self, creature: &Creature) -> Result<()> {
        self.draw_table(&creature.name, &plan_action_menu(creature))
    }

    // === Session ===

    pub fn start_game(&mut self) -> Result<()> {
        self.log("Beep boop!")?;
        self.log("Game started!")
    }

    pub fn new_player(&mut self, player: &str) -> Result<()> {
        self.log(format!("{} started the journey!", player))
    }

    /// `players_left` is how many players are still waiting their turn
    pub fn game_over(&mut self, players_left: usize) -> Result<()> {
        self.log("Game over!")?;
        self.log("Thanks for playing!")?;
        if players_left > 0 {
            self.log("Another adventure will start in a few seconds!")?;
            let delay = self.pacing().next_adventure;
            self.sleep(delay);
        }
        Ok(())
    }

    // === Money and mart ===

    pub fn enter_mart(&mut self) -> Result<()> {
        self.log(format!("{} : How can I help you?", MART))
    }

    pub fn offer_pokeballs(&mut self, quantity: u32) -> Result<()> {
        let noun = if quantity == 1 { "pokeball" } else { "pokeballs" };
        self.log(format!("{} : Do you want to buy {} {}?", MART, quantity, noun))
    }

    pub fn item_bought(&mut self) -> Result<()> {
        self.log(format!("{} : Thanks for shopping with us!", MART))
    }

    pub fn money_withdrawn(&mut self) -> Result<()> {
        self.log("Katshinn!")
    }

    pub fn no_money(&mut self) -> Result<()> {
        self.log("You have not enough money!")
    }

    // === Professor ===

    pub fn professor(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.log(format!("{} : {}", PROFESSOR, message.as_ref()))
    }

    pub fn professor_question(&self, message: &str) -> String {
        format!("{} : {}", PROFESSOR, message)
    }

    // === Creatures ===

    pub fn first_creature(&mut self, creature: &str) -> Result<()> {
        self.log(format!("Congratulations, {} will be your first pokemon!", creature))
    }

    pub fn creature_cry(&mut self, creature: &str) -> Result<()> {
        self.log(format!("{} : Rawr!", creature))
    }

    pub fn trainer_summons(&mut self, trainer: &str, creature: &str) -> Result<()> {
        self.log(format!("{} : {} I choose you!", trainer, creature))
    }

    /// A creature enters the field; owned ones are called out by their trainer
    pub fn out_of_pokeball(&mut self, creature: &Creature) -> Result<()> {
        if let Some(owner) = creature.owner() {
            self.trainer_summons(owner, &creature.name)?;
        }
        self.creature_cry(&creature.name)
    }

    // === Battle ===

    pub fn battle_starts(&mut self) -> Result<()> {
        self.log("~~~ Nana Nana Nana Nana na ~~~")
    }

    pub fn wants_to_battle(&mut self, creature: &str) -> Result<()> {
        self.log(format!("{} wants to battle!", creature))
    }

    pub fn battle_won(&mut self, player: &str) -> Result<()> {
        self.log("You won!")?;
        self.log(format!("{} :)", player))
    }

    pub fn battle_lost(&mut self, player: &str) -> Result<()> {
        self.log("You lose!")?;
        self.log(format!("{} :(", player))
    }

    pub fn catch_attempt(&mut self, player: &str, creature: &str) -> Result<()> {
        self.log(format!("{} threw a pokeball at {}!", player, creature))
    }

    pub fn creature_caught(&mut self, player: &str, creature: &str) -> Result<()> {
        self.wobble("Bling!")?;
        self.log(format!("{} caught {}!", player, creature))
    }

    pub fn creature_ran_away(&mut self, creature: &str) -> Result<()> {
        self.wobble("Poof!")?;
        self.log(format!("{} ran away!", creature))
    }

    /// Two suspenseful wobbles and a final sound
    fn wobble(&mut self, last: &str) -> Result<()> {
        let delay = self.pacing().suspense;
        for sound in ["Bling...", "Bling...", last] {
            self.log(sound)?;
            self.sleep(delay);
        }
        Ok(())
    }
}
