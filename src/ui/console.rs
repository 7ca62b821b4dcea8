//! Console: the one service every part of the game talks through
//!
//! Wraps a [`Terminal`] with pacing, input revalidation and table drawing.
//! Narration methods live in `ui::narrator`.

use std::time::Duration;

use crate::core::config::Pacing;
use crate::core::error::Result;
use crate::ui::table::{merge_plans, plan_table, DrawingPlan};
use crate::ui::terminal::{Prompt, Terminal};

/// Width of the dashed rule that follows "Turn N"
const TURN_RULE_WIDTH: usize = 60;

pub struct Console<T: Terminal> {
    terminal: T,
    pacing: Pacing,
}

impl<T: Terminal> Console<T> {
    pub fn new(terminal: T, pacing: Pacing) -> Self {
        Self { terminal, pacing }
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Write a line, then hold for the line delay
    pub fn log(&mut self, line: impl AsRef<str>) -> Result<()> {
        self.terminal.write_line(line.as_ref())?;
        self.terminal.pause(self.pacing.line);
        Ok(())
    }

    pub fn sleep(&mut self, duration: Duration) {
        self.terminal.pause(duration);
    }

    /// Free-text question, answer trimmed
    pub fn prompt(&mut self, question: &str) -> Result<String> {
        self.terminal.ask(Prompt::Text(question))
    }

    /// Yes/no question. Accepts "y", "s" or "ok" in any case; anything else is no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.terminal.ask(Prompt::Confirm(question))?;
        Ok(is_affirmative(&answer))
    }

    /// Ask until one of `options` is entered verbatim
    pub fn choose(&mut self, question: &str, options: &[String]) -> Result<String> {
        self.log(question)?;
        loop {
            let answer = self.terminal.ask(Prompt::Choice(options))?;
            if options.iter().any(|option| *option == answer) {
                return Ok(answer);
            }
            self.log("Wrong option!")?;
        }
    }

    pub fn log_battle_turn(&mut self, turn: u32) -> Result<()> {
        let digits = turn.to_string().len();
        let dashes = "-".repeat(TURN_RULE_WIDTH - digits + 1);
        self.log(format!("Turn {} {}", turn, dashes))
    }

    pub fn draw_table(&mut self, title: &str, lines: &[String]) -> Result<()> {
        for row in plan_table(title, lines) {
            self.log(row)?;
        }
        Ok(())
    }

    /// Draw several tables side by side under one title
    pub fn draw_tables(&mut self, title: &str, plans: &[DrawingPlan]) -> Result<()> {
        let merged = merge_plans(title, plans);
        self.draw_table(&merged.title, &merged.lines)
    }
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_ascii_lowercase();
    matches!(answer.as_str(), "y" | "s" | "ok")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::ScriptedTerminal;

    fn console(answers: &[&str]) -> Console<ScriptedTerminal> {
        Console::new(ScriptedTerminal::new(answers.iter().copied()), Pacing::default())
    }

    #[test]
    fn test_confirm_accepts_variants() {
        let mut c = console(&["Y", "ok", " s ", "OK", "yes", "n", ""]);
        let answers: Vec<bool> = (0..7).map(|_| c.confirm("Sure?").unwrap()).collect();
        assert_eq!(answers, vec![true, true, true, true, false, false, false]);
    }

    #[test]
    fn test_choose_revalidates() {
        let options = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        let mut c = console(&["4", "one", "2"]);
        assert_eq!(c.choose("Select your action", &options).unwrap(), "2");
        assert_eq!(c.terminal().count("Wrong option!"), 2);
        assert_eq!(c.terminal().remaining_answers(), 0);
    }

    #[test]
    fn test_log_paces_each_line() {
        let mut c = console(&[]);
        c.log("a").unwrap();
        c.log("b").unwrap();
        assert_eq!(c.terminal().paused, Duration::from_millis(240));
    }

    #[test]
    fn test_turn_rule() {
        let mut c = console(&[]);
        c.log_battle_turn(1).unwrap();
        c.log_battle_turn(10).unwrap();
        let t = &c.terminal().transcript;
        assert_eq!(t[0], format!("Turn 1 {}", "-".repeat(60)));
        assert_eq!(t[1], format!("Turn 10 {}", "-".repeat(59)));
    }

    #[test]
    fn test_garbled_answer_is_a_wrong_option() {
        let mut c = console(&["\u{FFFD}\u{FFFD}", "Pikachu"]);
        let options = vec!["Onyx".to_string(), "Pikachu".to_string()];
        assert_eq!(c.choose("Pick one", &options).unwrap(), "Pikachu");
        assert_eq!(c.terminal().count("Wrong option!"), 1);
    }
}
