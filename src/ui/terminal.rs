//! Terminals: where narration goes and where answers come from
//!
//! The game only ever needs three kinds of question (free text, yes/no,
//! pick one of a list), so a terminal receives the question already
//! classified and can render or answer it however it likes.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::core::error::{GameError, Result};
use crate::core::GameRng;

/// A question put to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<'a> {
    /// Free text
    Text(&'a str),
    /// Yes or no
    Confirm(&'a str),
    /// One of a fixed list of options
    Choice(&'a [String]),
}

impl Prompt<'_> {
    /// Text shown before the cursor
    pub fn render(&self) -> String {
        match self {
            Prompt::Text(question) => format!("{} ", question),
            Prompt::Confirm(question) => format!("{} [y/s/ok] ", question),
            Prompt::Choice(options) => format!("{}: ", options.join(", ")),
        }
    }
}

pub trait Terminal {
    /// Emit one line of narration
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Ask a question and block until an answer line arrives
    fn ask(&mut self, prompt: Prompt<'_>) -> Result<String>;

    /// Hold the flow for a fixed delay
    fn pause(&mut self, duration: Duration);
}

/// Read one answer line, trimmed
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
/// line reaches the prompt logic as a wrong answer. End of input is `InputClosed`.
pub fn read_answer(input: &mut impl BufRead) -> Result<String> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Err(GameError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&buf).trim().to_string())
}

/// Process stdout/stdin
#[derive(Debug, Default)]
pub struct StdTerminal;

impl StdTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl Terminal for StdTerminal {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, prompt: Prompt<'_>) -> Result<String> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{}", prompt.render())?;
            out.flush()?;
        }

        read_answer(&mut io::stdin().lock())
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Canned answers in, transcript out
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    /// Every line written plus every rendered prompt, in order
    pub transcript: Vec<String>,
    /// Sum of all requested pauses
    pub paused: Duration,
}

impl ScriptedTerminal {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            paused: Duration::ZERO,
        }
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    /// True if any transcript line contains `needle`
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Number of transcript lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.transcript.iter().filter(|line| line.contains(needle)).count()
    }
}

impl Terminal for ScriptedTerminal {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: Prompt<'_>) -> Result<String> {
        self.transcript.push(prompt.render());
        let answer = self.answers.pop_front().ok_or(GameError::InputClosed)?;
        Ok(answer.trim().to_string())
    }

    fn pause(&mut self, duration: Duration) {
        self.paused += duration;
    }
}

/// Plays the game by itself: random picks, always says yes
#[derive(Debug)]
pub struct AutoPilot {
    rng: GameRng,
    /// Lines written so far
    pub lines: usize,
}

impl AutoPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            lines: 0,
        }
    }
}

impl Terminal for AutoPilot {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines += 1;
        tracing::trace!(target: "pocket_trainer::transcript", "{}", line);
        Ok(())
    }

    fn ask(&mut self, prompt: Prompt<'_>) -> Result<String> {
        let answer = match prompt {
            Prompt::Text(_) => String::new(),
            Prompt::Confirm(_) => "y".to_string(),
            Prompt::Choice(options) => self
                .rng
                .choose(options)
                .cloned()
                .ok_or(GameError::InputClosed)?,
        };
        tracing::trace!(target: "pocket_trainer::transcript", "{}{}", prompt.render(), answer);
        Ok(answer)
    }

    fn pause(&mut self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_rendering() {
        let options = vec!["1".to_string(), "2".to_string()];
        assert_eq!(Prompt::Text("Name?").render(), "Name? ");
        assert_eq!(Prompt::Confirm("Sure?").render(), "Sure? [y/s/ok] ");
        assert_eq!(Prompt::Choice(&options).render(), "1, 2: ");
    }

    #[test]
    fn test_scripted_runs_dry() {
        let mut term = ScriptedTerminal::new(["  yes  "]);
        assert_eq!(term.ask(Prompt::Text("?")).unwrap(), "yes");
        assert!(matches!(term.ask(Prompt::Text("?")), Err(GameError::InputClosed)));
        assert_eq!(term.transcript, vec!["? ", "? "]);
    }

    #[test]
    fn test_autopilot_picks_listed_option() {
        let options = vec!["Onyx".to_string(), "Pikachu".to_string()];
        let mut pilot = AutoPilot::new(4);
        for _ in 0..20 {
            let answer = pilot.ask(Prompt::Choice(&options)).unwrap();
            assert!(options.contains(&answer));
        }
        assert_eq!(pilot.ask(Prompt::Confirm("Sure?")).unwrap(), "y");
    }

    #[test]
    fn test_invalid_utf8_answer_is_replaced() {
        let mut input = io::Cursor::new(b"\xff\xfe\nPikachu\r\n".to_vec());
        let garbled = read_answer(&mut input).unwrap();
        assert_eq!(garbled, "\u{FFFD}\u{FFFD}");
        assert_eq!(read_answer(&mut input).unwrap(), "Pikachu");
        assert!(matches!(read_answer(&mut input), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_empty_input_is_closed() {
        let mut input = io::Cursor::new(Vec::new());
        assert!(matches!(read_answer(&mut input), Err(GameError::InputClosed)));

        // A bare newline is an answer, not the end of input
        let mut input = io::Cursor::new(b"\n".to_vec());
        assert_eq!(read_answer(&mut input).unwrap(), "");
    }
}
