pub mod console;
pub mod narrator;
pub mod table;
pub mod terminal;

pub use console::Console;
pub use table::DrawingPlan;
pub use terminal::{AutoPilot, Prompt, ScriptedTerminal, StdTerminal, Terminal};
