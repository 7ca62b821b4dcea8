pub mod action;
pub mod element;
pub mod outcome;
pub mod turn_order;

pub use action::BattleAction;
pub use element::Element;
pub use outcome::{BattleActionResult, Exchange};
pub use turn_order::{Side, TurnOrder};
