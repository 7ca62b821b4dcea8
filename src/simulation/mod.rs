pub mod roster;
pub mod session;

pub use roster::Roster;
pub use session::{PlayThroughReport, Session};
