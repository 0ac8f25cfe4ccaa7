mod round;
mod session;
mod types;

pub use round::evaluate;
pub use session::{RoundResult, RpsSession, ScoreBoard};
pub use types::{Choice, Outcome, PlayerCommand};
