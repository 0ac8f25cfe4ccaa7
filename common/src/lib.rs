pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::rps::{Choice, Outcome, PlayerCommand, RoundResult, RpsSession, ScoreBoard, evaluate};
