use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    pub fn name(&self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    PlayerWin,
    OpponentWin,
}

/// What a line of player input means: a move, or a request to stop.
/// Parsing happens here so raw text never reaches the evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Play(Choice),
    Quit,
}

impl FromStr for PlayerCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(PlayerCommand::Play(Choice::Rock)),
            "paper" => Ok(PlayerCommand::Play(Choice::Paper)),
            "scissors" => Ok(PlayerCommand::Play(Choice::Scissors)),
            "quit" => Ok(PlayerCommand::Quit),
            other => Err(format!("Invalid choice: '{}'", other)),
        }
    }
}
