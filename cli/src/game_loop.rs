use std::io::{BufRead, Write};

use common::games::SessionRng;
use common::games::rps::{Outcome, PlayerCommand, RpsSession};
use common::log;

/// Runs the interactive round loop until the player quits or input ends.
/// Invalid input re-prompts and does not count as a round. Returns the
/// finished session so the caller can log the tally.
pub fn run_game_loop<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    rng: &mut SessionRng,
    name: Option<String>,
    default_name: &str,
) -> std::io::Result<RpsSession> {
    let name = match name {
        Some(name) => name,
        None => prompt_name(input, output, default_name)?,
    };

    let mut session = RpsSession::new();

    loop {
        write!(output, "Enter Rock, Paper, or Scissors (or 'quit' to stop): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like quit
            break;
        }

        match line.parse::<PlayerCommand>() {
            Ok(PlayerCommand::Quit) => break,
            Ok(PlayerCommand::Play(choice)) => {
                let result = session.play_round(choice, rng);
                log!(
                    "Round {}: {} vs {} -> {:?}",
                    session.rounds_played(),
                    result.player,
                    result.opponent,
                    result.outcome
                );
                writeln!(output, "Computer chose: {}", result.opponent)?;

                match result.outcome {
                    Outcome::Tie => writeln!(output, "It's a Tie!")?,
                    Outcome::PlayerWin => writeln!(output, "{} Wins this round!", name)?,
                    Outcome::OpponentWin => writeln!(output, "Computer Wins this round!")?,
                }

                let scores = session.scores();
                writeln!(
                    output,
                    "Score -> {}: {} | Computer: {}\n",
                    name, scores.player, scores.opponent
                )?;
            }
            Err(_) => {
                writeln!(output, "Invalid choice! Please try again.")?;
            }
        }
    }

    let scores = session.scores();
    writeln!(output, "\nFinal Scores:")?;
    writeln!(output, "{}: {}", name, scores.player)?;
    writeln!(output, "Computer: {}", scores.opponent)?;
    writeln!(output, "Thanks for playing! Goodbye")?;

    Ok(session)
}

fn prompt_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_name: &str,
) -> std::io::Result<String> {
    write!(output, "Enter your name: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(default_name.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
