use super::types::{Choice, Outcome};

impl Choice {
    /// Cyclic dominance: rock beats scissors, scissors beats paper, paper beats rock.
    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }
}

/// Compares two choices from the player's perspective. Pure and total:
/// score mutation is the caller's job, triggered by the returned outcome.
pub fn evaluate(player: Choice, opponent: Choice) -> Outcome {
    if player == opponent {
        Outcome::Tie
    } else if player.beats(opponent) {
        Outcome::PlayerWin
    } else {
        Outcome::OpponentWin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rock_beats_scissors() {
        assert_eq!(evaluate(Choice::Rock, Choice::Scissors), Outcome::PlayerWin);
    }

    #[test]
    fn test_paper_ties_paper() {
        assert_eq!(evaluate(Choice::Paper, Choice::Paper), Outcome::Tie);
    }

    #[test]
    fn test_scissors_loses_to_rock() {
        assert_eq!(evaluate(Choice::Scissors, Choice::Rock), Outcome::OpponentWin);
    }

    #[test]
    fn test_equal_choices_always_tie() {
        for choice in Choice::ALL {
            assert_eq!(evaluate(choice, choice), Outcome::Tie);
        }
    }

    #[test]
    fn test_antisymmetry() {
        for player in Choice::ALL {
            for opponent in Choice::ALL {
                if player == opponent {
                    continue;
                }
                let forward = evaluate(player, opponent);
                let reverse = evaluate(opponent, player);
                assert_eq!(forward == Outcome::PlayerWin, reverse == Outcome::OpponentWin);
                assert_eq!(forward == Outcome::OpponentWin, reverse == Outcome::PlayerWin);
            }
        }
    }

    #[test]
    fn test_outcome_distribution_over_all_pairs() {
        let mut ties = 0;
        let mut player_wins = 0;
        let mut opponent_wins = 0;

        for player in Choice::ALL {
            for opponent in Choice::ALL {
                match evaluate(player, opponent) {
                    Outcome::Tie => ties += 1,
                    Outcome::PlayerWin => player_wins += 1,
                    Outcome::OpponentWin => opponent_wins += 1,
                }
            }
        }

        assert_eq!(ties, 3);
        assert_eq!(player_wins, 3);
        assert_eq!(opponent_wins, 3);
    }
}
