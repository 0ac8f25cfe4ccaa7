use super::round::evaluate;
use super::types::{Choice, Outcome};
use crate::games::SessionRng;

/// Cumulative win counters for one session. Counters only ever grow;
/// a new session starts from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub player: u32,
    pub opponent: u32,
    pub ties: u32,
}

impl ScoreBoard {
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player += 1,
            Outcome::OpponentWin => self.opponent += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub player: Choice,
    pub opponent: Choice,
    pub outcome: Outcome,
}

/// One continuous run of the game. Owns the scoreboard; the only stateful
/// part of the core. Invalid input never reaches this type, so every call
/// to `play_round` counts as a round.
#[derive(Debug, Default)]
pub struct RpsSession {
    scores: ScoreBoard,
    rounds_played: u32,
}

impl RpsSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Uniform draw from the three-element choice set, independent across rounds.
    pub fn draw_opponent(rng: &mut SessionRng) -> Choice {
        Choice::ALL[rng.random_range(0..Choice::ALL.len())]
    }

    pub fn play_round(&mut self, player: Choice, rng: &mut SessionRng) -> RoundResult {
        let opponent = Self::draw_opponent(rng);
        self.play_round_against(player, opponent)
    }

    pub fn play_round_against(&mut self, player: Choice, opponent: Choice) -> RoundResult {
        let outcome = evaluate(player, opponent);
        self.scores.apply(outcome);
        self.rounds_played += 1;

        RoundResult {
            player,
            opponent,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_sequence() {
        let mut session = RpsSession::new();
        session.play_round_against(Choice::Rock, Choice::Scissors);
        session.play_round_against(Choice::Paper, Choice::Paper);
        session.play_round_against(Choice::Scissors, Choice::Paper);

        let scores = session.scores();
        assert_eq!(scores.player, 2);
        assert_eq!(scores.opponent, 0);
        assert_eq!(scores.ties, 1);
        assert_eq!(session.rounds_played(), 3);
    }

    #[test]
    fn test_tie_leaves_win_counters_untouched() {
        let mut session = RpsSession::new();
        for choice in Choice::ALL {
            session.play_round_against(choice, choice);
        }

        let scores = session.scores();
        assert_eq!(scores.player, 0);
        assert_eq!(scores.opponent, 0);
        assert_eq!(scores.ties, 3);
    }

    #[test]
    fn test_score_invariant_over_random_rounds() {
        let mut rng = SessionRng::new(42);
        let mut session = RpsSession::new();

        for i in 0..100 {
            let player = Choice::ALL[i % 3];
            session.play_round(player, &mut rng);
        }

        let scores = session.scores();
        assert_eq!(scores.player + scores.opponent + scores.ties, 100);
        assert!(scores.player + scores.opponent <= session.rounds_played());
    }

    #[test]
    fn test_draw_opponent_stays_in_choice_set() {
        let mut rng = SessionRng::new(7);
        for _ in 0..50 {
            let drawn = RpsSession::draw_opponent(&mut rng);
            assert!(Choice::ALL.contains(&drawn));
        }
    }

    #[test]
    fn test_round_result_reports_both_choices() {
        let mut session = RpsSession::new();
        let result = session.play_round_against(Choice::Rock, Choice::Paper);

        assert_eq!(result.player, Choice::Rock);
        assert_eq!(result.opponent, Choice::Paper);
        assert_eq!(result.outcome, Outcome::OpponentWin);
        assert_eq!(session.scores().opponent, 1);
    }
}
