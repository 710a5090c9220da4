//! Computer-versus-computer matches.

use rand::Rng;
use serde::Serialize;
use tictactoe_engine::{Board, Difficulty, Outcome, Player, choose_move_with_rng};
use tracing::{debug, instrument};

/// Results of a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays one game to the end.
pub fn play_game<R: Rng + ?Sized>(
    starting: Player,
    x: Difficulty,
    o: Difficulty,
    rng: &mut R,
) -> Outcome {
    let mut board = Board::new(starting);
    loop {
        let difficulty = match board.current_player() {
            Player::X => x,
            Player::O => o,
        };
        let Some(index) = choose_move_with_rng(&board, difficulty, rng) else {
            break;
        };
        board.play(index);
    }

    // A board without a move has ended, so it has an outcome.
    board.outcome().unwrap_or(Outcome::Draw)
}

/// Plays `games` games, alternating who starts, beginning with X.
#[instrument(skip(rng))]
pub fn run<R: Rng + ?Sized>(x: Difficulty, o: Difficulty, games: u32, rng: &mut R) -> Tally {
    let mut tally = Tally::default();
    for game in 0..games {
        let starting = if game % 2 == 0 { Player::X } else { Player::O };
        let outcome = play_game(starting, x, o, rng);
        debug!(game, %starting, %outcome, "Game finished");
        tally.record(outcome);
    }
    tally
}
