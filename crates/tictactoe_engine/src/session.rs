//! A game session: one board plus the configuration that drives it.
//!
//! The session replaces ambient settings with an explicit
//! [`SessionConfig`]. In [`GameMode::PlayerVsComputer`] every human move is
//! answered immediately by the computer.

use crate::board::{Board, MoveError};
use crate::search::{Difficulty, choose_move_with_rng};
use crate::types::Player;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who is playing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum GameMode {
    /// Two people share the board.
    #[serde(rename = "pvp")]
    #[display("player vs player")]
    PlayerVsPlayer,
    /// One person plays against the computer.
    #[default]
    #[serde(rename = "pvc")]
    #[display("player vs computer")]
    PlayerVsComputer,
}

impl GameMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsComputer,
            GameMode::PlayerVsComputer => GameMode::PlayerVsPlayer,
        }
    }
}

/// Settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct SessionConfig {
    /// Who is playing.
    pub mode: GameMode,
    /// Computer strength in [`GameMode::PlayerVsComputer`].
    pub difficulty: Difficulty,
    /// Who moves first. Against the computer this is the human's mark.
    pub first: Player,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default(), Player::X)
    }
}

/// Where the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The game continues with this player to move.
    Turn(Player),
    /// This player completed a line.
    Won(Player),
    /// The board filled without a line.
    Draw,
}

/// A board under a session configuration.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    config: SessionConfig,
    rng: StdRng,
}

impl Session {
    /// Starts a session with a fresh board.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Starts a session whose computer moves are reproducible.
    #[instrument]
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SessionConfig, rng: StdRng) -> Self {
        info!(
            mode = %config.mode,
            difficulty = %config.difficulty,
            first = %config.first,
            "Session started"
        );
        Self {
            board: Board::new(config.first),
            config,
            rng,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Plays the current player at `index`.
    ///
    /// Against the computer, the computer answers at once if the game is
    /// still running, and the index it played is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the session untouched if the move
    /// is illegal.
    #[instrument(skip(self), fields(mode = %self.config.mode))]
    pub fn play(&mut self, index: usize) -> Result<Option<usize>, MoveError> {
        self.board.try_play(index)?;

        if self.config.mode != GameMode::PlayerVsComputer {
            return Ok(None);
        }

        let reply = choose_move_with_rng(&self.board, self.config.difficulty, &mut self.rng);
        if let Some(reply) = reply {
            debug!(reply, "Computer replies");
            self.board.play(reply);
        }
        Ok(reply)
    }

    /// Replaces the board with a fresh one, optionally switching modes first.
    ///
    /// Between two people the next game starts with whoever is current on
    /// the old board. Against the computer the human always starts.
    #[instrument(skip(self))]
    pub fn reset(&mut self, switch_mode: bool) {
        if switch_mode {
            self.config.mode = self.config.mode.toggled();
        }
        let starting = match self.config.mode {
            GameMode::PlayerVsPlayer => self.board.current_player(),
            GameMode::PlayerVsComputer => self.config.first,
        };
        info!(mode = %self.config.mode, %starting, "New game");
        self.board = Board::new(starting);
    }

    /// Where the current game stands.
    pub fn status(&self) -> Status {
        match (self.board.winner(), self.board.has_ended()) {
            (Some(player), _) => Status::Won(player),
            (None, true) => Status::Draw,
            (None, false) => Status::Turn(self.board.current_player()),
        }
    }

    /// A one-line headline for the current game.
    ///
    /// Against the computer, results are told from the human's side.
    pub fn title(&self) -> String {
        match (self.status(), self.config.mode) {
            (Status::Turn(player), _) => format!("Player {}", player),
            (Status::Won(player), GameMode::PlayerVsPlayer) => format!("Player {} won!", player),
            (Status::Won(player), GameMode::PlayerVsComputer) if player == self.config.first => {
                "You won!".to_string()
            }
            (Status::Won(_), GameMode::PlayerVsComputer) => "You lost!".to_string(),
            (Status::Draw, _) => "Draw!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> SessionConfig {
        SessionConfig::new(GameMode::PlayerVsPlayer, Difficulty::Hard, Player::X)
    }

    #[test]
    fn test_pvp_play_has_no_reply() {
        let mut session = Session::with_seed(pvp(), 1);
        assert_eq!(session.play(4), Ok(None));
        assert_eq!(session.board().current_player(), Player::O);
        assert_eq!(session.title(), "Player O");
    }

    #[test]
    fn test_pvc_play_gets_reply() {
        let mut session = Session::with_seed(SessionConfig::default(), 1);
        let reply = session.play(4).unwrap().expect("computer should answer");
        assert_ne!(reply, 4);
        assert_eq!(session.board().turns_played(), 2);
        assert_eq!(session.board().cell(reply).occupant(), Some(Player::O));
        assert_eq!(session.status(), Status::Turn(Player::X));
    }

    #[test]
    fn test_illegal_move_leaves_session_untouched() {
        let mut session = Session::with_seed(SessionConfig::default(), 1);
        session.play(4).unwrap();
        let before = session.board().clone();
        assert_eq!(session.play(4), Err(MoveError::CellOccupied(4)));
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_pvp_reset_keeps_current_player() {
        let mut session = Session::with_seed(pvp(), 1);
        session.play(0).unwrap();
        session.reset(false);
        assert_eq!(session.board().turns_played(), 0);
        assert_eq!(session.board().current_player(), Player::O);
    }

    #[test]
    fn test_switching_to_pvc_lets_human_start() {
        let mut session = Session::with_seed(pvp(), 1);
        session.play(0).unwrap();
        session.reset(true);
        assert_eq!(session.config().mode, GameMode::PlayerVsComputer);
        assert_eq!(session.board().current_player(), Player::X);
    }

    #[test]
    fn test_titles_after_pvp_win() {
        let mut session = Session::with_seed(pvp(), 1);
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        assert_eq!(session.status(), Status::Won(Player::X));
        assert_eq!(session.title(), "Player X won!");
    }

    #[test]
    fn test_mode_toggles_and_displays() {
        assert_eq!(GameMode::PlayerVsPlayer.toggled(), GameMode::PlayerVsComputer);
        assert_eq!(GameMode::PlayerVsComputer.to_string(), "player vs computer");
    }
}
