//! Interactive game loop over any line-based input and output.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameMode, MoveError, Position, Session};
use tracing::{debug, instrument, warn};

const HELP: &str = "Enter a cell number 1-9 or a name like \"center\".\n\
Commands: new (restart), mode (switch between vs-computer and two players), help, quit";

/// What the player typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Move(Position),
    NewGame,
    SwitchMode,
    Help,
    Quit,
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "new" | "n" => Some(Input::NewGame),
            "mode" | "m" => Some(Input::SwitchMode),
            "help" | "h" | "?" => Some(Input::Help),
            "quit" | "q" | "exit" => Some(Input::Quit),
            other => Position::parse(other).map(Input::Move),
        }
    }
}

/// Runs the game loop until `quit` or end of input.
#[instrument(skip_all, fields(mode = %session.config().mode))]
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    writeln!(output, "{HELP}")?;
    show(session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(action) = Input::parse(&line) else {
            writeln!(output, "Unrecognized input {:?}. Type help for options.", line.trim())?;
            continue;
        };
        debug!(?action, "Input");

        match action {
            Input::Quit => break,
            Input::Help => writeln!(output, "{HELP}")?,
            Input::NewGame => {
                session.reset(false);
                show(session, &mut output)?;
            }
            Input::SwitchMode => {
                session.reset(true);
                writeln!(output, "Now playing {}.", session.config().mode)?;
                show(session, &mut output)?;
            }
            Input::Move(position) => match session.play(position.index()) {
                Ok(reply) => {
                    if let Some(reply) = reply.and_then(Position::from_index) {
                        writeln!(output, "Computer plays {}.", reply)?;
                    }
                    show(session, &mut output)?;
                    if session.board().has_ended() {
                        writeln!(output, "Type new for another game or quit to leave.")?;
                    }
                }
                Err(err) => {
                    warn!(%err, "Rejected move");
                    match err {
                        MoveError::CellOccupied(_) => {
                            writeln!(output, "{} is already taken.", position)?
                        }
                        MoveError::GameOver => {
                            writeln!(output, "The game is over. Type new to play again.")?
                        }
                        MoveError::OutOfBounds(_) => writeln!(output, "{}.", err)?,
                    }
                }
            },
        }
    }

    output.flush()?;
    Ok(())
}

fn show<W: Write>(session: &Session, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", session.board())?;
    let title = session.title();
    match session.config().mode {
        GameMode::PlayerVsComputer if !session.board().has_ended() => {
            writeln!(output, "{} ({} computer)", title, session.config().difficulty)?
        }
        _ => writeln!(output, "{}", title)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_engine::{Difficulty, Player, SessionConfig, Status};

    fn play_script(config: SessionConfig, script: &str) -> (Session, String) {
        let mut session = Session::with_seed(config, 12);
        let mut output = Vec::new();
        run(&mut session, Cursor::new(script), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_input_parsing() {
        assert_eq!(Input::parse(" 5 "), Some(Input::Move(Position::Center)));
        assert_eq!(Input::parse("top left"), Some(Input::Move(Position::TopLeft)));
        assert_eq!(Input::parse("NEW"), Some(Input::NewGame));
        assert_eq!(Input::parse("q"), Some(Input::Quit));
        assert_eq!(Input::parse("11"), None);
    }

    #[test]
    fn test_two_player_win() {
        let config = SessionConfig::new(GameMode::PlayerVsPlayer, Difficulty::Hard, Player::X);
        let (session, output) = play_script(config, "1\n4\n2\n5\n3\n");
        assert_eq!(session.status(), Status::Won(Player::X));
        assert!(output.contains("Player X won!"));
    }

    #[test]
    fn test_rejected_moves_are_reported() {
        let config = SessionConfig::new(GameMode::PlayerVsPlayer, Difficulty::Hard, Player::X);
        let (session, output) = play_script(config, "5\n5\nbogus\n");
        assert_eq!(session.board().turns_played(), 1);
        assert!(output.contains("Center is already taken."));
        assert!(output.contains("Unrecognized input \"bogus\""));
    }

    #[test]
    fn test_computer_replies_and_quit_stops_reading() {
        let (session, output) = play_script(SessionConfig::default(), "center\nquit\n1\n");
        assert_eq!(session.board().turns_played(), 2);
        assert!(output.contains("Computer plays"));
    }

    #[test]
    fn test_mode_switch_starts_fresh_board() {
        let (session, output) = play_script(SessionConfig::default(), "5\nmode\n");
        assert_eq!(session.config().mode, GameMode::PlayerVsPlayer);
        assert_eq!(session.board().turns_played(), 0);
        assert!(output.contains("Now playing player vs player."));
    }
}
