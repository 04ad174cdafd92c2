use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{board_view, input};
use crate::config::AppConfig;
use crate::error::SessionError;
use crate::game::{DeckConfig, GameOutcome, GameState, MoveError, Player, Rules, Scoreboard, TurnOutcome};
use crate::scores::{Leaderboard, ScoreStore};

/// Console presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Colorize the board. Only honored when stdout is a terminal.
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig { color: true }
    }
}

/// Outer loop of a console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    PlayingRound,
    AskReplay,
    Terminated,
}

/// Final totals of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub scores: Scoreboard,
    pub outcome: GameOutcome,
}

/// Console session: plays rounds on `input`/`output` until the players
/// decline a replay, recording both players' scores after every round.
pub struct App<R, W, S> {
    input: R,
    output: W,
    leaderboard: Leaderboard<S>,
    deck: DeckConfig,
    rules: Rules,
    color: bool,
    rng: StdRng,
    phase: SessionPhase,
    rounds: Vec<RoundReport>,
}

impl<R: BufRead, W: Write, S: ScoreStore> App<R, W, S> {
    pub fn new(config: &AppConfig, input: R, output: W, store: S, rng: StdRng) -> Self {
        App {
            input,
            output,
            leaderboard: Leaderboard::new(store, config.scores.capacity),
            deck: config.deck,
            rules: config.rules,
            color: config.console.color,
            rng,
            phase: SessionPhase::PlayingRound,
            rounds: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Reports for every round finished so far
    pub fn rounds(&self) -> &[RoundReport] {
        &self.rounds
    }

    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.leaderboard
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Main session loop
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.phase = match self.phase {
                SessionPhase::PlayingRound => {
                    let report = self.play_round()?;
                    self.rounds.push(report);
                    SessionPhase::AskReplay
                }
                SessionPhase::AskReplay => {
                    if self.ask_replay()? {
                        SessionPhase::PlayingRound
                    } else {
                        SessionPhase::Terminated
                    }
                }
                SessionPhase::Terminated => break,
            };
        }
        info!(rounds = self.rounds.len(), "session finished");
        Ok(())
    }

    /// Play one round on a freshly dealt deck and record both scores
    fn play_round(&mut self) -> Result<RoundReport, SessionError> {
        let mut game = GameState::deal(self.deck.rows, self.deck.cols, self.rules, &mut self.rng)?;

        while !game.is_terminal() {
            self.show(&game)?;
            self.prompt_pick(&mut game, "First")?;
            self.show(&game)?;
            self.prompt_pick(&mut game, "Second")?;
            self.show(&game)?;

            match game.evaluate() {
                Ok(TurnOutcome::Match { player, .. }) => {
                    writeln!(self.output, "Match! 1 point awarded to {}!", player.name())?;
                }
                Ok(TurnOutcome::Mismatch { player }) => {
                    writeln!(self.output, "Mismatch! No points awarded to {}.", player.name())?;
                }
                Err(e) => unreachable!("both cards were picked, evaluate failed: {e:?}"),
            }
        }

        let scores = game.scores();
        let outcome = scores.outcome();
        writeln!(self.output)?;
        writeln!(self.output, "{}", outcome_message(outcome, scores))?;
        info!(
            a = scores.get(Player::A),
            b = scores.get(Player::B),
            "round finished"
        );

        self.leaderboard.record(scores.get(Player::A))?;
        self.leaderboard.record(scores.get(Player::B))?;
        writeln!(self.output)?;

        Ok(RoundReport { scores, outcome })
    }

    /// Prompt the active player until they make an acceptable pick
    fn prompt_pick(&mut self, game: &mut GameState, ordinal: &str) -> Result<(), SessionError> {
        let player = game.current_player();
        loop {
            write!(self.output, "[{}] Select Your {} Card: ", player.name(), ordinal)?;
            self.output.flush()?;

            let line = self.read_line()?.ok_or(SessionError::InputClosed)?;
            let pos = match input::parse_pick(&line) {
                Ok(pos) => pos,
                Err(e) => {
                    debug!(input = line.trim_end(), error = %e, "unreadable pick");
                    writeln!(self.output, "{e}. Enter a row and a column, e.g. \"0 3\".")?;
                    continue;
                }
            };

            match game.pick(pos) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    debug!(%pos, error = ?e, "pick rejected");
                    writeln!(self.output, "{}", pick_error_message(&e, game))?;
                }
            }
        }
    }

    fn ask_replay(&mut self) -> Result<bool, SessionError> {
        write!(self.output, "Would you like to play again? (Y/N): ")?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            Some(answer) => !input::declines_replay(&answer),
            None => false,
        })
    }

    fn show(&mut self, game: &GameState) -> Result<(), SessionError> {
        let text = board_view::render(game.board(), &game.selected(), self.color);
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Read one line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn outcome_message(outcome: GameOutcome, scores: Scoreboard) -> String {
    match outcome {
        GameOutcome::Winner(player) => format!(
            "{} wins the game ({} to {}).",
            player.name(),
            scores.get(player),
            scores.get(player.other())
        ),
        GameOutcome::Draw => format!(
            "The game ended in a draw ({} to {}).",
            scores.get(Player::A),
            scores.get(Player::B)
        ),
    }
}

fn pick_error_message(err: &MoveError, game: &GameState) -> String {
    let board = game.board();
    match err {
        MoveError::OutOfBounds(pos) => format!(
            "{pos} is off the board. Rows run 0-{} and columns 0-{}.",
            board.rows().saturating_sub(1),
            board.cols().saturating_sub(1)
        ),
        MoveError::CardRemoved(pos) => format!("The card at {pos} has already been matched."),
        MoveError::AlreadySelected(pos) => format!("You already flipped the card at {pos}."),
        MoveError::NotPicking | MoveError::NotEvaluating => "Not your turn to pick.".to_string(),
        MoveError::GameOver => "Game is over!".to_string(),
    }
}
