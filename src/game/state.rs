use rand::Rng;

use super::board::{Board, Position, EMPTY};
use super::deck;
use super::Player;
use crate::error::DeckError;

/// Rule switches for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Accept picks on already-removed cells. Such a pick can never match,
    /// so the turn is wasted. When false the pick is rejected instead.
    pub allow_cleared_picks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstPick,
    AwaitingSecondPick { first: Position },
    Evaluating { first: Position, second: Position },
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Result of evaluating one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Match { player: Player, value: u32 },
    Mismatch { player: Player },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds(Position),
    CardRemoved(Position),
    AlreadySelected(Position),
    NotPicking,
    NotEvaluating,
    GameOver,
}

/// Running point totals for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    a: u32,
    b: u32,
}

impl Scoreboard {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    fn award(&mut self, player: Player) {
        match player {
            Player::A => self.a += 1,
            Player::B => self.b += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.a + self.b
    }

    /// Strictly greater total wins; equal totals draw
    pub fn outcome(&self) -> GameOutcome {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::A),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::B),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }
}

/// One round of the memory game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    phase: Phase,
    scores: Scoreboard,
    rules: Rules,
}

impl GameState {
    /// Start a round on the given board. Player A opens.
    pub fn new(board: Board, rules: Rules) -> Self {
        let phase = if board.is_cleared() {
            Phase::GameOver
        } else {
            Phase::AwaitingFirstPick
        };
        GameState {
            board,
            current_player: Player::A,
            phase,
            scores: Scoreboard::default(),
            rules,
        }
    }

    /// Start a round on a freshly dealt deck
    pub fn deal<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rules: Rules,
        rng: &mut R,
    ) -> Result<Self, DeckError> {
        Ok(Self::new(deck::deal(rows, cols, rng)?, rules))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Final result, once every card is gone
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.is_terminal().then(|| self.scores.outcome())
    }

    /// Positions picked so far this turn, for revealing
    pub fn selected(&self) -> Vec<Position> {
        match self.phase {
            Phase::AwaitingSecondPick { first } => vec![first],
            Phase::Evaluating { first, second } => vec![first, second],
            Phase::AwaitingFirstPick | Phase::GameOver => Vec::new(),
        }
    }

    /// Check a pick without applying it
    pub fn check_pick(&self, pos: Position) -> Result<(), MoveError> {
        let first = match self.phase {
            Phase::GameOver => return Err(MoveError::GameOver),
            Phase::Evaluating { .. } => return Err(MoveError::NotPicking),
            Phase::AwaitingFirstPick => None,
            Phase::AwaitingSecondPick { first } => Some(first),
        };

        let value = self.board.get(pos).ok_or(MoveError::OutOfBounds(pos))?;
        if value == EMPTY && !self.rules.allow_cleared_picks {
            return Err(MoveError::CardRemoved(pos));
        }
        if first == Some(pos) {
            return Err(MoveError::AlreadySelected(pos));
        }
        Ok(())
    }

    /// Flip a card for the active player. A rejected pick leaves the state untouched.
    pub fn pick(&mut self, pos: Position) -> Result<(), MoveError> {
        self.check_pick(pos)?;
        self.phase = match self.phase {
            Phase::AwaitingFirstPick => Phase::AwaitingSecondPick { first: pos },
            Phase::AwaitingSecondPick { first } => Phase::Evaluating { first, second: pos },
            Phase::Evaluating { .. } | Phase::GameOver => unreachable!("check_pick rejects these"),
        };
        Ok(())
    }

    /// Compare the two flipped cards, remove them and award a point on a match,
    /// then pass the turn.
    pub fn evaluate(&mut self) -> Result<TurnOutcome, MoveError> {
        let (first, second) = match self.phase {
            Phase::Evaluating { first, second } => (first, second),
            Phase::GameOver => return Err(MoveError::GameOver),
            _ => return Err(MoveError::NotEvaluating),
        };

        let player = self.current_player;
        let a = self.board.get(first).unwrap_or(EMPTY);
        let b = self.board.get(second).unwrap_or(EMPTY);

        let outcome = if a == b && a != EMPTY {
            self.board.clear(first);
            self.board.clear(second);
            self.scores.award(player);
            TurnOutcome::Match { player, value: a }
        } else {
            TurnOutcome::Mismatch { player }
        };

        self.current_player = player.other();
        self.phase = if self.board.is_cleared() {
            Phase::GameOver
        } else {
            Phase::AwaitingFirstPick
        };

        tracing::debug!(
            player = player.name(),
            matched = matches!(outcome, TurnOutcome::Match { .. }),
            remaining = self.board.remaining(),
            "turn evaluated"
        );
        Ok(outcome)
    }

    /// Pick two cards and evaluate them in one step
    pub fn play_turn(&mut self, first: Position, second: Position) -> Result<TurnOutcome, MoveError> {
        let before = self.clone();
        if let Err(e) = self.pick(first).and_then(|()| self.pick(second)) {
            *self = before;
            return Err(e);
        }
        self.evaluate()
    }
}
