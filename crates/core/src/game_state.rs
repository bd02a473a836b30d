//! Game state module - the fixed-tick driver
//!
//! Ties together board, piece controller, score ledger and RNG, and owns the
//! movement, gravity and difficulty countdowns. Input arrives as
//! [`InputEvent`]s through [`GameState::handle`]; time advances one fixed
//! tick per [`GameState::tick`] call.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::controller::{LockOutcome, Piece, PieceController, VerticalMove};
use crate::rng::{PieceRng, SimpleRng};
use crate::scoring::{level_for_difficulty, ScoreLedger};
use crate::snapshot::GameSnapshot;
use crate::types::{
    AudioCue, InputEvent, Score, BOARD_HEIGHT, DIFFICULTY_TICKS, GRAVITY_TICKS, MOVE_TICKS,
};

/// Cues are drained every frame; a single tick produces at most a few.
pub const CUE_CAPACITY: usize = 4;

/// Sideways auto-repeat and soft-drop countdowns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Movement {
    /// -1 left, +1 right, 0 idle
    x_velocity: i8,
    x_ticks: u32,
    /// Soft-drop countdown, 0 = not soft dropping
    y_ticks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gravity {
    /// Current gravity interval in ticks (lower is faster)
    difficulty: u32,
    drop_ticks: u32,
    difficulty_ticks: u32,
}

impl Default for Gravity {
    fn default() -> Self {
        Self {
            difficulty: GRAVITY_TICKS,
            drop_ticks: GRAVITY_TICKS,
            difficulty_ticks: DIFFICULTY_TICKS,
        }
    }
}

pub struct GameState<R: PieceRng = SimpleRng> {
    board: Board,
    pieces: PieceController,
    ledger: ScoreLedger,
    rng: R,
    movement: Movement,
    gravity: Gravity,
    /// Rows armed for clearing over the whole game
    lines: u32,
    game_over: bool,
    quit: bool,
    cues: ArrayVec<AudioCue, CUE_CAPACITY>,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: PieceRng> GameState<R> {
    /// Create a new game drawing pieces from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let pieces = PieceController::new(&mut rng);
        Self::from_parts(Board::new(), pieces, rng)
    }

    /// Create a game from an explicit board and piece pair
    pub fn from_parts(board: Board, pieces: PieceController, rng: R) -> Self {
        Self {
            board,
            pieces,
            ledger: ScoreLedger::new(),
            rng,
            movement: Movement::default(),
            gravity: Gravity::default(),
            lines: 0,
            game_over: false,
            quit: false,
            cues: ArrayVec::new(),
        }
    }

    pub fn score(&self) -> Score {
        self.ledger.score()
    }

    pub fn level(&self) -> u32 {
        level_for_difficulty(self.gravity.difficulty)
    }

    pub fn difficulty(&self) -> u32 {
        self.gravity.difficulty
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The player asked to leave the game
    pub fn quit(&self) -> bool {
        self.quit
    }

    /// Game over or quit: no more input or ticks are processed
    pub fn finished(&self) -> bool {
        self.game_over || self.quit
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.pieces.active()
    }

    pub fn next(&self) -> Piece {
        self.pieces.next()
    }

    /// React to one input event
    pub fn handle(&mut self, event: InputEvent) {
        if self.finished() {
            return;
        }

        match event {
            InputEvent::MoveLeftStart => self.start_horizontal(-1),
            InputEvent::MoveRightStart => self.start_horizontal(1),
            InputEvent::MoveLeftStop => self.stop_horizontal(-1),
            InputEvent::MoveRightStop => self.stop_horizontal(1),
            InputEvent::Rotate => {
                self.pieces.rotate(&self.board, 1);
            }
            InputEvent::RotateCcw => {
                self.pieces.rotate(&self.board, -1);
            }
            InputEvent::SoftDropStart => self.movement.y_ticks = MOVE_TICKS,
            InputEvent::SoftDropStop => self.movement.y_ticks = 0,
            InputEvent::HardDrop => {
                let outcome = self.pieces.hard_drop(&mut self.board, &mut self.rng);
                self.apply_lock(outcome, BOARD_HEIGHT as u32);
            }
            InputEvent::Quit => self.quit = true,
        }
    }

    /// Advance the game by one fixed tick.
    ///
    /// Order: sideways repeat, soft drop or gravity, difficulty, line-clear
    /// animation.
    pub fn tick(&mut self) {
        if self.finished() {
            return;
        }

        if self.movement.x_ticks > 0 {
            self.movement.x_ticks -= 1;
            if self.movement.x_ticks == 0 {
                self.pieces.move_horizontal(&self.board, self.movement.x_velocity);
                self.movement.x_ticks = MOVE_TICKS;
            }
        }

        // Soft drop only helps while it is faster than gravity.
        if self.movement.y_ticks > 0 && MOVE_TICKS < self.gravity.difficulty {
            self.movement.y_ticks -= 1;
            if self.movement.y_ticks == 0 {
                self.step_down();
                self.movement.y_ticks = MOVE_TICKS;
            }
        } else {
            self.gravity.drop_ticks = self.gravity.drop_ticks.saturating_sub(1);
            if self.gravity.drop_ticks == 0 {
                self.step_down();
                self.gravity.drop_ticks = self.gravity.difficulty;
            }
        }

        self.gravity.difficulty_ticks -= 1;
        if self.gravity.difficulty_ticks == 0 {
            if self.gravity.difficulty > 1 {
                self.gravity.difficulty -= 1;
            }
            self.gravity.difficulty_ticks = DIFFICULTY_TICKS;
        }

        self.board.advance_clear_animation();
    }

    /// Take the audio cues produced since the last call
    pub fn drain_cues(&mut self) -> ArrayVec<AudioCue, CUE_CAPACITY> {
        std::mem::take(&mut self.cues)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        for (y, flashing) in out.flashing.iter_mut().enumerate() {
            *flashing = self.board.is_flashing(y);
        }
        out.active = Some(self.pieces.active().into());
        out.next = Some(self.pieces.next().into());
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn start_horizontal(&mut self, direction: i8) {
        self.movement.x_velocity = direction;
        self.pieces.move_horizontal(&self.board, direction);
        self.movement.x_ticks = MOVE_TICKS;
    }

    fn stop_horizontal(&mut self, direction: i8) {
        if self.movement.x_velocity == direction {
            self.movement.x_velocity = 0;
            self.movement.x_ticks = 0;
        }
    }

    fn step_down(&mut self) {
        if let VerticalMove::Locked(outcome) =
            self.pieces
                .move_vertical(&mut self.board, &mut self.rng, 1)
        {
            self.apply_lock(outcome, BOARD_HEIGHT as u32);
        }
    }

    fn apply_lock(&mut self, outcome: LockOutcome, max_drop_distance: u32) {
        if outcome.lines > 0 {
            self.ledger.award(
                outcome.lines,
                self.level(),
                outcome.drop_distance,
                max_drop_distance,
            );
            self.lines += outcome.lines;
        }
        if let Some(cue) = outcome.cue {
            let pushed = self.cues.try_push(cue).is_ok();
            debug_assert!(pushed, "cue queue full");
        }
        if outcome.game_over {
            self.game_over = true;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
