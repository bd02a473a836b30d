//! Held-key tracking for terminal environments.
//!
//! The game wants explicit start/stop events for sideways movement and soft
//! drop; the auto-repeat itself is timed by the engine in ticks. Terminals
//! that report key releases map directly onto that. Terminals that do not are
//! handled with a timeout: a held key that has not been seen for a while is
//! treated as released.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::types::InputEvent;

/// Keys that produce start/stop pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldKey {
    Left,
    Right,
    Down,
}

impl HeldKey {
    pub fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(HeldKey::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(HeldKey::Right),
            KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(HeldKey::Down),
            _ => None,
        }
    }

    fn start_event(self) -> InputEvent {
        match self {
            HeldKey::Left => InputEvent::MoveLeftStart,
            HeldKey::Right => InputEvent::MoveRightStart,
            HeldKey::Down => InputEvent::SoftDropStart,
        }
    }

    fn stop_event(self) -> InputEvent {
        match self {
            HeldKey::Left => InputEvent::MoveLeftStop,
            HeldKey::Right => InputEvent::MoveRightStop,
            HeldKey::Down => InputEvent::SoftDropStop,
        }
    }
}

/// Horizontal direction currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Right,
    None,
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which movement keys are held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: Horizontal,
    horizontal_seen: Instant,
    down_held: bool,
    down_seen: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            horizontal: Horizontal::None,
            horizontal_seen: now,
            down_held: false,
            down_seen: now,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// A press (or terminal auto-repeat) of `code`.
    ///
    /// Returns the start event the first time a key goes down; repeats of a
    /// key already held only refresh its release timeout.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<InputEvent> {
        let key = HeldKey::from_code(code)?;
        let now = Instant::now();
        match key {
            HeldKey::Left | HeldKey::Right => {
                self.horizontal_seen = now;
                let dir = if key == HeldKey::Left {
                    Horizontal::Left
                } else {
                    Horizontal::Right
                };
                if self.horizontal == dir {
                    None
                } else {
                    // Switching direction needs no stop: the engine's start
                    // overrides the previous velocity.
                    self.horizontal = dir;
                    Some(key.start_event())
                }
            }
            HeldKey::Down => {
                self.down_seen = now;
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    Some(key.start_event())
                }
            }
        }
    }

    /// A release of `code`. Returns the stop event if the key was held.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<InputEvent> {
        let key = HeldKey::from_code(code)?;
        match (key, self.horizontal) {
            (HeldKey::Left, Horizontal::Left) | (HeldKey::Right, Horizontal::Right) => {
                self.horizontal = Horizontal::None;
                Some(key.stop_event())
            }
            (HeldKey::Down, _) if self.down_held => {
                self.down_held = false;
                Some(key.stop_event())
            }
            _ => None,
        }
    }

    /// Release keys whose timeout has expired. Call once per frame.
    pub fn update(&mut self) -> ArrayVec<InputEvent, 2> {
        self.update_at(Instant::now())
    }

    fn update_at(&mut self, now: Instant) -> ArrayVec<InputEvent, 2> {
        let mut events = ArrayVec::new();
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);

        if now.saturating_duration_since(self.horizontal_seen) > timeout {
            let held = match self.horizontal {
                Horizontal::Left => Some(HeldKey::Left),
                Horizontal::Right => Some(HeldKey::Right),
                Horizontal::None => None,
            };
            if let Some(key) = held {
                self.horizontal = Horizontal::None;
                events.push(key.stop_event());
            }
        }

        if self.down_held && now.saturating_duration_since(self.down_seen) > timeout {
            self.down_held = false;
            events.push(HeldKey::Down.stop_event());
        }

        events
    }

    /// Forget all held keys without emitting stop events
    pub fn reset(&mut self) {
        *self = Self::new().with_key_release_timeout_ms(self.key_release_timeout_ms);
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
