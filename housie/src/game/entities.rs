use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

use super::constants::{POOL_MAX, POOL_MIN};

/// The undrawn numbers of a single game.
///
/// A draw picks a uniform random index and `swap_remove`s it, so a drawn
/// number can never come back before the next reset. The pool and the called
/// set always partition 1..=90 between them.
#[derive(Clone, Debug)]
pub struct NumberPool {
    remaining: Vec<u8>,
}

impl NumberPool {
    /// Remove and return one number, every remaining number equally likely.
    /// Returns `None` once the pool is exhausted.
    pub fn draw(&mut self) -> Option<u8> {
        if self.remaining.is_empty() {
            return None;
        }
        let idx = rand::rng().random_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(idx))
    }

    /// Refill the pool to the full 1..=90 sequence.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.remaining.contains(&number)
    }
}

impl Default for NumberPool {
    fn default() -> Self {
        Self {
            remaining: (POOL_MIN..=POOL_MAX).collect(),
        }
    }
}

/// Lifecycle status of the caller.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameStatus {
    /// Never started, or just restarted.
    Idle,
    /// The call cycle is active.
    Running,
    /// User-suspended; pool and called set retained.
    Paused,
    /// Pool exhausted; only a restart revives the game.
    Over,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Over => "over",
        };
        write!(f, "{repr}")
    }
}

/// Render-ready snapshot of the caller state.
///
/// The full board sequence is the constant range
/// [`POOL_MIN`]..=[`POOL_MAX`]; renderers lay it out from
/// [`super::constants::BOARD_COLUMNS`] and highlight membership in `called`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CallerView {
    /// Numbers drawn so far.
    pub called: HashSet<u8>,
    /// The same numbers in call order, oldest first.
    pub history: Vec<u8>,
    /// Most recently drawn number, if any.
    pub current: Option<u8>,
    pub status: GameStatus,
    /// Human-readable status line, also what gets spoken.
    pub announcement: String,
    pub called_count: usize,
    pub remaining_count: usize,
}
