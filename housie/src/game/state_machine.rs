//! Caller state machine.
//!
//! [`GameCaller`] owns every piece of mutable game state: the undrawn pool,
//! the called set, the current number, the lifecycle status, and the pending
//! scheduled step of the call cycle. Nothing outside this struct mutates any
//! of it.

use std::{collections::HashSet, fmt, time::Instant};

use log::{debug, info};

use super::constants::{GAME_OVER_MESSAGE, POOL_SIZE, READY_MESSAGE};
use super::entities::{CallerView, GameStatus, NumberPool};
use crate::announce::{Announcer, NullAnnouncer};
use crate::caller::CallerConfig;

/// Which half of the call cadence fires at the pending deadline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CyclePhase {
    /// Draw and announce the next number.
    Call,
    /// Announce the current number a second time.
    Repeat,
}

/// One scheduled step of the call cycle.
///
/// Pause and restart clear this unconditionally; a cleared deadline can never
/// fire, so no stale step can resurrect a superseded cycle.
#[derive(Clone, Copy, Debug)]
struct PendingCall {
    phase: CyclePhase,
    due: Instant,
}

/// The game controller.
///
/// Each called number runs a fixed two-phase cadence: announce, hold one call
/// delay, announce again, hold a second equal delay, then draw the next
/// number. [`GameCaller::tick`] advances the cycle whenever the pending
/// deadline has passed.
pub struct GameCaller {
    pool: NumberPool,
    called: HashSet<u8>,
    /// Call order, oldest first. Cleared together with `called` on restart.
    history: Vec<u8>,
    current: Option<u8>,
    status: GameStatus,
    announcement: String,
    pending: Option<PendingCall>,
    config: CallerConfig,
    announcer: Box<dyn Announcer>,
}

impl GameCaller {
    #[must_use]
    pub fn new(config: CallerConfig) -> Self {
        Self::with_announcer(config, Box::new(NullAnnouncer))
    }

    #[must_use]
    pub fn with_announcer(config: CallerConfig, announcer: Box<dyn Announcer>) -> Self {
        Self {
            pool: NumberPool::default(),
            called: HashSet::with_capacity(POOL_SIZE),
            history: Vec::with_capacity(POOL_SIZE),
            current: None,
            status: GameStatus::Idle,
            announcement: READY_MESSAGE.to_string(),
            pending: None,
            config,
            announcer,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current(&self) -> Option<u8> {
        self.current
    }

    pub fn called_count(&self) -> usize {
        self.called.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.pool.len()
    }

    pub fn announcement(&self) -> &str {
        &self.announcement
    }

    /// Render-ready projection of the current state.
    #[must_use]
    pub fn view(&self) -> CallerView {
        CallerView {
            called: self.called.clone(),
            history: self.history.clone(),
            current: self.current,
            status: self.status,
            announcement: self.announcement.clone(),
            called_count: self.called.len(),
            remaining_count: self.pool.len(),
        }
    }

    /// Start a fresh game or resume a paused one.
    ///
    /// Valid only from Idle or Paused; schedules the next call immediately.
    /// Returns whether the control took effect.
    pub fn start(&mut self, now: Instant) -> bool {
        match self.status {
            GameStatus::Idle | GameStatus::Paused => {
                self.status = GameStatus::Running;
                self.pending = Some(PendingCall {
                    phase: CyclePhase::Call,
                    due: now,
                });
                debug!("caller started, {} numbers remaining", self.pool.len());
                true
            }
            GameStatus::Running | GameStatus::Over => false,
        }
    }

    /// Suspend the call cycle, keeping the pool and called set intact.
    ///
    /// Valid only from Running. Clears the pending deadline and cancels any
    /// in-progress utterance. Returns whether the control took effect.
    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.status = GameStatus::Paused;
        self.pending = None;
        self.announcer.cancel();
        debug!("caller paused with {} called", self.called.len());
        true
    }

    /// Reset to a full pool, from any state.
    pub fn restart(&mut self) {
        self.pending = None;
        self.announcer.cancel();
        self.pool.reset();
        self.called.clear();
        self.history.clear();
        self.current = None;
        self.status = GameStatus::Idle;
        self.announcement = READY_MESSAGE.to_string();
        debug!("caller reset");
    }

    /// Advance the call cycle if its deadline has passed.
    ///
    /// Returns whether the view changed; a repeat announcement reschedules
    /// without changing anything a renderer shows.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        let Some(pending) = self.pending else {
            return false;
        };
        if now < pending.due {
            return false;
        }
        match pending.phase {
            CyclePhase::Call => self.call_next(now),
            CyclePhase::Repeat => {
                self.announcer.announce(&self.announcement);
                self.pending = Some(PendingCall {
                    phase: CyclePhase::Call,
                    due: now + self.config.call_delay,
                });
                false
            }
        }
    }

    /// Draw one number, or end the game when the pool is exhausted.
    fn call_next(&mut self, now: Instant) -> bool {
        let Some(number) = self.pool.draw() else {
            self.status = GameStatus::Over;
            self.pending = None;
            self.announcement = GAME_OVER_MESSAGE.to_string();
            self.announcer.announce(&self.announcement);
            info!("all 90 numbers called, game over");
            return true;
        };
        self.called.insert(number);
        self.history.push(number);
        self.current = Some(number);
        self.announcement = format!("Number {number}");
        self.announcer.announce(&self.announcement);
        self.pending = Some(PendingCall {
            phase: CyclePhase::Repeat,
            due: now + self.config.call_delay,
        });
        debug!("called {number}, {} remaining", self.pool.len());
        true
    }
}

impl fmt::Debug for GameCaller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameCaller")
            .field("status", &self.status)
            .field("current", &self.current)
            .field("called", &self.called.len())
            .field("remaining", &self.pool.len())
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
