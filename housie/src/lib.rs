//! # Housie
//!
//! A Housie/Tambola number-caller engine: draws unique numbers from a fixed
//! pool of 1–90 without replacement and announces each one on a timed
//! announce-repeat-advance cadence.
//!
//! ## Architecture
//!
//! The game lives in a single state machine, [`GameCaller`], with four
//! statuses covering the whole lifecycle:
//!
//! - **Idle**: fresh pool, waiting for the first start
//! - **Running**: the call cycle is active
//! - **Paused**: user-suspended, pool and called set retained
//! - **Over**: pool exhausted, only a restart revives the game
//!
//! Timing is driven by [`caller::CallerActor`], which owns the state machine
//! and is the only thing that advances the draw sequence. Spoken output goes
//! through the [`Announcer`] capability so the game logic carries no audio
//! dependency.
//!
//! ## Core Modules
//!
//! - [`game`]: number pool, state machine, and render snapshots
//! - [`caller`]: the timed actor and its control messages
//! - [`announce`]: the announcement capability seam
//!
//! ## Example
//!
//! ```
//! use housie::{CallerConfig, GameCaller, GameStatus};
//!
//! let caller = GameCaller::new(CallerConfig::default());
//! assert_eq!(caller.status(), GameStatus::Idle);
//! assert_eq!(caller.remaining_count(), 90);
//! ```

/// Announcement capability for spoken output.
pub mod announce;
pub use announce::{Announcer, NullAnnouncer};

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    GameCaller,
    constants::{self, POOL_MAX, POOL_MIN},
    entities::{self, CallerView, GameStatus, NumberPool},
};

/// Timed caller actor and control messages.
pub mod caller;
pub use caller::{CallerActor, CallerConfig, CallerError, CallerHandle, CallerResponse};
