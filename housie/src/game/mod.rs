//! Number caller engine - core state machine and entities.
//!
//! This module provides the foundational caller implementation including:
//! - The undrawn number pool with uniform draw-without-replacement
//! - Game status lifecycle and the two-phase call cadence
//! - Render-ready snapshots for the board

pub mod constants;
pub mod entities;
pub mod state_machine;

pub use state_machine::GameCaller;
