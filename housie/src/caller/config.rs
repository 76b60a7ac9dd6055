//! Caller configuration models.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::game::constants::{DEFAULT_CALL_DELAY, DEFAULT_TICK_PERIOD};

/// Timing configuration for the caller.
///
/// The two-phase cadence itself is fixed; only the magnitude of the hold is
/// tunable, and it is not exposed on any user surface.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CallerConfig {
    /// Hold between a call and its repeat, and again before the next call.
    pub call_delay: Duration,

    /// How often the actor checks for due deadlines.
    pub tick_period: Duration,
}

impl Default for CallerConfig {
    fn default() -> Self {
        Self {
            call_delay: DEFAULT_CALL_DELAY,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }
}
