//! Caller actor message types.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use crate::game::entities::CallerView;

/// Messages that can be sent to a [`super::CallerActor`].
#[derive(Debug)]
pub enum CallerMessage {
    /// Start a fresh game or resume a paused one
    Start {
        response: oneshot::Sender<CallerResponse>,
    },

    /// Suspend the call cycle
    Pause {
        response: oneshot::Sender<CallerResponse>,
    },

    /// Reset to a full pool
    Restart {
        response: oneshot::Sender<CallerResponse>,
    },

    /// Get the current render snapshot
    GetView {
        response: oneshot::Sender<CallerView>,
    },

    /// Subscribe to snapshot notifications
    Subscribe { sender: mpsc::Sender<CallerView> },

    /// Shut the actor down
    Close {
        response: oneshot::Sender<CallerResponse>,
    },
}

/// Response from caller controls.
///
/// Controls that are valid but have no effect in the current status answer
/// [`CallerResponse::Ignored`]; nothing here is an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CallerResponse {
    /// The control took effect
    Accepted,

    /// The control had no effect in the current status
    Ignored,
}

impl CallerResponse {
    /// Check if the control took effect
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Errors talking to the caller task.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum CallerError {
    #[error("caller is closed")]
    Closed,
}
