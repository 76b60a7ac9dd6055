//! Caller actor with async message handling.

use tokio::{
    sync::{mpsc, oneshot},
    time::{MissedTickBehavior, interval},
};

use super::{
    config::CallerConfig,
    messages::{CallerError, CallerMessage, CallerResponse},
};
use crate::{
    announce::Announcer,
    game::{GameCaller, entities::CallerView},
};

/// Handle for sending controls to a running [`CallerActor`].
#[derive(Clone)]
pub struct CallerHandle {
    sender: mpsc::Sender<CallerMessage>,
}

impl CallerHandle {
    /// Start a fresh game or resume a paused one.
    pub async fn start(&self) -> Result<CallerResponse, CallerError> {
        self.request(|response| CallerMessage::Start { response })
            .await
    }

    /// Suspend the call cycle.
    pub async fn pause(&self) -> Result<CallerResponse, CallerError> {
        self.request(|response| CallerMessage::Pause { response })
            .await
    }

    /// Reset to a full pool.
    pub async fn restart(&self) -> Result<CallerResponse, CallerError> {
        self.request(|response| CallerMessage::Restart { response })
            .await
    }

    /// Shut the actor down.
    pub async fn close(&self) -> Result<CallerResponse, CallerError> {
        self.request(|response| CallerMessage::Close { response })
            .await
    }

    /// Get the current render snapshot.
    pub async fn view(&self) -> Result<CallerView, CallerError> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(CallerMessage::GetView { response: tx })
            .await
            .map_err(|_| CallerError::Closed)?;
        rx.await.map_err(|_| CallerError::Closed)
    }

    /// Subscribe to snapshot notifications.
    ///
    /// A snapshot arrives on every view change; slow subscribers drop
    /// snapshots rather than stall the caller.
    pub async fn subscribe(
        &self,
        capacity: usize,
    ) -> Result<mpsc::Receiver<CallerView>, CallerError> {
        let (tx, rx) = mpsc::channel(capacity);
        self.sender
            .send(CallerMessage::Subscribe { sender: tx })
            .await
            .map_err(|_| CallerError::Closed)?;
        Ok(rx)
    }

    async fn request<F>(&self, make: F) -> Result<CallerResponse, CallerError>
    where
        F: FnOnce(oneshot::Sender<CallerResponse>) -> CallerMessage,
    {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(make(tx))
            .await
            .map_err(|_| CallerError::Closed)?;
        rx.await.map_err(|_| CallerError::Closed)
    }
}

/// Actor driving a single caller game.
pub struct CallerActor {
    caller: GameCaller,
    inbox: mpsc::Receiver<CallerMessage>,
    config: CallerConfig,
    subscribers: Vec<mpsc::Sender<CallerView>>,
    is_closed: bool,
}

impl CallerActor {
    pub fn new(config: CallerConfig, announcer: Box<dyn Announcer>) -> (Self, CallerHandle) {
        let (sender, inbox) = mpsc::channel(32);
        let actor = Self {
            caller: GameCaller::with_announcer(config, announcer),
            inbox,
            config,
            subscribers: Vec::new(),
            is_closed: false,
        };
        (actor, CallerHandle { sender })
    }

    /// Spawn the actor onto the current runtime and return its handle.
    pub fn spawn(config: CallerConfig, announcer: Box<dyn Announcer>) -> CallerHandle {
        let (actor, handle) = Self::new(config, announcer);
        tokio::spawn(actor.run());
        handle
    }

    /// Run the caller event loop.
    pub async fn run(mut self) {
        log::info!("caller starting");

        let mut ticks = interval(self.config.tick_period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                message = self.inbox.recv() => {
                    match message {
                        Some(message) => self.handle_message(message),
                        // every handle is gone, nothing can reach us again
                        None => break,
                    }
                    if self.is_closed {
                        break;
                    }
                }

                _ = ticks.tick() => {
                    let now = tokio::time::Instant::now().into_std();
                    if self.caller.tick(now) {
                        self.notify();
                    }
                }
            }
        }

        log::info!("caller closed");
    }

    fn handle_message(&mut self, message: CallerMessage) {
        match message {
            CallerMessage::Start { response } => {
                let now = tokio::time::Instant::now().into_std();
                let accepted = self.caller.start(now);
                // the first call of a cycle fires without waiting for a tick
                if accepted && self.caller.tick(now) {
                    self.notify();
                }
                let _ = response.send(Self::ack(accepted));
            }

            CallerMessage::Pause { response } => {
                let accepted = self.caller.pause();
                if accepted {
                    self.notify();
                }
                let _ = response.send(Self::ack(accepted));
            }

            CallerMessage::Restart { response } => {
                self.caller.restart();
                self.notify();
                let _ = response.send(CallerResponse::Accepted);
            }

            CallerMessage::GetView { response } => {
                let _ = response.send(self.caller.view());
            }

            CallerMessage::Subscribe { sender } => {
                self.subscribers.push(sender);
            }

            CallerMessage::Close { response } => {
                self.is_closed = true;
                let _ = response.send(CallerResponse::Accepted);
            }
        }
    }

    fn ack(accepted: bool) -> CallerResponse {
        if accepted {
            CallerResponse::Accepted
        } else {
            CallerResponse::Ignored
        }
    }

    /// Fan the current snapshot out to every live subscriber.
    fn notify(&mut self) {
        let view = self.caller.view();
        self.subscribers.retain(|sender| {
            match sender.try_send(view.clone()) {
                Ok(()) => true,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    log::warn!("subscriber channel full, dropping snapshot");
                    true
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    log::debug!("subscriber disconnected, removing");
                    false
                }
            }
        });
    }
}
