//! Background work for screens
//!
//! Screens never wait on the network. They hand a future to [`Effects`],
//! which runs it on the tokio runtime and posts the resulting [`AppEvent`]
//! back to the UI thread, where `AppState` drains it once per frame.
//!
//! Every event is stamped with the login epoch current when its work was
//! spawned. `AppState` advances the epoch on login and logout, so results
//! requested for one user are never applied to the next.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::egui_app::api::Backend;
use crate::shared::event::AppEvent;

#[derive(Debug, Clone)]
pub struct Effects {
    runtime: Handle,
    backend: Backend,
    events: mpsc::UnboundedSender<Stamped>,
    epoch: u64,
}

/// A completion together with the login epoch it was requested in
#[derive(Debug, Clone)]
pub struct Stamped {
    pub epoch: u64,
    pub event: AppEvent,
}

impl Effects {
    /// Create the effect runner and the receiving end of its events
    pub fn new(runtime: Handle, backend: Backend) -> (Self, mpsc::UnboundedReceiver<Stamped>) {
        let (events, rx) = mpsc::unbounded_channel();
        (
            Self {
                runtime,
                backend,
                events,
                epoch: 0,
            },
            rx,
        )
    }

    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a new login epoch; events stamped earlier become stale
    pub fn advance_epoch(&mut self) -> u64 {
        self.epoch += 1;
        tracing::debug!("[APP] login epoch {}", self.epoch);
        self.epoch
    }

    /// Run `work` in the background and deliver its event to the UI
    pub fn spawn<F>(&self, work: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let events = self.events.clone();
        let epoch = self.epoch;
        self.runtime.spawn(async move {
            let event = work.await;
            tracing::debug!("[APP] {} ready", event.kind());
            if events.send(Stamped { epoch, event }).is_err() {
                tracing::debug!("[APP] UI gone, event dropped");
            }
        });
    }

    /// Run `work` in the background without reporting back
    pub fn detach<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.runtime.spawn(work);
    }
}
