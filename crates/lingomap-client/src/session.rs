//! Hover session: a controller plus the async plumbing for its lookups.

use std::fmt;
use std::sync::Arc;

use lingomap_core::{render_hover, Applied, HoverController, HoverInfo, LanguageEntry, Region};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::error::{LookupError, LookupResult};
use crate::LanguageLookup;

/// Called from the lookup task after a completion is queued.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

struct Completion {
    generation: u64,
    outcome: LookupResult<Vec<LanguageEntry>>,
}

/// Drives one map view's hover state.
///
/// The session is owned by the UI thread. Lookups run as tokio tasks and
/// report back over a channel; nothing touches controller state except the
/// owner, through [`HoverSession::poll`] or [`HoverSession::settle`].
/// Overlapping lookups are allowed and are not cancelled; the controller's
/// generation check drops any that finish after the pointer has moved on.
pub struct HoverSession {
    controller: HoverController,
    lookup: Arc<dyn LanguageLookup>,
    runtime: Handle,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
    in_flight: usize,
    notifier: Option<Notifier>,
}

impl fmt::Debug for HoverSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverSession")
            .field("controller", &self.controller)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl HoverSession {
    pub fn new(lookup: Arc<dyn LanguageLookup>, runtime: Handle, num_languages: u32) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            controller: HoverController::new(num_languages),
            lookup,
            runtime,
            tx,
            rx,
            in_flight: 0,
            notifier: None,
        }
    }

    /// Install a callback fired whenever a lookup finishes, e.g. to wake a UI.
    pub fn with_notifier(mut self, notifier: impl Fn() + Send + Sync + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    /// Handle a hover event. Returns true if a lookup was issued.
    pub fn hover(&mut self, region: &str) -> bool {
        let Some(ticket) = self.controller.on_hover(region) else {
            return false;
        };

        let lookup = Arc::clone(&self.lookup);
        let tx = self.tx.clone();
        let notifier = self.notifier.clone();
        let generation = ticket.generation;
        let request = ticket.request;

        self.in_flight += 1;
        self.runtime.spawn(async move {
            // A panicking lookup must still report back, or the hover stays loading
            let fetch = tokio::spawn(async move {
                lookup
                    .fetch(&request.state_name, request.num_languages)
                    .await
            });
            let outcome = match fetch.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    let reason = if err.is_panic() { "panicked" } else { "was cancelled" };
                    warn!(generation, "lookup task {reason}");
                    Err(LookupError::other(format!("lookup task {reason}")))
                }
            };
            if tx.send(Completion { generation, outcome }).is_err() {
                debug!(generation, "session dropped before lookup finished");
                return;
            }
            if let Some(notify) = notifier {
                notify();
            }
        });

        true
    }

    /// Apply every completion that has already arrived. Never blocks.
    ///
    /// Returns true if any completion changed controller state.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(completion) => {
                    changed |= self.apply(completion) != Applied::Stale;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("lookup channel closed");
                    break;
                }
            }
        }
        changed
    }

    /// Wait for the next completion and apply it.
    ///
    /// Returns `None` immediately when no lookup is in flight.
    pub async fn settle(&mut self) -> Option<Applied> {
        if self.in_flight == 0 {
            return None;
        }
        let completion = self.rx.recv().await?;
        Some(self.apply(completion))
    }

    /// Settle every in-flight lookup, returning what each one did.
    pub async fn settle_all(&mut self) -> Vec<Applied> {
        let mut applied = Vec::with_capacity(self.in_flight);
        while let Some(a) = self.settle().await {
            applied.push(a);
        }
        applied
    }

    fn apply(&mut self, completion: Completion) -> Applied {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.controller
            .complete(completion.generation, completion.outcome)
    }

    pub fn controller(&self) -> &HoverController {
        &self.controller
    }

    /// Lookups spawned but not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Hover card for `region` under the current state.
    pub fn render(&self, region: &Region) -> HoverInfo {
        render_hover(region, &self.controller)
    }

    /// Forget hover state; lookups still in flight become stale.
    pub fn reset(&mut self) {
        self.controller.reset();
    }
}
