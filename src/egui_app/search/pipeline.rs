//! Pipeline task: debounce timer, distinct gate, generation counter.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinSet};
use tokio::time::Instant;

use super::{PetSearch, SearchMode, SearchQuery};
use crate::shared::models::Pet;

/// Completion of an issued query, tagged with its generation
type Completion = (u64, Vec<Pet>);

pub(super) struct Pipeline {
    backend: Arc<dyn PetSearch>,
    mode: watch::Receiver<SearchMode>,
    debounce: Duration,
    output: mpsc::UnboundedSender<Vec<Pet>>,
    /// Last term that survived the debounce
    last_settled: Option<String>,
    /// Generation of the most recently issued query
    generation: u64,
    /// Issued queries not yet joined; at most one is not aborted
    in_flight: JoinSet<Completion>,
}

impl Pipeline {
    pub(super) fn new(
        backend: Arc<dyn PetSearch>,
        mode: watch::Receiver<SearchMode>,
        debounce: Duration,
        output: mpsc::UnboundedSender<Vec<Pet>>,
    ) -> Self {
        Self {
            backend,
            mode,
            debounce,
            output,
            last_settled: None,
            generation: 0,
            in_flight: JoinSet::new(),
        }
    }

    pub(super) async fn run(mut self, mut terms: mpsc::UnboundedReceiver<String>) {
        let mut pending: Option<String> = None;
        let mut input_open = true;
        let timer = tokio::time::sleep(self.debounce);
        tokio::pin!(timer);

        loop {
            if !input_open {
                // No more keystrokes: the last term does not need to wait out the window.
                if let Some(term) = pending.take() {
                    self.settle(term);
                }
                if self.in_flight.is_empty() {
                    break;
                }
            }
            if self.output.is_closed() {
                break;
            }

            tokio::select! {
                received = terms.recv(), if input_open => match received {
                    Some(term) => {
                        timer.as_mut().reset(Instant::now() + self.debounce);
                        pending = Some(term);
                    }
                    None => input_open = false,
                },
                () = &mut timer, if pending.is_some() => {
                    if let Some(term) = pending.take() {
                        self.settle(term);
                    }
                }
                Some(joined) = self.in_flight.join_next(), if !self.in_flight.is_empty() => {
                    self.joined(joined);
                }
            }
        }

        self.in_flight.abort_all();
        tracing::debug!("[SEARCH] pipeline finished");
    }

    /// A term survived the debounce window
    fn settle(&mut self, term: String) {
        if self.last_settled.as_deref() == Some(term.as_str()) {
            tracing::debug!("[SEARCH] \"{}\" unchanged, not re-issued", term);
            return;
        }
        self.last_settled = Some(term.clone());
        let mode = *self.mode.borrow();
        self.issue(SearchQuery { term, mode });
    }

    fn issue(&mut self, query: SearchQuery) {
        self.generation += 1;
        let generation = self.generation;

        self.in_flight.abort_all();

        if query.is_blank() {
            self.deliver(Vec::new());
            return;
        }

        tracing::debug!(
            "[SEARCH] issuing #{} {}=\"{}\"",
            generation,
            query.mode.label(),
            query.term
        );
        let backend = Arc::clone(&self.backend);
        self.in_flight.spawn(async move { (generation, query.run(backend.as_ref()).await) });
    }

    fn joined(&mut self, joined: Result<Completion, JoinError>) {
        match joined {
            Ok((generation, pets)) => self.complete(generation, pets),
            Err(e) if e.is_cancelled() => {}
            Err(e) => {
                tracing::warn!("[SEARCH] query task failed: {}", e);
                // Only the latest query is left unaborted, so this was it.
                if self.in_flight.is_empty() {
                    self.deliver(Vec::new());
                }
            }
        }
    }

    fn complete(&mut self, generation: u64, pets: Vec<Pet>) {
        if generation != self.generation {
            tracing::debug!(
                "[SEARCH] discarding stale result #{} (latest #{})",
                generation,
                self.generation
            );
            return;
        }
        self.deliver(pets);
    }

    fn deliver(&self, pets: Vec<Pet>) {
        if self.output.send(pets).is_err() {
            tracing::debug!("[SEARCH] nobody is listening for results");
        }
    }
}
