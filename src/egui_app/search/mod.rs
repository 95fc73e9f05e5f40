//! Incremental Pet Search
//!
//! Turns a keystroke-rate stream of search terms into at most one current
//! backend query:
//!
//! - **debounce**: a term only survives if no other term follows within the
//!   quiet window
//! - **distinct**: a surviving term equal to the previous survivor is dropped
//! - **routing**: the mode (name or type) is read when the query is issued
//! - **switch**: every issued query gets a generation number; only the latest
//!   generation's result is delivered, older ones are aborted or discarded
//!
//! Blank terms resolve to an empty list without contacting the backend.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use adoption_center::egui_app::api::{ApiClient, PetService};
//! use adoption_center::egui_app::search::SearchPipeline;
//! use adoption_center::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pets = PetService::new(ApiClient::new(&AppConfig::default())?);
//! let runtime = tokio::runtime::Handle::current();
//! let (search, mut results) =
//!     SearchPipeline::spawn(&runtime, Arc::new(pets), Duration::from_millis(300));
//!
//! search.search("ca");
//! search.search("cat");
//! let matches = results.next().await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::shared::models::Pet;

mod pipeline;

use pipeline::Pipeline;

/// Which field a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Name,
    Type,
}

impl SearchMode {
    pub fn toggled(self) -> Self {
        match self {
            SearchMode::Name => SearchMode::Type,
            SearchMode::Type => SearchMode::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Name => "name",
            SearchMode::Type => "type",
        }
    }
}

/// The backend queries the pipeline routes terms to.
///
/// Implementations resolve failures to an empty list themselves.
#[async_trait]
pub trait PetSearch: Send + Sync {
    async fn search_by_name(&self, term: &str) -> Vec<Pet>;
    async fn search_by_type(&self, term: &str) -> Vec<Pet>;
}

/// A term routed to a concrete query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub mode: SearchMode,
}

impl SearchQuery {
    pub fn is_blank(&self) -> bool {
        self.term.trim().is_empty()
    }

    pub async fn run(&self, backend: &dyn PetSearch) -> Vec<Pet> {
        if self.is_blank() {
            return Vec::new();
        }
        match self.mode {
            SearchMode::Name => backend.search_by_name(&self.term).await,
            SearchMode::Type => backend.search_by_type(&self.term).await,
        }
    }
}

/// Input side of a running pipeline
#[derive(Debug, Clone)]
pub struct SearchHandle {
    terms: mpsc::UnboundedSender<String>,
    mode: Arc<watch::Sender<SearchMode>>,
}

impl SearchHandle {
    /// Push the current contents of the search box
    pub fn search(&self, term: impl Into<String>) {
        if self.terms.send(term.into()).is_err() {
            tracing::debug!("[SEARCH] pipeline stopped, term dropped");
        }
    }

    /// Flip between name and type search; returns the new mode.
    /// Queries already issued are unaffected.
    pub fn toggle_mode(&self) -> SearchMode {
        self.mode.send_modify(|mode| *mode = mode.toggled());
        self.mode()
    }

    pub fn set_mode(&self, mode: SearchMode) {
        self.mode.send_replace(mode);
    }

    pub fn mode(&self) -> SearchMode {
        *self.mode.borrow()
    }
}

/// Output side of a running pipeline: one result list per delivered query
#[derive(Debug)]
pub struct SearchResults {
    results: mpsc::UnboundedReceiver<Vec<Pet>>,
}

impl SearchResults {
    /// Wait for the next delivered result list; `None` once the pipeline ends
    pub async fn next(&mut self) -> Option<Vec<Pet>> {
        self.results.recv().await
    }

    /// A result list that is already available, without waiting
    pub fn try_next(&mut self) -> Option<Vec<Pet>> {
        self.results.try_recv().ok()
    }

    pub fn into_stream(self) -> UnboundedReceiverStream<Vec<Pet>> {
        UnboundedReceiverStream::new(self.results)
    }
}

pub struct SearchPipeline;

impl SearchPipeline {
    /// Start a pipeline on `runtime`. It runs until every `SearchHandle` is
    /// dropped (after flushing the last term) or `SearchResults` is dropped.
    pub fn spawn(
        runtime: &Handle,
        backend: Arc<dyn PetSearch>,
        debounce: Duration,
    ) -> (SearchHandle, SearchResults) {
        let (terms_tx, terms_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let (mode_tx, mode_rx) = watch::channel(SearchMode::default());

        let pipeline = Pipeline::new(backend, mode_rx, debounce, results_tx);
        runtime.spawn(pipeline.run(terms_rx));

        (
            SearchHandle {
                terms: terms_tx,
                mode: Arc::new(mode_tx),
            },
            SearchResults {
                results: results_rx,
            },
        )
    }
}
