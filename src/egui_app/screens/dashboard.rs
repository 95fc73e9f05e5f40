//! Dashboard screen: incremental pet search

use std::sync::Arc;
use std::time::Duration;

use crate::egui_app::effects::Effects;
use crate::egui_app::search::{SearchHandle, SearchMode, SearchPipeline, SearchResults};
use crate::shared::models::Pet;

#[derive(Debug, Default)]
pub struct DashboardScreen {
    pub search_input: String,
    pub results: Vec<Pet>,
    search: Option<(SearchHandle, SearchResults)>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the search pipeline against the pet service
    pub fn start(&mut self, fx: &Effects, debounce: Duration) {
        let backend = Arc::new(fx.backend().pets.clone());
        self.search = Some(SearchPipeline::spawn(fx.runtime(), backend, debounce));
    }

    pub fn is_started(&self) -> bool {
        self.search.is_some()
    }

    /// Feed one keystroke's worth of search box contents
    pub fn search(&mut self, term: impl Into<String>) {
        if let Some((handle, _)) = &self.search {
            handle.search(term);
        }
    }

    /// Called whenever the search box changes
    pub fn on_input_changed(&mut self) {
        let term = self.search_input.clone();
        self.search(term);
    }

    pub fn toggle_mode(&mut self) -> SearchMode {
        match &self.search {
            Some((handle, _)) => handle.toggle_mode(),
            None => SearchMode::default(),
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.search
            .as_ref()
            .map(|(handle, _)| handle.mode())
            .unwrap_or_default()
    }

    /// Pick up delivered results; `true` when the list changed
    pub fn poll(&mut self) -> bool {
        let Some((_, results)) = &mut self.search else {
            return false;
        };
        let mut latest = None;
        while let Some(pets) = results.try_next() {
            latest = Some(pets);
        }
        match latest {
            Some(pets) => {
                self.results = pets;
                true
            }
            None => false,
        }
    }

    /// Wait for the next delivered result list and show it
    pub async fn next_results(&mut self) -> Option<&[Pet]> {
        let (_, results) = self.search.as_mut()?;
        let pets = results.next().await?;
        self.results = pets;
        Some(self.results.as_slice())
    }

    /// Forget the previous user's search. The blank term supersedes any
    /// query still in flight.
    pub fn reset(&mut self) {
        self.search_input.clear();
        self.results.clear();
        if let Some((handle, _)) = &self.search {
            handle.set_mode(SearchMode::default());
            handle.search(String::new());
        }
    }
}
