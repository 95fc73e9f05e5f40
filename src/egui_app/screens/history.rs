//! Adoption history screen

use crate::egui_app::effects::Effects;
use crate::shared::event::AppEvent;
use crate::shared::models::Pet;

#[derive(Debug, Default)]
pub struct HistoryScreen {
    pub pets: Vec<Pet>,
}

impl HistoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, fx: &Effects, username: &str) {
        let baskets = fx.backend().baskets.clone();
        let username = username.to_string();
        fx.spawn(async move { AppEvent::HistoryLoaded(baskets.adopted_by(&username).await) });
    }

    pub fn on_loaded(&mut self, pets: Vec<Pet>) {
        self.pets = pets;
    }

    pub fn has_pets(&self) -> bool {
        !self.pets.is_empty()
    }
}
