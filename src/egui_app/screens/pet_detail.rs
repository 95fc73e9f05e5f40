//! Pet detail screen

use super::require_admin;
use crate::egui_app::effects::Effects;
use crate::egui_app::session::Session;
use crate::egui_app::types::AppView;
use crate::shared::event::AppEvent;
use crate::shared::models::{Pet, User};

#[derive(Debug, Default)]
pub struct PetDetailScreen {
    /// Editable copy of the pet
    pub pet: Option<Pet>,
    pub adopters: Vec<User>,
    pub message: String,
    pub saving: bool,
}

impl PetDetailScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, fx: &Effects, session: &Session, id: i32) {
        self.pet = None;
        self.adopters.clear();
        self.message.clear();

        let pets = fx.backend().pets.clone();
        fx.spawn(async move { AppEvent::PetLoaded(pets.get(id).await) });

        if session.is_authorized() {
            let baskets = fx.backend().baskets.clone();
            fx.spawn(async move { AppEvent::AdoptersLoaded(baskets.adopters_of(id).await) });
        }
    }

    pub fn on_loaded(&mut self, pet: Option<Pet>) {
        if pet.is_none() {
            self.message = "Pet not found".to_string();
        }
        self.pet = pet;
    }

    pub fn on_adopters(&mut self, adopters: Vec<User>) {
        self.adopters = adopters;
    }

    /// Store the edited pet (administrator only)
    pub fn save(&mut self, fx: &Effects, session: &Session) {
        if !require_admin(session, &mut self.message) {
            return;
        }
        let Some(pet) = self.pet.clone() else {
            return;
        };
        self.saving = true;
        let pets = fx.backend().pets.clone();
        fx.spawn(async move { AppEvent::PetSaved(pets.update(&pet).await) });
    }

    /// Go back to the list once saved; stay and explain otherwise
    pub fn on_saved(&mut self, ok: bool) -> Option<AppView> {
        self.saving = false;
        if ok {
            self.message.clear();
            Some(AppView::Pets)
        } else {
            self.message = "Changes could not be saved".to_string();
            None
        }
    }
}
