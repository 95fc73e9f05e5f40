//! Adoption basket screen

use crate::egui_app::effects::Effects;
use crate::shared::event::AppEvent;
use crate::shared::models::Pet;

#[derive(Debug, Default)]
pub struct BasketScreen {
    pub pets: Vec<Pet>,
    pub message: String,
    pub adopting: bool,
}

impl BasketScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, fx: &Effects, username: &str) {
        let baskets = fx.backend().baskets.clone();
        let username = username.to_string();
        fx.spawn(async move { AppEvent::BasketLoaded(baskets.list_for(&username).await) });
    }

    pub fn on_loaded(&mut self, pets: Vec<Pet>) {
        self.pets = pets;
    }

    pub fn remove(&mut self, fx: &Effects, pet: &Pet) {
        self.pets.retain(|p| p.id != pet.id);
        self.message = format!("{} has been removed from your basket", pet.name);
        let baskets = fx.backend().baskets.clone();
        let id = pet.id;
        fx.detach(async move {
            baskets.remove(id).await;
        });
    }

    /// Finalize every pet in the basket. Each pet is moved to the history
    /// and then taken out of the available pool.
    pub fn adopt(&mut self, fx: &Effects) {
        if self.pets.is_empty() || self.adopting {
            return;
        }
        let pending = std::mem::take(&mut self.pets);
        self.adopting = true;
        self.message.clear();

        let baskets = fx.backend().baskets.clone();
        let pets = fx.backend().pets.clone();
        fx.spawn(async move {
            let mut adopted = Vec::new();
            let mut failed = Vec::new();
            for pet in pending {
                if baskets.adopt(pet.id).await {
                    if !pets.delete(pet.id).await {
                        tracing::warn!("[APP] {} adopted but still listed as available", pet.name);
                    }
                    adopted.push(pet);
                } else {
                    failed.push(pet);
                }
            }
            AppEvent::AdoptionFinished { adopted, failed }
        });
    }

    pub fn on_adoption_finished(&mut self, adopted: Vec<Pet>, failed: Vec<Pet>) {
        self.adopting = false;
        tracing::info!("[APP] {} pets adopted, {} failed", adopted.len(), failed.len());
        if failed.is_empty() {
            self.message = "Thank you for adopting!".to_string();
        } else {
            self.pets.extend(failed);
            self.message = "Some adoptions could not be completed".to_string();
        }
    }

    pub fn has_pets(&self) -> bool {
        !self.pets.is_empty()
    }
}
