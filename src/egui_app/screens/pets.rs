//! Pet list screen

use super::require_admin;
use crate::egui_app::effects::Effects;
use crate::egui_app::session::Session;
use crate::shared::event::AppEvent;
use crate::shared::models::Pet;

#[derive(Debug, Default)]
pub struct PetsScreen {
    pub pets: Vec<Pet>,
    pub name_input: String,
    pub type_input: String,
    pub message: String,
}

impl PetsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, fx: &Effects) {
        let pets = fx.backend().pets.clone();
        fx.spawn(async move { AppEvent::PetsLoaded(pets.list().await) });
    }

    pub fn on_loaded(&mut self, pets: Vec<Pet>) {
        self.pets = pets;
    }

    pub fn add_form(&mut self, fx: &Effects, session: &Session) {
        let name = self.name_input.clone();
        let animal_type = self.type_input.clone();
        self.add(fx, session, &name, &animal_type);
    }

    /// Add a pet to the pool (administrator only). Blank fields are ignored.
    pub fn add(&mut self, fx: &Effects, session: &Session, name: &str, animal_type: &str) {
        if !require_admin(session, &mut self.message) {
            return;
        }
        let (name, animal_type) = (name.trim(), animal_type.trim());
        if name.is_empty() || animal_type.is_empty() {
            return;
        }
        let draft = Pet::draft(name, animal_type);
        let pets = fx.backend().pets.clone();
        fx.spawn(async move { AppEvent::PetAdded(pets.add(&draft).await) });
    }

    pub fn on_added(&mut self, added: Option<Pet>) {
        match added {
            Some(pet) => {
                self.name_input.clear();
                self.type_input.clear();
                self.message.clear();
                self.pets.push(pet);
            }
            None => self.message = "The pet could not be added".to_string(),
        }
    }

    pub fn add_to_basket(&mut self, fx: &Effects, pet: &Pet) {
        let baskets = fx.backend().baskets.clone();
        let requested = pet.clone();
        fx.spawn(async move {
            let stored = baskets.add(&requested).await;
            AppEvent::BasketAddResult { requested, stored }
        });
    }

    pub fn on_basket_result(&mut self, requested: &Pet, stored: Option<Pet>) {
        self.message = match stored {
            Some(pet) => format!("{} has been added to your basket!", pet.name),
            None => format!("{} already exists in your basket!", requested.name),
        };
    }

    /// Remove a pet from the pool (administrator only). The list updates
    /// before the backend confirms.
    pub fn delete(&mut self, fx: &Effects, session: &Session, id: i32) {
        if !require_admin(session, &mut self.message) {
            return;
        }
        self.pets.retain(|pet| pet.id != id);
        let pets = fx.backend().pets.clone();
        fx.detach(async move {
            pets.delete(id).await;
        });
    }
}
