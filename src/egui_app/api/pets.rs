//! Pet API
//!
//! CRUD and search over the available-pet pool.

use async_trait::async_trait;

use super::ApiClient;
use crate::egui_app::search::PetSearch;
use crate::shared::models::Pet;

/// Pet pool client
#[derive(Debug, Clone)]
pub struct PetService {
    api: ApiClient,
}

impl PetService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// All available pets
    pub async fn list(&self) -> Vec<Pet> {
        let request = self.api.get(self.api.endpoint(&["pets"]));
        self.api.fetch_or("getPets", Vec::new(), request).await
    }

    /// A single pet, `None` when unknown
    pub async fn get(&self, id: i32) -> Option<Pet> {
        let request = self.api.get(self.api.endpoint(&["pets", id.to_string().as_str()]));
        self.api.fetch_or(&format!("getPet id={}", id), None, request).await
    }

    /// Pets whose name contains `term`
    pub async fn search_by_name(&self, term: &str) -> Vec<Pet> {
        self.search("name", term).await
    }

    /// Pets whose animal type contains `term`
    pub async fn search_by_type(&self, term: &str) -> Vec<Pet> {
        self.search("type", term).await
    }

    async fn search(&self, field: &str, term: &str) -> Vec<Pet> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        let request = self.api.get(self.api.endpoint(&["pets", field, term]));
        let pets: Vec<Pet> = self
            .api
            .fetch_or(&format!("searchPets {}={}", field, term), Vec::new(), request)
            .await;
        if pets.is_empty() {
            tracing::debug!("[API] no pets matching {}=\"{}\"", field, term);
        } else {
            tracing::debug!("[API] found {} pets matching {}=\"{}\"", pets.len(), field, term);
        }
        pets
    }

    /// Add a pet to the pool; the stored pet carries the backend's id
    pub async fn add(&self, pet: &Pet) -> Option<Pet> {
        let request = self.api.post(self.api.endpoint(&["pets"])).json(pet);
        self.api.fetch_or("addPet", None, request).await
    }

    pub async fn update(&self, pet: &Pet) -> bool {
        let request = self.api.put(self.api.endpoint(&["pets"])).json(pet);
        self.api.send_ok(&format!("updatePet id={}", pet.id), request).await
    }

    pub async fn delete(&self, id: i32) -> bool {
        let request = self.api.delete(self.api.endpoint(&["pets", id.to_string().as_str()]));
        self.api.send_ok(&format!("deletePet id={}", id), request).await
    }
}

#[async_trait]
impl PetSearch for PetService {
    async fn search_by_name(&self, term: &str) -> Vec<Pet> {
        PetService::search_by_name(self, term).await
    }

    async fn search_by_type(&self, term: &str) -> Vec<Pet> {
        PetService::search_by_type(self, term).await
    }
}
