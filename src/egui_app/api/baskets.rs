//! Basket API
//!
//! Pending adoptions per user, finalizing them, and adoption history.

use super::ApiClient;
use crate::shared::models::{Pet, User};

#[derive(Debug, Clone)]
pub struct BasketService {
    api: ApiClient,
}

impl BasketService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Pets in `username`'s basket
    pub async fn list_for(&self, username: &str) -> Vec<Pet> {
        let request = self.api.get(self.api.endpoint(&["baskets", "username", username]));
        self.api
            .fetch_or(&format!("getBasket user={}", username), Vec::new(), request)
            .await
    }

    /// Put a pet in the basket. `None` when the backend refuses, which in
    /// practice means the pet is already there.
    pub async fn add(&self, pet: &Pet) -> Option<Pet> {
        let request = self.api.post(self.api.endpoint(&["baskets"])).json(pet);
        self.api.fetch_or(&format!("addToBasket id={}", pet.id), None, request).await
    }

    pub async fn remove(&self, id: i32) -> bool {
        let request = self
            .api
            .delete(self.api.endpoint(&["baskets", id.to_string().as_str()]));
        self.api.send_ok(&format!("removeFromBasket id={}", id), request).await
    }

    /// Move a basket pet into the adopted history
    pub async fn adopt(&self, id: i32) -> bool {
        let request = self
            .api
            .post(self.api.endpoint(&["baskets", "adopt"]))
            .json(&id);
        self.api.send_ok(&format!("adopt id={}", id), request).await
    }

    /// Pets `username` has adopted
    pub async fn adopted_by(&self, username: &str) -> Vec<Pet> {
        let request = self.api.get(self.api.endpoint(&["baskets", "adopted", username]));
        self.api
            .fetch_or(&format!("getAdopted user={}", username), Vec::new(), request)
            .await
    }

    /// Users who adopted the pet with `id`
    pub async fn adopters_of(&self, id: i32) -> Vec<User> {
        let request = self
            .api
            .get(self.api.endpoint(&["baskets", "adopter", id.to_string().as_str()]));
        self.api
            .fetch_or(&format!("getAdopters id={}", id), Vec::new(), request)
            .await
    }
}
