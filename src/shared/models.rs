//! Backend entity shapes
//!
//! These mirror the JSON the adoption backend produces and accepts. The
//! client never interprets them beyond display and identity.

use serde::{Deserialize, Serialize};

/// A pet available for adoption, a basket entry, or an adopted pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    #[serde(rename = "animaltype")]
    pub animal_type: String,
}

impl Pet {
    pub fn new(id: i32, name: impl Into<String>, animal_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            animal_type: animal_type.into(),
        }
    }

    /// A pet that has not been stored yet; the backend assigns the id.
    pub fn draft(name: impl Into<String>, animal_type: impl Into<String>) -> Self {
        Self::new(0, name, animal_type)
    }
}

/// A registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub basket_pets: Vec<i32>,
    #[serde(default)]
    pub adopted_pets: Vec<i32>,
    #[serde(default, alias = "notifs")]
    pub notifications: Vec<String>,
}

impl User {
    /// A fresh account with empty basket, history and inbox
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            basket_pets: Vec::new(),
            adopted_pets: Vec::new(),
            notifications: Vec::new(),
        }
    }
}
