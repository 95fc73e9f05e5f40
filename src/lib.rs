//! Adoption Center - Main Library
//!
//! Desktop client for the uFund pet adoption center, built with egui on top of
//! a tokio runtime. It browses and searches the available pets, manages an
//! adoption basket, takes card donations and lets the administrator curate
//! pets and notifications through the adoption REST backend.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared across the client
//!   - Pet and user entities as the backend serializes them
//!   - Completion events
//!   - Error types and configuration
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session and navigation
//!   - REST services and the incremental search pipeline
//!   - Screens and their views
//!
//! # Usage
//!
//! ```rust,no_run
//! use adoption_center::egui_app::AppState;
//! use adoption_center::shared::AppConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let runtime = tokio::runtime::Runtime::new()?;
//! let mut state = AppState::new(AppConfig::load()?, runtime.handle().clone())?;
//! state.login.username_input = "bob".to_string();
//! state.login.password_input = "secret".to_string();
//! state.submit_login();
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **UI thread**: owns `AppState`; every mutation happens here
//! - **tokio runtime**: runs backend requests and the search pipeline
//! - **Events**: completions return as `AppEvent`s, drained once per frame

pub mod shared;
pub mod egui_app;
