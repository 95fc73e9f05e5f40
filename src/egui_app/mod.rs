//! egui Native Desktop App Module
//!
//! Desktop client for the uFund adoption center. It talks to the adoption
//! REST backend for pets, baskets, users and notifications.
//!
//! # Architecture
//!
//! - **`session`** - Who is logged in and whether they are the administrator
//! - **`api`** - REST services over one shared request helper
//! - **`search`** - Debounced, de-duplicated, latest-wins pet search
//! - **`effects`** - Runs backend work on tokio and reports back as events
//! - **`screens`** - Per-screen view-models (validation, messages, actions)
//! - **`state`** - `AppState`: screens, navigation and event routing
//! - **`types`** - `AppView` and the navigation rules
//! - **`views`** / **`theme`** - egui rendering
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs        - Module exports and documentation
//! ├── main.rs       - Main application entry point
//! ├── session.rs    - Session state
//! ├── effects.rs    - Background work and completion events
//! ├── types.rs      - AppView and navigation
//! ├── api/          - Pet, basket and user services
//! ├── search/       - Incremental search pipeline
//! ├── screens/      - Screen view-models
//! ├── state/        - AppState
//! ├── views/        - egui rendering per screen
//! └── theme/        - Colors and frame builders
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop client:
//! // cargo run --bin adoption_center
//! ```

pub mod api;
pub mod effects;
pub mod screens;
pub mod search;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::Backend;
pub use effects::Effects;
pub use search::{PetSearch, SearchHandle, SearchMode, SearchPipeline, SearchResults};
pub use session::Session;
pub use state::AppState;
pub use types::AppView;
