//! Shared Module
//!
//! Types shared by every part of the client: backend entity shapes, error
//! types, configuration, and the completion events flowing back to the UI.

/// Backend entity shapes
pub mod models;

/// Completion events
pub mod event;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use models::{Pet, User};
pub use event::AppEvent;
pub use error::{ApiError, FormError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
