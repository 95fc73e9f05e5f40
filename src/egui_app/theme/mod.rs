//! Theme Module
//!
//! Color scheme and styling for the adoption center client:
//!
//! - Color constants for the brown/tan theme
//! - Frame and button builders used by the views
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::pet_card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_LIGHT, "Rex");
//! });
//! ```

pub mod colors;
pub mod styles;
