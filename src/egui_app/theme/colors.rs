//! Color Constants for the Adoption Center Theme
//!
//! Warm brown/tan palette shared by every screen.

use eframe::egui::Color32;

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Pet card background - Dark brown
pub const CARD_BG: Color32 = Color32::from_rgb(0x3A, 0x27, 0x21);

/// Pet card hovered - Lighter brown
pub const CARD_HOVER: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x4A, 0x2E, 0x22);

/// Form panel background - Off-white
pub const FORM_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Input background - Light tan
pub const INPUT_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Input border - Muted tan
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xC3, 0xA9, 0x90);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Accent color for highlights and the active nav entry
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Button primary background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Button secondary background
pub const BUTTON_SECONDARY: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Destructive actions (delete, remove)
pub const BUTTON_DANGER: Color32 = Color32::from_rgb(0x8E, 0x3B, 0x2E);

/// Status line text
pub const STATUS: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
