//! Screen view-models
//!
//! Each screen validates its input synchronously, applies optimistic updates,
//! hands backend work to [`Effects`](crate::egui_app::effects::Effects), and
//! applies the completion when `AppState` routes the matching event back.
//! Every screen reports problems through its `message` status line.

pub mod account;
pub mod basket;
pub mod create_user;
pub mod dashboard;
pub mod donate;
pub mod history;
pub mod login;
pub mod notifications;
pub mod pet_detail;
pub mod pets;

pub use account::AccountScreen;
pub use basket::BasketScreen;
pub use create_user::CreateUserScreen;
pub use dashboard::DashboardScreen;
pub use donate::{luhn_valid, DonateScreen};
pub use history::HistoryScreen;
pub use login::LoginScreen;
pub use notifications::NotificationsScreen;
pub use pet_detail::PetDetailScreen;
pub use pets::PetsScreen;

use crate::egui_app::session::Session;
use crate::shared::error::FormError;

/// Gate for admin-only actions; writes the refusal into `message`
pub(crate) fn require_admin(session: &Session, message: &mut String) -> bool {
    if session.is_authorized() {
        return true;
    }
    tracing::warn!("[APP] admin action refused for \"{}\"", session.current_user());
    *message = FormError::AdminOnly.to_string();
    false
}
