/**
 * Shared Types Module
 *
 * App view states and the navigation rules that depend on the session.
 */

use crate::egui_app::session::Session;

/// Current app view/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login form
    Login,
    /// Account creation form
    CreateUser,
    /// Landing page with the incremental pet search
    Dashboard,
    /// All available pets
    Pets,
    /// One pet, editable by the administrator
    PetDetail(i32),
    /// Pending adoptions of the current user
    Basket,
    /// Pets the current user has adopted
    History,
    /// Donation form
    Donate,
    /// Notification inbox
    Notifications,
    /// Account page with logout
    Account,
}

impl AppView {
    /// Reachable without being logged in
    pub fn is_public(self) -> bool {
        matches!(self, AppView::Login | AppView::CreateUser)
    }

    pub fn title(self) -> &'static str {
        match self {
            AppView::Login => "Login",
            AppView::CreateUser => "Create Account",
            AppView::Dashboard => "Dashboard",
            AppView::Pets => "Pets",
            AppView::PetDetail(_) => "Pet Details",
            AppView::Basket => "Basket",
            AppView::History => "History",
            AppView::Donate => "Donate",
            AppView::Notifications => "Notifications",
            AppView::Account => "Account",
        }
    }

    /// Entries of the navigation bar for this session
    pub fn nav_items(session: &Session) -> Vec<AppView> {
        if !session.nav_visible() {
            return Vec::new();
        }
        if session.is_authorized() {
            vec![
                AppView::Dashboard,
                AppView::Pets,
                AppView::Notifications,
                AppView::Account,
            ]
        } else {
            vec![
                AppView::Dashboard,
                AppView::Pets,
                AppView::Basket,
                AppView::History,
                AppView::Donate,
                AppView::Account,
            ]
        }
    }
}
