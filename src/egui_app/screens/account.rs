//! Account screen

use crate::egui_app::session::Session;
use crate::egui_app::types::AppView;

#[derive(Debug, Default)]
pub struct AccountScreen;

impl AccountScreen {
    pub fn new() -> Self {
        Self
    }

    /// Line shown at the top of the account page
    pub fn greeting(&self, session: &Session) -> String {
        if session.is_authorized() {
            format!("Logged in as {} (administrator)", session.current_user())
        } else {
            format!("Logged in as {}", session.current_user())
        }
    }

    pub fn logout(&mut self, session: &mut Session) -> AppView {
        session.logout();
        AppView::Login
    }
}
