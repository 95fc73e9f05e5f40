/**
 * Session Module
 *
 * Who is logged in and what they may see. One `Session` lives in `AppState`
 * and is handed to screens by reference; it is only changed through the
 * named operations below, so the user and admin flag always move together.
 */

/// The reserved account with pet and notification management rights
pub const ADMIN_USERNAME: &str = "admin";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user: String,
    is_admin: bool,
    nav_visible: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed login. Credentials must already be verified.
    pub fn login(&mut self, username: &str) {
        self.current_user = username.to_string();
        self.is_admin = username == ADMIN_USERNAME;
        tracing::info!("[SESSION] {} logged in (admin: {})", username, self.is_admin);
    }

    pub fn logout(&mut self) {
        if !self.current_user.is_empty() {
            tracing::info!("[SESSION] {} logged out", self.current_user);
        }
        self.current_user.clear();
        self.is_admin = false;
        self.nav_visible = false;
    }

    /// Whether admin-only actions may be offered
    pub fn is_authorized(&self) -> bool {
        self.is_admin
    }

    pub fn set_nav_visible(&mut self, visible: bool) {
        self.nav_visible = visible;
    }

    pub fn nav_visible(&self) -> bool {
        self.nav_visible
    }

    /// Empty when nobody is logged in
    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    pub fn is_logged_in(&self) -> bool {
        !self.current_user.is_empty()
    }
}
