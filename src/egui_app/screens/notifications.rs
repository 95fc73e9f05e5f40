//! Notification inbox screen

use super::require_admin;
use crate::egui_app::effects::Effects;
use crate::egui_app::session::Session;
use crate::shared::event::AppEvent;

#[derive(Debug, Default)]
pub struct NotificationsScreen {
    pub notifications: Vec<String>,
    pub message: String,
}

impl NotificationsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, fx: &Effects, username: &str) {
        let users = fx.backend().users.clone();
        let username = username.to_string();
        fx.spawn(async move {
            AppEvent::NotificationsLoaded(users.notifications_for(&username).await)
        });
    }

    pub fn on_loaded(&mut self, notifications: Vec<String>) {
        self.notifications = notifications;
    }

    /// Dismiss a notification (administrator only)
    pub fn delete(&mut self, fx: &Effects, session: &Session, text: &str) {
        if !require_admin(session, &mut self.message) {
            return;
        }
        remove_first(&mut self.notifications, text);
        let users = fx.backend().users.clone();
        let text = text.to_string();
        fx.detach(async move {
            users.delete_notification(&text).await;
        });
    }

    pub fn is_admin(&self, session: &Session) -> bool {
        session.is_authorized()
    }
}

/// Identical notifications are separate entries; only one goes per dismissal.
fn remove_first(notifications: &mut Vec<String>, text: &str) -> bool {
    match notifications.iter().position(|n| n == text) {
        Some(index) => {
            notifications.remove(index);
            true
        }
        None => false,
    }
}
