//! Account creation screen

use crate::egui_app::effects::Effects;
use crate::egui_app::session::ADMIN_USERNAME;
use crate::egui_app::types::AppView;
use crate::shared::error::FormError;
use crate::shared::event::AppEvent;
use crate::shared::models::User;

#[derive(Debug, Default)]
pub struct CreateUserScreen {
    pub username_input: String,
    pub password_input: String,
    pub confirm_input: String,
    pub message: String,
    pub loading: bool,
}

impl CreateUserScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_form(&mut self, fx: &Effects) {
        let username = self.username_input.clone();
        let password = self.password_input.clone();
        let confirm = self.confirm_input.clone();
        self.submit(fx, &username, &password, &confirm);
    }

    pub fn submit(&mut self, fx: &Effects, username: &str, password: &str, confirm: &str) {
        let user = match validate(username, password, confirm) {
            Ok(user) => user,
            Err(e) => {
                self.message = e.to_string();
                return;
            }
        };
        self.message.clear();
        self.loading = true;

        let users = fx.backend().users.clone();
        fx.spawn(async move { AppEvent::UserCreated(users.add(&user).await) });
    }

    /// Apply the backend's answer; returns `Login` once the account exists
    pub fn on_created(&mut self, created: Option<User>) -> Option<AppView> {
        self.loading = false;
        match created {
            Some(user) => {
                tracing::info!("[APP] account {} created", user.username);
                *self = Self::default();
                Some(AppView::Login)
            }
            None => {
                self.message = FormError::UsernameTaken.to_string();
                None
            }
        }
    }
}

/// Check the form and build the account to register
fn validate(username: &str, password: &str, confirm: &str) -> Result<User, FormError> {
    if username.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(FormError::RequiredFields);
    }
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err(FormError::RequiredFields);
    }
    if username == ADMIN_USERNAME {
        return Err(FormError::ReservedUsername);
    }
    Ok(User::new(username, password))
}
