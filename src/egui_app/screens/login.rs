//! Login screen

use crate::egui_app::effects::Effects;
use crate::egui_app::session::Session;
use crate::egui_app::types::AppView;
use crate::shared::error::FormError;
use crate::shared::event::AppEvent;
use crate::shared::models::User;

#[derive(Debug, Default)]
pub struct LoginScreen {
    pub username_input: String,
    pub password_input: String,
    pub message: String,
    pub loading: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit whatever is in the form fields
    pub fn submit_form(&mut self, fx: &Effects) {
        let username = self.username_input.clone();
        let password = self.password_input.clone();
        self.submit(fx, &username, &password);
    }

    /// Ask the backend to verify the credentials. The session is only touched
    /// once the answer arrives (see [`LoginScreen::on_checked`]).
    pub fn submit(&mut self, fx: &Effects, username: &str, password: &str) {
        if self.loading {
            tracing::debug!("[APP] login already in progress");
            return;
        }
        if let Err(e) = validate(username, password) {
            self.message = e.to_string();
            return;
        }
        self.message.clear();
        self.loading = true;

        let users = fx.backend().users.clone();
        let username = username.to_string();
        let password = password.to_string();
        fx.spawn(async move {
            let user = users.authenticate(&username, &password).await;
            AppEvent::LoginChecked { user }
        });
    }

    /// Apply the authentication answer; returns where to go next on success
    pub fn on_checked(&mut self, session: &mut Session, user: Option<User>) -> Option<AppView> {
        self.loading = false;
        match user {
            Some(user) => {
                session.login(&user.username);
                session.set_nav_visible(true);
                self.password_input.clear();
                self.message.clear();
                Some(AppView::Dashboard)
            }
            None => {
                self.message = FormError::BadCredentials.to_string();
                None
            }
        }
    }
}

fn validate(username: &str, password: &str) -> Result<(), FormError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(FormError::RequiredFields);
    }
    Ok(())
}
