//! User API
//!
//! Accounts, credential checks and notification inboxes.

use super::ApiClient;
use crate::shared::models::User;

#[derive(Debug, Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Vec<User> {
        let request = self.api.get(self.api.endpoint(&["users"]));
        self.api.fetch_or("getUsers", Vec::new(), request).await
    }

    pub async fn get(&self, username: &str) -> Option<User> {
        let request = self.api.get(self.api.endpoint(&["users", username]));
        self.api
            .fetch_or(&format!("getUser username={}", username), None, request)
            .await
    }

    /// The account matching both credentials, `None` otherwise.
    ///
    /// Unknown users and wrong passwords are not distinguished.
    pub async fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        let request = self.api.get(self.api.endpoint(&["users", username, password]));
        self.api
            .fetch_or(&format!("authenticate username={}", username), None, request)
            .await
    }

    pub async fn notifications_for(&self, username: &str) -> Vec<String> {
        let request = self
            .api
            .get(self.api.endpoint(&["users", "notifications", username]));
        self.api
            .fetch_or(&format!("getNotifications username={}", username), Vec::new(), request)
            .await
    }

    /// Register a new account; `None` when the username is taken
    pub async fn add(&self, user: &User) -> Option<User> {
        let request = self.api.post(self.api.endpoint(&["users"])).json(user);
        self.api
            .fetch_or(&format!("addUser username={}", user.username), None, request)
            .await
    }

    /// Post a notification to the administrator's inbox. The backend reads
    /// the body as raw text.
    pub async fn add_notification(&self, text: &str) -> bool {
        let request = self
            .api
            .post(self.api.endpoint(&["users", "notifications"]))
            .body(text.to_string());
        self.api.send_ok("addNotification", request).await
    }

    pub async fn delete_notification(&self, text: &str) -> bool {
        let request = self
            .api
            .delete(self.api.endpoint(&["users", "notifications", text]));
        self.api.send_ok("deleteNotification", request).await
    }
}
