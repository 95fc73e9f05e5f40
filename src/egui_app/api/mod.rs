//! Backend API Client
//!
//! Every backend call goes through [`ApiClient`]. It builds endpoint URLs,
//! sends JSON requests, checks the status, decodes the body, and owns the one
//! place where a failure is logged and replaced by a fallback value
//! ([`ApiClient::fetch_or`], [`ApiClient::send_ok`]). Services built on top
//! therefore never return errors to their callers.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::shared::config::{AppConfig, ConfigError};
use crate::shared::error::ApiError;

pub mod baskets;
pub mod pets;
pub mod users;

pub use baskets::BasketService;
pub use pets::PetService;
pub use users::UserService;

/// Shared HTTP client bound to the configured backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: Client::new(),
            base: config.base_url()?,
        })
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment
    pub fn endpoint<S: AsRef<str>>(&self, segments: &[S]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
    }

    pub fn get(&self, url: Url) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    pub fn post(&self, url: Url) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    pub fn put(&self, url: Url) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    pub fn delete(&self, url: Url) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    /// Send a request and decode its JSON body
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(redact)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(status.as_u16()));
        }
        let body = response.bytes().await.map_err(redact)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a request whose response body is irrelevant
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await.map_err(redact)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(status.as_u16()));
        }
        Ok(())
    }

    /// Decode the response, or log and return `fallback` on any failure
    pub async fn fetch_or<T: DeserializeOwned>(
        &self,
        operation: &str,
        fallback: T,
        request: RequestBuilder,
    ) -> T {
        recover(operation, fallback, self.execute(request).await)
    }

    /// `true` when the backend accepted the request, `false` on any failure
    pub async fn send_ok(&self, operation: &str, request: RequestBuilder) -> bool {
        recover(operation, false, self.execute_empty(request).await.map(|()| true))
    }
}

/// The three backend collaborators, sharing one HTTP client
#[derive(Debug, Clone)]
pub struct Backend {
    pub pets: PetService,
    pub baskets: BasketService,
    pub users: UserService,
}

impl Backend {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let api = ApiClient::new(config)?;
        Ok(Self {
            pets: PetService::new(api.clone()),
            baskets: BasketService::new(api.clone()),
            users: UserService::new(api),
        })
    }
}

/// Drop the URL from transport errors before they reach the logs
fn redact(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.without_url())
}

/// Replace a failed result by `fallback`, logging the failure
pub fn recover<T>(operation: &str, fallback: T, result: Result<T, ApiError>) -> T {
    match result {
        Ok(value) => {
            tracing::debug!("[API] {} succeeded", operation);
            value
        }
        Err(e) => {
            tracing::warn!("[API] {} failed: {}", operation, e);
            fallback
        }
    }
}
