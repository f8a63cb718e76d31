use crate::core::http::ApiClient;
use crate::domain::model::SessionUser;
use crate::utils::error::{ClientError, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/api/auth/login";

/// Login entry point of the web frontend; surfaced to unauthorized-hook
/// subscribers that want to send the user somewhere to re-authenticate.
pub const LOGIN_PAGE: &str = "/login";

/// Session lifecycle operations. Login goes through the public request path
/// so a rejected credential surfaces as the server's own message instead of
/// a session-expiry.
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticates and stores the issued token and user record in the
    /// session store.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser> {
        let mut missing = Vec::new();
        if email.trim().is_empty() {
            missing.push("email".to_string());
        }
        if password.trim().is_empty() {
            missing.push("password".to_string());
        }
        if !missing.is_empty() {
            return Err(ClientError::MissingFields(missing));
        }

        tracing::debug!("Logging in as {}", email);
        let response: LoginResponse = self
            .client
            .request_public(Method::POST, LOGIN_PATH, Some(&LoginRequest { email, password }))
            .await?;

        self.client
            .session()
            .store(response.token, response.user.clone());
        tracing::info!("Logged in as {} ({})", response.user.name, response.user.role);
        Ok(response.user)
    }

    /// Drops the stored credential and user record.
    pub fn logout(&self) {
        self.client.session().clear();
        tracing::info!("Logged out");
    }
}

/// Internal helper for serializing the login payload.
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Internal helper for deserializing the login response.
#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: SessionUser,
}
