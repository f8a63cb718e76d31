use crate::core::session::SessionStore;
use crate::utils::error::{ClientError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Request wrapper around `reqwest` that injects the bearer credential from
/// the session store and classifies HTTP-level failures.
///
/// An unauthorized response clears the session store and invokes the
/// registered hook; navigation (or any other reaction) is the subscriber's
/// decision, not the wrapper's.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
    session: SessionStore,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: SessionStore) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base: Url::parse(base_url)?,
            session,
            on_unauthorized: None,
        })
    }

    pub fn with_timeout(base_url: &str, session: SessionStore, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base: Url::parse(base_url)?,
            session,
            on_unauthorized: None,
        })
    }

    /// Registers the callback invoked after an unauthorized response has
    /// cleared the session store.
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Performs an authenticated call and parses the JSON response.
    ///
    /// Unauthorized responses clear the session store, fire the hook and fail
    /// with [`ClientError::SessionExpired`]; any other non-success status
    /// fails with [`ClientError::Http`] carrying the raw body text.
    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body, true).await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::error!("Request failed with status {}: {}", status, text);

            if status == StatusCode::UNAUTHORIZED {
                self.session.clear();
                if let Some(hook) = &self.on_unauthorized {
                    hook();
                }
                return Err(ClientError::SessionExpired);
            }

            return Err(ClientError::Http {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(response.json().await?)
    }

    /// Performs a call without credential injection, for public endpoints
    /// such as login. A 401 here means bad input, not an expired session, so
    /// no session side effects occur.
    pub async fn request_public<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body, false).await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::error!("Request failed with status {}: {}", status, text);
            return Err(ClientError::Http {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &text),
            });
        }

        Ok(response.json().await?)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        authenticated: bool,
    ) -> Result<Response> {
        let url = self.base.join(path)?;
        tracing::debug!("Making {} request to: {}", method, url);

        let mut request = self.client.request(method.clone(), url);

        // Content type only for requests that may carry a body.
        if method != Method::GET {
            request = request.header(CONTENT_TYPE, "application/json");
        }

        if authenticated {
            if let Some(token) = self.session.token() {
                request = request.bearer_auth(token);
            }
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());
        Ok(response)
    }
}

/// Best-effort extraction of the server's `{"message": ...}` from an error
/// body, falling back to the body text or the status reason.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    if body.trim().is_empty() {
        StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}

/// Internal helper for deserializing error bodies.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
