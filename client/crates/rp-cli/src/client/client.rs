use crate::client::{
    CliClientResult, ClientError, Resource, validate_login_form, validate_signup_form,
};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the rapport content API.
///
/// Holds no session state: the bearer credential is passed in per call so it
/// is always read fresh from the session manager.
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://127.0.0.1:5000/api")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build a request, attaching `Authorization: Bearer` when a credential is given
    fn request(
        &self,
        method: Method,
        path: &str,
        credential: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        let req = self.client.request(method, &url);

        match credential {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Build a request that must carry a credential
    #[track_caller]
    fn authorized(
        &self,
        method: Method,
        path: &str,
        credential: Option<&str>,
    ) -> CliClientResult<reqwest::RequestBuilder> {
        match credential {
            Some(token) if !token.is_empty() => Ok(self.request(method, path, Some(token))),
            _ => Err(ClientError::not_authenticated()),
        }
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|v| v.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange email and password for the raw login payload
    ///
    /// The payload is handed to the session manager as-is; its shape is not
    /// checked here.
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<Value> {
        validate_login_form(email, password)?;

        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/auth/login", None).json(&body);
        self.execute(req).await
    }

    /// Register a new account. Does not log in.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> CliClientResult<Value> {
        validate_signup_form(name, email, password)?;

        #[derive(Serialize)]
        struct SignupRequest<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let body = SignupRequest {
            name,
            email,
            password,
        };
        let req = self.request(Method::POST, "/auth/signup", None).json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Content Operations
    // =========================================================================

    /// List a collection. The credential is sent when present.
    pub async fn list(
        &self,
        resource: Resource,
        credential: Option<&str>,
    ) -> CliClientResult<Value> {
        let req = self.request(Method::GET, resource.path(), credential);
        self.execute(req).await
    }

    /// Create an item in a collection
    pub async fn create(
        &self,
        resource: Resource,
        body: &Value,
        credential: Option<&str>,
    ) -> CliClientResult<Value> {
        let req = self
            .authorized(Method::POST, resource.path(), credential)?
            .json(body);
        self.execute(req).await
    }

    /// Replace an item in a collection
    pub async fn update(
        &self,
        resource: Resource,
        id: &str,
        body: &Value,
        credential: Option<&str>,
    ) -> CliClientResult<Value> {
        let req = self
            .authorized(Method::PUT, &resource.item_path(id), credential)?
            .json(body);
        self.execute(req).await
    }

    /// Delete an item from a collection
    pub async fn delete(
        &self,
        resource: Resource,
        id: &str,
        credential: Option<&str>,
    ) -> CliClientResult<Value> {
        let req = self.authorized(Method::DELETE, &resource.item_path(id), credential)?;
        self.execute(req).await
    }
}
