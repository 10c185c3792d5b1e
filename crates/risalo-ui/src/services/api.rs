//! HTTP client for the content API (REST).
//!
//! # Design
//! - One shared client per app, handed to features through context.
//! - Errors keep the HTTP status so callers can branch on it; transport
//!   failures carry status 0.

use gloo_net::http::{Request, Response};
use risalo_api_models::{ErrorBody, Page};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::fmt;

/// Failure from an API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code; 0 when the request never reached the server.
    pub status: u16,
    /// Human-readable reason, from the response `error` field when present.
    pub message: String,
}

impl ApiError {
    fn transport(detail: impl fmt::Display) -> Self {
        Self {
            status: 0,
            message: detail.to_string(),
        }
    }

    async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = ErrorBody::extract(&body)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Self { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (HTTP {})", self.message, self.status)
        }
    }
}

impl std::error::Error for ApiError {}

/// REST client for the content API.
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    // RefCell so the Rc-shared client can pick up a new token in place.
    token: RefCell<Option<String>>,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RefCell::new(None),
        }
    }

    /// Installs or clears the bearer token sent with every request.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    /// Fetches one page of a collection, e.g. `fetch_page("couplets", query)`.
    ///
    /// # Errors
    /// Returns the decoded server error or a transport failure.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &str,
    ) -> Result<Page<T>, ApiError> {
        self.get_json(&format!("/{collection}?{query}")).await
    }

    /// GET a JSON document.
    ///
    /// # Errors
    /// Returns the decoded server error or a transport failure.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Request::get(&self.url(path))).await?;
        read_json(response).await
    }

    /// POST a JSON body and decode the JSON reply.
    ///
    /// # Errors
    /// Returns the decoded server error or a transport failure.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(ApiError::transport)?;
        let response = self.send(request).await?;
        read_json(response).await
    }

    /// PUT a JSON body and decode the JSON reply. Partial updates go through
    /// here too; the patch types skip unset fields on serialisation.
    ///
    /// # Errors
    /// Returns the decoded server error or a transport failure.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::put(&self.url(path))
            .json(body)
            .map_err(ApiError::transport)?;
        let response = self.send(request).await?;
        read_json(response).await
    }

    /// DELETE a resource, ignoring any reply body.
    ///
    /// # Errors
    /// Returns the decoded server error or a transport failure.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Request::delete(&self.url(path))).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let token = self.token.borrow().clone();
        let request = match token {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        };
        request.send().await.map_err(ApiError::transport)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }
    response.json::<T>().await.map_err(ApiError::transport)
}
