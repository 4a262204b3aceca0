//! HTTP transport seam.
//!
//! `UserClient` never touches `reqwest` directly; it hands fully built
//! [`HttpRequest`]s to a [`Transport`]. Production code uses
//! [`ReqwestTransport`], tests plug in the channel-backed transport from
//! `mock_framework`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ClientResult, UserClientError};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A request ready to be put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::GET, url: url.into(), headers: Vec::new(), body: None }
    }

    /// A write request carrying a JSON body.
    pub fn json(method: Method, url: impl Into<String>, body: String) -> Self {
        Self {
            method,
            url: url.into(),
            headers: vec![(CONTENT_TYPE.as_str().to_string(), JSON_CONTENT_TYPE.to_string())],
            body: Some(body),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A completed response, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_str(&self.body).map_err(|e| UserClientError::Decode(e.to_string()))
    }

    /// Like [`json`](Self::json), but an empty body is `None` rather than an error.
    pub fn json_opt<T: DeserializeOwned>(&self) -> ClientResult<Option<T>> {
        if self.body.trim().is_empty() {
            return Ok(None);
        }
        self.json().map(Some)
    }
}

/// Sends requests to the user service.
///
/// Implementations return `Err` only when no response was received; any
/// status code, including 4xx/5xx, comes back as `Ok(HttpResponse)`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport; `timeout` of `None` keeps reqwest's default (no timeout).
    pub fn new(timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| UserClientError::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        let HttpRequest { method, url, headers, body } = request;

        let mut builder = self.client.request(method, &url);
        for (name, value) in headers {
            let value = HeaderValue::from_str(&value)
                .map_err(|e| UserClientError::InvalidRequest(format!("header {name}: {e}")))?;
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let network_error = |e: reqwest::Error| UserClientError::Network {
            url: url.clone(),
            message: e.to_string(),
        };
        let response = builder.send().await.map_err(network_error)?;
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;

        Ok(HttpResponse { status, body })
    }
}
