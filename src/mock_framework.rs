//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_transport`] to get a transport and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_put`] to assert the
//! request and answer it through the returned responder.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use tokio::sync::{mpsc, oneshot};

use crate::collaborators::{Logger, Navigator};
use crate::domain::Route;
use crate::error::{ClientResult, UserClientError};
use crate::transport::{HttpRequest, HttpResponse, Transport};

pub type Responder = oneshot::Sender<ClientResult<HttpResponse>>;

/// A request captured by [`ChannelTransport`], waiting for the test to answer.
#[derive(Debug)]
pub struct TransportRequest {
    pub request: HttpRequest,
    pub respond_to: Responder,
}

/// Transport that forwards every request to a channel the test controls.
#[derive(Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<TransportRequest>,
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        let url = request.url.clone();
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TransportRequest { request, respond_to })
            .await
            .map_err(|_| UserClientError::Network { url: url.clone(), message: "Mock transport closed".to_string() })?;
        response
            .await
            .map_err(|_| UserClientError::Network { url, message: "Mock responder dropped".to_string() })?
    }
}

/// Creates a mock transport and a receiver for asserting requests.
///
/// # Testing Strategy
/// Clients are exercised without a server: every request lands on `receiver`,
/// the test inspects it and answers with a status and body (or a network
/// failure), which keeps multi-step flows deterministic.
pub fn create_mock_transport(buffer_size: usize) -> (ChannelTransport, mpsc::Receiver<TransportRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelTransport { sender }, receiver)
}

/// Helper to verify that the next request uses `method`
pub async fn expect_request(receiver: &mut mpsc::Receiver<TransportRequest>, method: Method) -> Option<(HttpRequest, Responder)> {
    match receiver.recv().await {
        Some(TransportRequest { request, respond_to }) if request.method == method => Some((request, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a GET
pub async fn expect_get(receiver: &mut mpsc::Receiver<TransportRequest>) -> Option<(HttpRequest, Responder)> {
    expect_request(receiver, Method::GET).await
}

/// Helper to verify that the next request is a POST
pub async fn expect_post(receiver: &mut mpsc::Receiver<TransportRequest>) -> Option<(HttpRequest, Responder)> {
    expect_request(receiver, Method::POST).await
}

/// Helper to verify that the next request is a PUT
pub async fn expect_put(receiver: &mut mpsc::Receiver<TransportRequest>) -> Option<(HttpRequest, Responder)> {
    expect_request(receiver, Method::PUT).await
}

pub fn ok_json(body: serde_json::Value) -> ClientResult<HttpResponse> {
    Ok(HttpResponse::new(StatusCode::OK, body.to_string()))
}

pub fn status(status: StatusCode) -> ClientResult<HttpResponse> {
    Ok(HttpResponse::new(status, ""))
}

pub fn network_failure(url: &str) -> ClientResult<HttpResponse> {
    Err(UserClientError::Network { url: url.to_string(), message: "connection refused".to_string() })
}

/// Navigator that records every route it is sent to.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Logger that keeps every message for later assertions.
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn at(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.entries.lock().unwrap().push((level, message.to_string()));
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport() {
        let (transport, mut receiver) = create_mock_transport(10);

        let task = tokio::spawn(async move { transport.send(HttpRequest::get("http://svc/users/1")).await });

        let (request, responder) = expect_get(&mut receiver).await.expect("Expected GET request");
        assert_eq!(request.url, "http://svc/users/1");
        responder.send(ok_json(serde_json::json!({ "userId": 1 }))).unwrap();

        let response = task.await.unwrap().unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, r#"{"userId":1}"#);
    }

    #[tokio::test]
    async fn test_dropped_responder_is_network_error() {
        let (transport, mut receiver) = create_mock_transport(10);
        let task = tokio::spawn(async move { transport.send(HttpRequest::get("http://svc/users/")).await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected GET request");
        drop(responder);

        assert!(task.await.unwrap().unwrap_err().is_network());
    }
}
