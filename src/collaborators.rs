//! Collaborators the composing application hands to `UserClient`.

use std::sync::{Arc, Mutex};

use tokio::sync::{mpsc, RwLock};

use crate::domain::{Route, User};

/// Client-side navigation.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: Route);
}

/// Sink for operational messages from side-effecting operations.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Logger that forwards to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "user_client", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "user_client", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "user_client", "{message}");
    }
}

/// Shared holder for the currently authenticated user.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    current: Arc<RwLock<Option<User>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_current_user(&self, user: User) {
        *self.current.write().await = Some(user);
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }
}

/// Fan-out channel announcing users that just logged in.
///
/// Every subscriber owns an unbounded queue, so no event is dropped however
/// far behind it falls. Subscribers only see events published after they
/// subscribed; nothing is replayed. Dropped receivers are pruned on the next
/// emit.
#[derive(Debug, Clone, Default)]
pub struct LoginEvents {
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<User>>>>,
}

impl LoginEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<User> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.lock().push(sender);
        receiver
    }

    /// Publish to current subscribers; returns how many received it.
    pub fn emit(&self, user: User) -> usize {
        let mut subscribers = self.lock();
        subscribers.retain(|sender| sender.send(user.clone()).is_ok());
        subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.lock();
        subscribers.retain(|sender| !sender.is_closed());
        subscribers.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<mpsc::UnboundedSender<User>>> {
        // Every mutation is a single push or retain, so a poisoned list is still consistent.
        self.subscribers.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
