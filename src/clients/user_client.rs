use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, Instrument};

use crate::collaborators::{AuthState, Logger, LoginEvents, Navigator};
use crate::domain::{Preference, SignupRole, User, UserId, UserQuery};
use crate::error::{ClientResult, UserClientError};
use crate::resource::{Entity, ResourceClient};
use crate::transport::{HttpResponse, Transport};

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }
}

/// Client for the user service.
///
/// Operations returning a `ClientResult` leave error handling to the caller.
/// The sign-up and preference flows instead report failures to the
/// [`Logger`] and return nothing.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
    navigator: Arc<dyn Navigator>,
    logger: Arc<dyn Logger>,
    auth: AuthState,
    login_events: LoginEvents,
}

impl UserClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        navigator: Arc<dyn Navigator>,
        logger: Arc<dyn Logger>,
        auth: AuthState,
        login_events: LoginEvents,
    ) -> Self {
        Self {
            inner: ResourceClient::new(transport, base_url),
            navigator,
            logger,
            auth,
            login_events,
        }
    }

    /// Login events fed by successful sign-ups.
    pub fn login_events(&self) -> &LoginEvents {
        &self.login_events
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    // --- Reads ---

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.query_users(UserQuery::All).await
    }

    #[instrument(skip(self))]
    pub async fn query_users(&self, query: UserQuery) -> ClientResult<Vec<User>> {
        debug!("Sending request");
        self.inner.list(&query.suffix()).await
    }

    pub async fn riders_for_location(&self, location: &str) -> ClientResult<Vec<User>> {
        self.query_users(UserQuery::RidersAtLocation(location.to_string())).await
    }

    pub async fn drivers_for_location(&self, location: &str) -> ClientResult<Vec<User>> {
        self.query_users(UserQuery::DriversAtLocation(location.to_string())).await
    }

    pub async fn riders_for_batch(&self, batch: u32) -> ClientResult<Vec<User>> {
        self.query_users(UserQuery::Batch(batch)).await
    }

    /// Fails with `NotFound` on 404.
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ClientResult<User> {
        debug!("Sending request");
        self.inner.get(&user_id).await
    }

    /// Same resource as [`get_user`](Self::get_user), returned untyped.
    #[instrument(skip(self))]
    pub async fn get_driver(&self, user_id: UserId) -> ClientResult<Value> {
        debug!("Sending request");
        self.inner.get_as(&user_id).await
    }

    // --- Writes returning the outcome ---

    #[instrument(skip(self, user))]
    pub async fn add_user(&self, user: &User) -> ClientResult<User> {
        debug!("Sending request");
        self.inner.create(user).await
    }

    /// PUT the whole record to the collection URL.
    #[instrument(skip(self, user), fields(user_id = ?user.user_id))]
    pub async fn update_user_info(&self, user: &User) -> ClientResult<HttpResponse> {
        debug!("Sending request");
        self.inner.write(Method::PUT, "", user).await
    }

    /// PUT an arbitrary payload to the user named by its `userId` field.
    #[instrument(skip(self, data))]
    pub async fn change_driver_is_accepting(&self, data: &Value) -> ClientResult<HttpResponse> {
        let user_id = payload_user_id(data)?;
        debug!(user_id = %user_id, "Sending request");
        self.inner.write(Method::PUT, &user_id, data).await
    }

    // --- Side-effecting flows ---

    /// Register `user` as a fresh account and log them in.
    ///
    /// The submitted record is always active, not a driver and not accepting
    /// rides. On success the stored user becomes the current user, is
    /// announced on [`login_events`](Self::login_events) and the navigator is
    /// sent to the role's landing route. Failures are logged only.
    #[instrument(skip(self, user))]
    pub async fn create_driver(&self, mut user: User, role: SignupRole) {
        user.prepare_for_signup();
        debug!(?user, "Sending request");

        match self.inner.create(&user).await {
            Ok(created) => {
                self.auth.set_current_user(created.clone()).await;
                self.login_events.emit(created);
                self.navigator.navigate_to(role.landing_route());
            }
            Err(e) => self.logger.error(&e.to_string()),
        }
    }

    /// Switch the driver role of a stored user; they accept rides exactly when
    /// active. Failures of either step are logged and nothing is rolled back.
    #[instrument(skip(self))]
    pub async fn set_is_driver(&self, user_id: UserId, is_driver: bool) {
        let mut user = match self.inner.get(&user_id).await {
            Ok(user) => user,
            Err(e) => {
                self.logger.error(&e.to_string());
                return;
            }
        };
        user.set_driver(is_driver);

        match self.write_back(user_id, user).await {
            Ok(stored) => {
                match serde_json::to_string(&stored) {
                    Ok(json) => self.logger.info(&json),
                    Err(e) => self.logger.warn(&e.to_string()),
                }
                self.auth.set_current_user(stored).await;
            }
            Err(e) => self.logger.error(&e.to_string()),
        }
    }

    /// Change one ride preference of a stored user.
    ///
    /// A failed fetch is logged as an error, a failed write as a warning.
    #[instrument(skip(self))]
    pub async fn set_preference(&self, user_id: UserId, preference: Preference) {
        let mut user = match self.inner.get(&user_id).await {
            Ok(user) => user,
            Err(e) => {
                self.logger.error(&e.to_string());
                return;
            }
        };
        user.apply_preference(preference);
        debug!(field = preference.field(), value = preference.value(), "Sending request");

        match self.write_back(user_id, user).await {
            Ok(stored) => self.auth.set_current_user(stored).await,
            Err(e) => self.logger.warn(&e.to_string()),
        }
    }

    /// PUT the user to its own URL without waiting for the answer.
    ///
    /// The request runs on a spawned task, so this must be called from within
    /// a tokio runtime. The outcome is discarded: neither success nor failure
    /// is logged or returned. The handle is only useful to wait for the
    /// request to settle.
    #[instrument(skip(self, user), fields(user_id = ?user.user_id))]
    pub fn ban_user(&self, user: &User) -> JoinHandle<()> {
        let inner = self.inner.clone();
        let user = user.clone();
        tokio::spawn(
            async move {
                let Some(user_id) = user.id() else {
                    debug!("User has no id, nothing to ban");
                    return;
                };
                let _ = inner.write(Method::PUT, &user_id.to_string(), &user).await;
            }
            .in_current_span(),
        )
    }

    /// PUT a locally modified user back and return the stored version.
    ///
    /// The server's echo wins; an empty success body means the local copy was
    /// stored as sent. A malformed echo is only worth a warning, the write
    /// itself succeeded.
    async fn write_back(&self, user_id: UserId, user: User) -> ClientResult<User> {
        match self.inner.replace(&user_id, &user).await {
            Ok(Some(stored)) => Ok(stored),
            Ok(None) => Ok(user),
            Err(UserClientError::Decode(message)) => {
                self.logger.warn(&format!("Stored user {user_id} echoed an unreadable body: {message}"));
                Ok(user)
            }
            Err(e) => Err(e),
        }
    }
}

fn payload_user_id(data: &Value) -> ClientResult<String> {
    match data.get("userId") {
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(UserClientError::InvalidRequest("payload has no userId".to_string())),
    }
}
