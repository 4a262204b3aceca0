use std::sync::Arc;

use tracing::info;

use crate::clients::UserClient;
use crate::collaborators::{AuthState, Logger, LoginEvents, Navigator, TracingLogger};
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::transport::{ReqwestTransport, Transport};

/// Composition root: wires the transport and collaborators into a `UserClient`.
///
/// The auth holder and login channel are created here and shared with the
/// client so the rest of the application can read and subscribe to them.
pub struct UserSystem {
    pub user_client: UserClient,
    pub auth: AuthState,
    pub login_events: LoginEvents,
}

impl UserSystem {
    /// Build against the real user service described by `config`.
    pub fn from_config(config: &ClientConfig, navigator: Arc<dyn Navigator>) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport), navigator, Arc::new(TracingLogger)))
    }

    pub fn with_transport(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        info!(user_uri = %config.user_uri, "Starting user system");
        let auth = AuthState::new();
        let login_events = LoginEvents::new();
        let user_client = UserClient::new(
            transport,
            config.user_uri.clone(),
            navigator,
            logger,
            auth.clone(),
            login_events.clone(),
        );

        Self { user_client, auth, login_events }
    }
}
