//! # Ride User Client
//!
//! Async client for the ride-sharing user service: user CRUD, driver role and
//! ride-preference changes, bans, location and batch listings, plus a
//! login-event feed announcing users that just signed up and logged in.
//!
//! ## Pieces
//!
//! - **Domain types** - the `User` record and the typed queries, preferences and routes → [`domain`]
//! - **Transport seam** - requests go through a [`Transport`]; [`ReqwestTransport`] in production
//! - **Resource client** - URL building and JSON handling for one collection → [`ResourceClient`]
//! - **Collaborators** - navigation, logging sink, current-user holder, login events → [`collaborators`]
//! - **User client** - the operations themselves → [`UserClient`]
//! - **System** - wiring from [`ClientConfig`] and tracing setup → [`UserSystem`], [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use ride_user_client::{ClientConfig, Navigator, Route, UserSystem};
//! # struct Router;
//! # impl Navigator for Router { fn navigate_to(&self, _route: Route) {} }
//! # async fn run() -> ride_user_client::ClientResult<()> {
//! let config = ClientConfig::from_env()?;
//! let system = UserSystem::from_config(&config, Arc::new(Router))?;
//! let mut logins = system.login_events.subscribe();
//!
//! let drivers = system.user_client.drivers_for_location("NYC").await?;
//! # let _ = (drivers, logins.try_recv());
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod clients;
pub mod collaborators;
pub mod config;
pub mod domain;
pub mod error;
pub mod resource;
pub mod transport;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, UserSystem};
pub use clients::UserClient;
pub use collaborators::{AuthState, Logger, LoginEvents, Navigator, TracingLogger};
pub use config::ClientConfig;
pub use domain::{Preference, Route, SignupRole, User, UserId, UserQuery};
pub use error::{ClientResult, UserClientError};
pub use resource::{Entity, ResourceClient};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
