use std::sync::Arc;

use ride_user_client::{setup_tracing, ClientConfig, Navigator, Route, UserSystem};
use tracing::{error, info, Instrument};

/// Headless runs have no router; navigation requests are only recorded in the log.
struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_to(&self, route: Route) {
        info!(%route, "Navigation requested");
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ClientConfig::from_env().map_err(|e| e.to_string())?;
    let system = UserSystem::from_config(&config, Arc::new(LogNavigator)).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("list_users");
    let result = async {
        info!("Listing users");
        system.user_client.list_users().await
    }
    .instrument(span)
    .await;

    match result {
        Ok(users) => {
            let drivers = users.iter().filter(|u| u.is_driver).count();
            info!(total = users.len(), drivers, "Users listed successfully");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, network = e.is_network(), "Listing users failed");
            Err(e.to_string())
        }
    }
}
