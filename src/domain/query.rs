/// Listing filters understood by the user service.
///
/// Each variant maps to a distinct resource path on the backend, so they are
/// kept apart rather than merged into one set of optional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    All,
    /// Riders (non-drivers) registered at a location.
    RidersAtLocation(String),
    /// Drivers closest to a location.
    DriversAtLocation(String),
    /// Available drivers of a batch.
    Batch(u32),
}

impl UserQuery {
    /// Suffix appended to the user resource base URL.
    pub fn suffix(&self) -> String {
        match self {
            UserQuery::All => String::new(),
            UserQuery::RidersAtLocation(location) => {
                format!("?is-driver=false&location={}", urlencoding::encode(location))
            }
            UserQuery::DriversAtLocation(location) => {
                format!("driver/{}", urlencoding::encode(location))
            }
            UserQuery::Batch(batch) => format!("?batch-num={batch}"),
        }
    }
}
