pub mod user;
pub mod route;
pub mod query;

pub use user::*;
pub use route::*;
pub use query::*;
