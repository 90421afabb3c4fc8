mod handlers;
mod models;
mod errors;
mod routes;

pub use handlers::*;
pub use models::*;
pub use errors::ApiError;
pub use routes::routes;
