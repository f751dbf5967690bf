pub mod handlers;
mod error;
mod http;
mod templates;

pub use error::ApiError;
pub use http::*;
