pub mod config;
pub mod error;
pub mod models;
pub mod notification;
pub mod store;

// Producer templates are called by module path: `templates::request_approved(..)`.
pub mod templates;

pub use config::*;
pub use error::*;
pub use models::*;
pub use notification::*;
pub use store::*;
