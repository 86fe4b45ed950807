pub mod auth;
pub mod form;
pub mod review;

pub use auth::*;
pub use form::*;
pub use review::*;
