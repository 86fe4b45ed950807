pub mod clients;
pub mod errors;
pub mod logging;
pub mod storage;
pub mod types;

pub use errors::{AppError, AppResult};
pub use types::*;
