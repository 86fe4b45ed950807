pub mod events;
pub mod models;
pub mod services;

pub use models::{Notification, NotificationCategory};
pub use services::notification_service::NotificationStore;
