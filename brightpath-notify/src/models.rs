use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationCategory {
    FormSubmitted,
    ReviewApproved,
    ConsultationScheduled,
    EnrollmentConfirmed,
    General,
}

/// One entry in a user's event log.
///
/// Ids are the creation time in milliseconds: unique within a user's
/// collection as long as creates stay at most one per millisecond, which
/// is an accepted limitation of the scheme. Downstream ordering leans on
/// ids growing with creation time, so do not swap in random ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: String,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
