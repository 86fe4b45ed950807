use serde_json::json;

use brightpath_shared::errors::AppResult;
use brightpath_shared::types::form::FormKind;

use crate::models::NotificationCategory;
use crate::services::notification_service::NotificationStore;

/// Fixed (category, title, message) triple for each known form.
fn form_template(kind: FormKind) -> (NotificationCategory, &'static str, &'static str) {
    match kind {
        FormKind::Enrollment => (
            NotificationCategory::EnrollmentConfirmed,
            "Enrollment received",
            "Thank you for enrolling. Our admissions team will contact you shortly.",
        ),
        FormKind::Consultation => (
            NotificationCategory::ConsultationScheduled,
            "Consultation requested",
            "Your consultation request has been received. We will confirm a time soon.",
        ),
        FormKind::Contact => (
            NotificationCategory::FormSubmitted,
            "Message received",
            "Thanks for reaching out. We will get back to you shortly.",
        ),
        FormKind::Newsletter => (
            NotificationCategory::FormSubmitted,
            "Newsletter subscription confirmed",
            "You are now subscribed to the Brightpath newsletter.",
        ),
    }
}

impl NotificationStore {
    /// Record a notification for a submitted form.
    ///
    /// Unknown form-type tags create no record and return `Ok(None)`;
    /// the submission itself already reached the backend, so the gap is
    /// deliberate rather than an error.
    pub fn notify_form_submission(
        &self,
        user_id: &str,
        form_type: &str,
        form_data: serde_json::Value,
    ) -> AppResult<Option<i64>> {
        let Some(kind) = FormKind::from_tag(form_type) else {
            tracing::debug!(form_type = %form_type, "no notification template for form type");
            return Ok(None);
        };

        let (category, title, message) = form_template(kind);
        let payload = json!({
            "form_type": form_type,
            "submission_data": form_data,
        });

        let id = self.create(user_id, category, title, message, Some(payload))?;
        Ok(Some(id))
    }

    /// Record a notification for an approved review; payload carries the
    /// review as the backend sent it.
    pub fn notify_review_approved(
        &self,
        user_id: &str,
        review_data: serde_json::Value,
    ) -> AppResult<i64> {
        self.create(
            user_id,
            NotificationCategory::ReviewApproved,
            "Review approved",
            "Your review has been approved and is now visible on the site.",
            Some(review_data),
        )
    }
}
