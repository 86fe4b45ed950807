use brightpath_notify::NotificationStore;
use brightpath_shared::clients::backend::BackendClient;
use brightpath_shared::errors::AppResult;
use brightpath_shared::types::form::FormSubmission;

/// Submit a form to the backend, then record the matching notification
/// for the signed-in user.
///
/// The notification write is best-effort: once the backend accepted the
/// submission, a failed local write is logged and reported as `Ok(None)`
/// rather than undoing anything. Returns the notification id when one
/// was created.
pub async fn submit_form(
    backend: &BackendClient,
    store: &NotificationStore,
    user_id: &str,
    submission: FormSubmission,
) -> AppResult<Option<i64>> {
    backend.submit_form(&submission).await?;

    let FormSubmission { form_type, fields } = submission;
    match store.notify_form_submission(user_id, &form_type, fields) {
        Ok(id) => Ok(id),
        Err(e) => {
            tracing::error!(
                error = %e,
                form_type = %form_type,
                "form submitted but notification write failed"
            );
            Ok(None)
        }
    }
}
