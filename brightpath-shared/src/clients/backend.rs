use crate::errors::AppResult;
use crate::types::form::FormSubmission;
use crate::types::review::Review;

/// Thin client for the institute backend.
///
/// Courses and form endpoints are treated as opaque JSON; only the
/// pending-review feed has a typed schema on this side.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_courses(&self) -> AppResult<Vec<serde_json::Value>> {
        let response = self
            .http
            .get(self.url("/courses"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn fetch_pending_reviews(&self) -> AppResult<Vec<Review>> {
        let response = self
            .http
            .get(self.url("/reviews/pending"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn submit_form(&self, submission: &FormSubmission) -> AppResult<()> {
        self.http
            .post(self.url("/forms"))
            .json(submission)
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!(form_type = %submission.form_type, "form submitted to backend");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = BackendClient::new("http://localhost:8000/api/");
        assert_eq!(client.url("/courses"), "http://localhost:8000/api/courses");
    }
}
