//! HTTP client posting applications to the form collector.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::Form;
use tracing::{debug, warn};

use crate::domain::entities::{SubmissionPayload, SubmissionReceipt};
use crate::domain::errors::SubmissionError;
use crate::domain::ports::SubmissionPort;

/// Apps Script deployment feeding the club's Google Form.
pub const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbryt0WoVD_Ymz4OcjVxV9qc5DdrUKF-1QrN2og1zXtTKxpXyMy3FnUIvpck2zP6rv-HmCQ/exec";
const USER_AGENT: &str = concat!("jlm-apply/", env!("CARGO_PKG_VERSION"));

/// Form collector client.
pub struct FormEndpointClient {
    client: Client,
    endpoint_url: String,
}

impl FormEndpointClient {
    /// Creates client for the given collector URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_endpoint(
        endpoint_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SubmissionError::client(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }

    fn build_form(payload: &SubmissionPayload) -> Form {
        payload
            .entries()
            .iter()
            .fold(Form::new(), |form, (key, value)| {
                form.text(*key, value.clone())
            })
    }
}

#[async_trait]
impl SubmissionPort for FormEndpointClient {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        debug!(url = %self.endpoint_url, entries = payload.len(), "Posting application");

        let response = self
            .client
            .post(&self.endpoint_url)
            .multipart(Self::build_form(payload))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach form collector");
                if e.is_timeout() {
                    SubmissionError::Timeout
                } else if e.is_connect() {
                    SubmissionError::connection(e.to_string())
                } else {
                    SubmissionError::transport(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Form collector answered");

        Ok(SubmissionReceipt::new(status.as_u16()))
    }
}
