//! Request history and usage reporting for a project.

mod types;

pub use types::{
    FieldsOptions, RequestOptions, Resolution, UsageFields, UsageModel, UsageOptions,
    UsageRequest, UsageRequests, UsageResult, UsageSummary,
};

use crate::projects::Project;
use crate::Result;

impl Project {
    /// List the transcription requests made by this project.
    ///
    /// `GET /projects/{project_id}/requests`
    pub async fn requests(&self, options: &RequestOptions) -> Result<UsageRequests> {
        let value = self
            .client()
            .transport()
            .get(
                &["projects", &self.project_id, "requests"],
                &options.to_query(),
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Retrieve one request by id.
    ///
    /// `GET /projects/{project_id}/requests/{request_id}`
    pub async fn request(&self, request_id: &str) -> Result<UsageRequest> {
        let value = self
            .client()
            .transport()
            .get(&["projects", &self.project_id, "requests", request_id], &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Summarize usage over a period, optionally filtered by feature.
    ///
    /// `GET /projects/{project_id}/usage`
    pub async fn usage(&self, options: &UsageOptions) -> Result<UsageSummary> {
        let value = self
            .client()
            .transport()
            .get(&["projects", &self.project_id, "usage"], &options.to_query())
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// List the features, models, tags, and languages that appear in this
    /// project's usage over a period.
    ///
    /// `GET /projects/{project_id}/usage/fields`
    pub async fn usage_fields(&self, options: &FieldsOptions) -> Result<UsageFields> {
        let value = self
            .client()
            .transport()
            .get(
                &["projects", &self.project_id, "usage", "fields"],
                &options.to_query(),
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
