//! Project records and their follow-up calls.
//!
//! A [`Project`] is handed out by [`Deepgram::projects`](crate::Deepgram::projects)
//! or [`Deepgram::project`](crate::Deepgram::project) and carries its own
//! handle back to the API, so keys, members, invitations, usage, and balances
//! can be fetched directly from the record. Those follow-ups live in their
//! resource modules; this module owns the project lifecycle itself.

mod types;

pub use types::ProjectUpdate;
pub(crate) use types::{ProjectData, ProjectsEnvelope};

use crate::client::Deepgram;
use crate::Result;

/// A Deepgram project.
#[derive(Debug, Clone)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    pub company: Option<String>,
    client: Deepgram,
}

impl Project {
    pub(crate) fn new(data: ProjectData, client: Deepgram) -> Self {
        Self {
            project_id: data.project_id,
            name: data.name,
            company: data.company,
            client,
        }
    }

    pub(crate) fn client(&self) -> &Deepgram {
        &self.client
    }

    /// Update the project metadata.
    ///
    /// Only the fields set on `update` are sent; an empty update is a no-op.
    /// The record's own fields are refreshed on success.
    ///
    /// `PATCH /projects/{project_id}`
    pub async fn update(&mut self, update: &ProjectUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }

        let body = serde_json::to_value(update)?;
        self.client
            .transport()
            .patch(&["projects", &self.project_id], &body)
            .await?;

        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(company) = &update.company {
            self.company = Some(company.clone());
        }

        Ok(())
    }

    /// Delete the project.
    ///
    /// `DELETE /projects/{project_id}`
    pub async fn delete(self) -> Result<()> {
        self.client
            .transport()
            .delete(&["projects", &self.project_id])
            .await?;
        Ok(())
    }

    /// Leave the project, removing the authenticated account from it.
    ///
    /// `DELETE /projects/{project_id}/leave`
    pub async fn leave(self) -> Result<()> {
        self.client
            .transport()
            .delete(&["projects", &self.project_id, "leave"])
            .await?;
        Ok(())
    }
}
