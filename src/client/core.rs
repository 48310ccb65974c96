use std::sync::Arc;

use crate::client::builder::DeepgramBuilder;
use crate::projects::{self, Project};
use crate::transport::HttpTransport;
use crate::Result;

/// Handle to the Deepgram management API.
///
/// Cloning is cheap; all clones share one HTTP client, so records derived
/// from this handle can issue follow-up calls on their own.
#[derive(Clone)]
pub struct Deepgram {
    transport: Arc<HttpTransport>,
}

impl Deepgram {
    pub fn builder() -> DeepgramBuilder {
        DeepgramBuilder::new()
    }

    pub(crate) fn from_transport(transport: HttpTransport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub(crate) fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// List the projects the supplied API key has access to.
    ///
    /// `GET /projects`
    pub async fn projects(&self) -> Result<Vec<Project>> {
        let value = self.transport.get(&["projects"], &[]).await?;
        let envelope: projects::ProjectsEnvelope = serde_json::from_value(value)?;
        Ok(envelope
            .projects
            .into_iter()
            .map(|data| Project::new(data, self.clone()))
            .collect())
    }

    /// Retrieve basic information about one project.
    ///
    /// `GET /projects/{project_id}`
    pub async fn project(&self, project_id: &str) -> Result<Project> {
        let value = self.transport.get(&["projects", project_id], &[]).await?;
        let data: projects::ProjectData = serde_json::from_value(value)?;
        Ok(Project::new(data, self.clone()))
    }
}

impl std::fmt::Debug for Deepgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The transport holds the API key; never print it.
        f.debug_struct("Deepgram").finish_non_exhaustive()
    }
}
