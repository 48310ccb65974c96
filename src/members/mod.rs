//! Project members and their scopes.

mod types;

pub(crate) use types::{MemberData, MembersEnvelope, ScopesEnvelope};

use crate::client::Deepgram;
use crate::projects::Project;
use crate::Result;

/// An account with access to a project.
#[derive(Debug, Clone)]
pub struct Member {
    pub member_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Scopes as reported by the member listing.
    pub scopes: Vec<String>,
    project_id: String,
    client: Deepgram,
}

impl Member {
    pub(crate) fn new(data: MemberData, project_id: String, client: Deepgram) -> Self {
        Self {
            member_id: data.member_id,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            scopes: data.scopes,
            project_id,
            client,
        }
    }

    /// Remove this member from the project.
    ///
    /// `DELETE /projects/{project_id}/members/{member_id}`
    pub async fn remove(self) -> Result<()> {
        self.client
            .transport()
            .delete(&["projects", &self.project_id, "members", &self.member_id])
            .await?;
        Ok(())
    }

    /// Fetch this member's scopes from the API (the `scopes` field on the
    /// record is a snapshot from listing time).
    ///
    /// `GET /projects/{project_id}/members/{member_id}/scopes`
    pub async fn fetch_scopes(&self) -> Result<Vec<String>> {
        let value = self
            .client
            .transport()
            .get(
                &[
                    "projects",
                    &self.project_id,
                    "members",
                    &self.member_id,
                    "scopes",
                ],
                &[],
            )
            .await?;
        let envelope: ScopesEnvelope = serde_json::from_value(value)?;
        Ok(envelope.scopes)
    }
}

impl Project {
    /// List the members of this project.
    ///
    /// `GET /projects/{project_id}/members`
    pub async fn members(&self) -> Result<Vec<Member>> {
        let value = self
            .client()
            .transport()
            .get(&["projects", &self.project_id, "members"], &[])
            .await?;
        let envelope: MembersEnvelope = serde_json::from_value(value)?;
        Ok(envelope
            .members
            .into_iter()
            .map(|data| Member::new(data, self.project_id.clone(), self.client().clone()))
            .collect())
    }

    /// Remove a member by id without fetching the member list first.
    ///
    /// `DELETE /projects/{project_id}/members/{member_id}`
    pub async fn remove_member(&self, member_id: &str) -> Result<()> {
        self.client()
            .transport()
            .delete(&["projects", &self.project_id, "members", member_id])
            .await?;
        Ok(())
    }

    /// Fetch the scopes of one member.
    ///
    /// `GET /projects/{project_id}/members/{member_id}/scopes`
    pub async fn member_scopes(&self, member_id: &str) -> Result<Vec<String>> {
        let value = self
            .client()
            .transport()
            .get(
                &["projects", &self.project_id, "members", member_id, "scopes"],
                &[],
            )
            .await?;
        let envelope: ScopesEnvelope = serde_json::from_value(value)?;
        Ok(envelope.scopes)
    }
}
