//! Outstanding project invitations.

mod types;

pub use types::{Invite, NewInvite};
pub(crate) use types::InvitesEnvelope;

use crate::projects::Project;
use crate::Result;

impl Project {
    /// List the outstanding invitations to this project.
    ///
    /// `GET /projects/{project_id}/invites`
    pub async fn invites(&self) -> Result<Vec<Invite>> {
        let value = self
            .client()
            .transport()
            .get(&["projects", &self.project_id, "invites"], &[])
            .await?;
        let envelope: InvitesEnvelope = serde_json::from_value(value)?;
        Ok(envelope.invites)
    }

    /// Invite an account to this project.
    ///
    /// `POST /projects/{project_id}/invites`
    pub async fn send_invite(&self, invite: &NewInvite) -> Result<()> {
        let body = serde_json::to_value(invite)?;
        self.client()
            .transport()
            .post(&["projects", &self.project_id, "invites"], &body)
            .await?;
        Ok(())
    }

    /// Revoke an outstanding invitation by email address.
    ///
    /// `DELETE /projects/{project_id}/invites/{email}`
    pub async fn delete_invite(&self, email: &str) -> Result<()> {
        self.client()
            .transport()
            .delete(&["projects", &self.project_id, "invites", email])
            .await?;
        Ok(())
    }
}
