//! API key management for a project.

mod types;

pub use types::{CreatedKey, KeyOwner, NewKey};
pub(crate) use types::{KeyEnvelope, KeysEnvelope};

use crate::client::Deepgram;
use crate::projects::Project;
use crate::Result;

/// An API key belonging to a project.
///
/// The secret key material is never part of this record; it is only returned
/// once, at creation time, inside [`CreatedKey`].
#[derive(Debug, Clone)]
pub struct ApiKey {
    pub api_key_id: String,
    pub comment: String,
    pub scopes: Vec<String>,
    pub tags: Option<Vec<String>>,
    pub created: Option<String>,
    pub expiration_date: Option<String>,
    /// The member the key belongs to, when the endpoint reports one.
    pub member: Option<KeyOwner>,
    project_id: String,
    client: Deepgram,
}

impl ApiKey {
    pub(crate) fn new(envelope: KeyEnvelope, project_id: String, client: Deepgram) -> Self {
        let data = envelope.api_key;
        Self {
            api_key_id: data.api_key_id,
            comment: data.comment,
            scopes: data.scopes,
            tags: data.tags,
            created: data.created,
            expiration_date: data.expiration_date,
            member: envelope.member,
            project_id,
            client,
        }
    }

    /// Delete this key.
    ///
    /// `DELETE /projects/{project_id}/keys/{key_id}`
    pub async fn delete(self) -> Result<()> {
        self.client
            .transport()
            .delete(&["projects", &self.project_id, "keys", &self.api_key_id])
            .await?;
        Ok(())
    }
}

impl Project {
    /// List the keys of this project.
    ///
    /// `GET /projects/{project_id}/keys`
    pub async fn keys(&self) -> Result<Vec<ApiKey>> {
        let value = self
            .client()
            .transport()
            .get(&["projects", &self.project_id, "keys"], &[])
            .await?;
        let envelope: KeysEnvelope = serde_json::from_value(value)?;
        Ok(envelope
            .api_keys
            .into_iter()
            .map(|key| ApiKey::new(key, self.project_id.clone(), self.client().clone()))
            .collect())
    }

    /// Retrieve one key.
    ///
    /// `GET /projects/{project_id}/keys/{key_id}`
    pub async fn key(&self, key_id: &str) -> Result<ApiKey> {
        let value = self
            .client()
            .transport()
            .get(&["projects", &self.project_id, "keys", key_id], &[])
            .await?;
        let envelope: KeyEnvelope = serde_json::from_value(value)?;
        Ok(ApiKey::new(
            envelope,
            self.project_id.clone(),
            self.client().clone(),
        ))
    }

    /// Create a key. The response carries the secret key material; it cannot
    /// be retrieved again afterwards.
    ///
    /// `POST /projects/{project_id}/keys`
    pub async fn create_key(&self, new_key: &NewKey) -> Result<CreatedKey> {
        new_key.validate()?;
        let body = serde_json::to_value(new_key)?;
        let value = self
            .client()
            .transport()
            .post(&["projects", &self.project_id, "keys"], &body)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
