//! Wire shapes for key endpoints.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Deserialize)]
pub(crate) struct KeysEnvelope {
    pub api_keys: Vec<KeyEnvelope>,
}

/// Both the list and detail endpoints wrap the key next to its owning member.
#[derive(Debug, Deserialize)]
pub(crate) struct KeyEnvelope {
    #[serde(default)]
    pub member: Option<KeyOwner>,
    pub api_key: KeyData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KeyData {
    pub api_key_id: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

/// The member an API key belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyOwner {
    pub member_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Request body for key creation.
///
/// `expiration_date` and `time_to_live_in_seconds` are mutually exclusive;
/// setting neither creates a non-expiring key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewKey {
    pub comment: String,
    pub scopes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live_in_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl NewKey {
    pub fn new(comment: impl Into<String>, scopes: Vec<String>) -> Self {
        Self {
            comment: comment.into(),
            scopes,
            ..Self::default()
        }
    }

    pub fn expiration_date(mut self, date: impl Into<String>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    pub fn time_to_live_in_seconds(mut self, seconds: u64) -> Self {
        self.time_to_live_in_seconds = Some(seconds);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Reject malformed creation requests before anything is sent.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.scopes.is_empty() {
            return Err(Error::validation("key creation requires at least one scope"));
        }
        if self.expiration_date.is_some() && self.time_to_live_in_seconds.is_some() {
            return Err(Error::validation(
                "expiration_date and time_to_live_in_seconds are mutually exclusive",
            ));
        }
        Ok(())
    }
}

/// Response to key creation. `key` is the secret material and is only ever
/// returned here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedKey {
    pub api_key_id: String,
    pub key: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
}
