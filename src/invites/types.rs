use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct InvitesEnvelope {
    pub invites: Vec<Invite>,
}

/// An invitation that has been sent but not yet accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Invite {
    pub email: String,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Request body for sending an invitation.
#[derive(Debug, Clone, Serialize)]
pub struct NewInvite {
    pub email: String,
    pub scope: String,
}

impl NewInvite {
    pub fn new(email: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            scope: scope.into(),
        }
    }
}
