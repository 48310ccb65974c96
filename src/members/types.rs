use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct MembersEnvelope {
    pub members: Vec<MemberData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MemberData {
    pub member_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScopesEnvelope {
    pub scopes: Vec<String>,
}
