//! Wire shapes for project endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectsEnvelope {
    pub projects: Vec<ProjectData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectData {
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// Fields that can be changed on a project. Unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl ProjectUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.company.is_none()
    }
}
