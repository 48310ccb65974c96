//! Account balances for a project.

mod types;

pub use types::Balance;
pub(crate) use types::BalancesEnvelope;

use crate::projects::Project;
use crate::Result;

impl Project {
    /// List the balances attached to this project.
    ///
    /// `GET /projects/{project_id}/balances`
    pub async fn balances(&self) -> Result<Vec<Balance>> {
        let value = self
            .client()
            .transport()
            .get(&["projects", &self.project_id, "balances"], &[])
            .await?;
        let envelope: BalancesEnvelope = serde_json::from_value(value)?;
        Ok(envelope.balances)
    }

    /// Retrieve one balance.
    ///
    /// `GET /projects/{project_id}/balances/{balance_id}`
    pub async fn balance(&self, balance_id: &str) -> Result<Balance> {
        let value = self
            .client()
            .transport()
            .get(&["projects", &self.project_id, "balances", balance_id], &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
