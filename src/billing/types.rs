use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct BalancesEnvelope {
    pub balances: Vec<Balance>,
}

/// A prepaid credit balance.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    pub balance_id: String,
    pub amount: f64,
    /// `"usd"` or `"hour"`.
    pub units: String,
    #[serde(default)]
    pub purchase_order_id: Option<String>,
}
