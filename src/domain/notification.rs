use serde::{Deserialize, Serialize};

/// Renewal reminder derived from a client's remaining sessions. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub package_name: String,
    pub sessions_left: u32,
}
