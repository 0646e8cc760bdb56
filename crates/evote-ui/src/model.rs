//! Display records for wallet accounts.

use serde::{Deserialize, Serialize};

/// A wallet account as the dashboard shows it.
///
/// Keys are opaque hex strings; this crate only displays them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub spend_pkey: String,
    pub scan_pkey: String,
    #[serde(default)]
    pub coins: u64,
    #[serde(default)]
    pub votes: u64,
}

impl Account {
    /// The address other users send coins to.
    pub fn address(&self) -> &str {
        &self.spend_pkey
    }
}
