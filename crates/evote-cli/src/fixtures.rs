//! Demo accounts and votes, or accounts loaded from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use evote_ui::components::VotingCard;
use evote_ui::Account;

const DEMO_KEY: &str = "03b805fab5e8ec2eee92496925b8067a5d5da4234c0dfc7a10e86ac08e4fa8ccea";
const DEMO_VOTE_ID: &str = "03b805fab5e8ec2eee92496925b8067a";

fn demo_account(id: u64, name: &str, coins: u64, votes: u64) -> Account {
    Account {
        id,
        name: name.to_string(),
        spend_pkey: DEMO_KEY.to_string(),
        scan_pkey: DEMO_KEY.to_string(),
        coins,
        votes,
    }
}

pub fn demo_accounts() -> Vec<Account> {
    vec![
        demo_account(1, "Poseidon", 1000, 15),
        demo_account(2, "Gvidon", 111, 1337),
        demo_account(3, "Megaladon", 1_000_000, 13_370_000),
    ]
}

pub fn demo_votes() -> Vec<VotingCard> {
    [1337, 10, 2, 1000]
        .into_iter()
        .map(|n| VotingCard::new(DEMO_VOTE_ID, n))
        .collect()
}

/// Reads a JSON array of accounts; unknown fields are ignored.
pub fn load_accounts(path: &Path) -> Result<Vec<Account>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading accounts from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing accounts in {}", path.display()))
}
