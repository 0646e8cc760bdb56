//! Account cards for the dashboard list.

use serde::Serialize;

use super::{Component, DEFAULT_WIDTH};
use crate::error::RenderError;
use crate::model::Account;
use crate::render::RenderContext;

pub(crate) const ADDRESS_CARD: &str = r#"{%- set bar = "▌" if active else " " -%}
{{ bar | style("card.marker") }} {{ name | truncate_at(text_width) | style("card.name") }}
{{ bar | style("card.marker") }} {{ address | truncate_at(text_width) | style("card.address") }}
{{ bar | style("card.marker") }} {{ coins | style("card.coins") }}  {{ votes | style("card.votes") }}
{%- if active %}
{{ bar | style("card.marker") }} {{ actions | style("card.action") }}
{%- endif %}"#;

pub(crate) const ADD_ACCOUNT_CARD: &str = r#"  {{ ("+ " ~ label) | style("card.add") }}"#;

const CARD_ACTIONS: &str = "↑ send  ↓ receive  ◷ history  ✓ vote";

/// Name, address, and balances of one account.
///
/// The active card gets a marker bar in the primary color and an action row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCard {
    pub name: String,
    pub address: String,
    pub coins: u64,
    pub votes: u64,
    pub active: bool,
    pub width: usize,
}

impl AddressCard {
    pub fn from_account(account: &Account, active: bool) -> Self {
        Self {
            name: account.name.clone(),
            address: account.address().to_string(),
            coins: account.coins,
            votes: account.votes,
            active,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Component for AddressCard {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        #[derive(Serialize)]
        struct View<'a> {
            name: &'a str,
            address: &'a str,
            coins: String,
            votes: String,
            active: bool,
            actions: &'static str,
            text_width: usize,
        }
        cx.template(
            "address_card",
            &View {
                name: &self.name,
                address: &self.address,
                coins: format!("{} coins", self.coins),
                votes: format!("{} votes", self.votes),
                active: self.active,
                actions: CARD_ACTIONS,
                // marker column plus its space
                text_width: self.width.saturating_sub(2),
            },
        )
    }
}

/// The trailing "add account" entry of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountCard {
    pub label: String,
}

impl Default for AddAccountCard {
    fn default() -> Self {
        Self {
            label: "Add account".to_string(),
        }
    }
}

impl Component for AddAccountCard {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        cx.template("add_account_card", &serde_json::json!({ "label": self.label }))
    }
}
