//! The selectable list of wallet accounts.

use tracing::warn;

use super::{AddAccountCard, AddressCard, Component, DEFAULT_WIDTH};
use crate::error::RenderError;
use crate::model::Account;
use crate::render::RenderContext;

/// Accounts with at most one of them selected.
///
/// The first account starts selected; an empty list has no selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountsList {
    accounts: Vec<Account>,
    selected: Option<u64>,
    pub width: usize,
}

impl AccountsList {
    pub fn new(accounts: Vec<Account>) -> Self {
        let selected = accounts.first().map(|a| a.id);
        Self {
            accounts,
            selected,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn selected_account(&self) -> Option<&Account> {
        let id = self.selected?;
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Selects the account with `id`.
    ///
    /// Unknown ids leave the selection unchanged and return `None`.
    pub fn select(&mut self, id: u64) -> Option<&Account> {
        match self.accounts.iter().position(|a| a.id == id) {
            Some(index) => {
                self.selected = Some(id);
                self.accounts.get(index)
            }
            None => {
                warn!(id, "ignoring selection of unknown account");
                None
            }
        }
    }
}

impl Component for AccountsList {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let mut parts = Vec::with_capacity(self.accounts.len() + 1);
        for account in &self.accounts {
            let card = AddressCard::from_account(account, self.selected == Some(account.id))
                .width(self.width);
            parts.push(cx.child(&card)?);
        }
        parts.push(cx.child(&AddAccountCard::default())?);
        Ok(parts.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::text;

    fn account(id: u64, name: &str) -> Account {
        Account {
            id,
            name: name.into(),
            spend_pkey: format!("{id:02x}b805fab5"),
            scan_pkey: format!("{id:02x}c805fab5"),
            coins: 10 * id,
            votes: id,
        }
    }

    fn list() -> AccountsList {
        AccountsList::new(vec![account(1, "Poseidon"), account(2, "Gvidon")])
    }

    #[test]
    fn test_first_account_starts_selected() {
        assert_eq!(list().selected(), Some(1));
        assert_eq!(list().selected_account().map(|a| a.name.as_str()), Some("Poseidon"));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let list = AccountsList::new(Vec::new());
        assert_eq!(list.selected(), None);
        assert!(list.selected_account().is_none());
        assert_eq!(text(&list), "  + Add account");
    }

    #[test]
    fn test_select_known_id() {
        let mut list = list();
        assert_eq!(list.select(2).map(|a| a.id), Some(2));
        assert_eq!(list.selected(), Some(2));
    }

    #[test]
    fn test_select_unknown_id_keeps_selection() {
        let mut list = list();
        assert!(list.select(99).is_none());
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn test_only_selected_card_is_marked() {
        let mut list = list();
        list.select(2);
        let out = text(&list);
        assert!(out.contains("  Poseidon"));
        assert!(out.contains("▌ Gvidon"));
        assert_eq!(out.matches("↑ send").count(), 1);
        assert!(out.ends_with("\n\n  + Add account"));
    }
}
