//! The main screen: header, accounts, and the active page.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tracing::warn;

use super::{
    AccountsList, Component, Divider, Header, ReceiveForm, ReceivePage, SendForm, SendPage,
    VotingCard, VotingForm, VotingPage, DEFAULT_WIDTH,
};
use crate::error::RenderError;
use crate::model::Account;
use crate::render::RenderContext;

/// Which page the dashboard shows next to the accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Send,
    Receive,
    Voting,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Send, Page::Receive, Page::Voting];

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Send => "send",
            Page::Receive => "receive",
            Page::Voting => "voting",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "send" => Ok(Page::Send),
            "receive" => Ok(Page::Receive),
            "voting" | "votes" => Ok(Page::Voting),
            _ => Err(format!("Invalid page: {}. Expected send, receive, or voting.", s)),
        }
    }
}

/// Header, the accounts list, and one page, separated by a rule.
///
/// Form state lives here so switching pages keeps what was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub header: Header,
    pub accounts: AccountsList,
    pub page: Page,
    pub send: SendForm,
    pub receive: ReceiveForm,
    pub voting: VotingForm,
    pub votes: Vec<VotingCard>,
    width: usize,
}

impl Dashboard {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            header: Header::new(),
            accounts: AccountsList::new(accounts),
            page: Page::default(),
            send: SendForm::default(),
            receive: ReceiveForm::default(),
            voting: VotingForm::default(),
            votes: Vec::new(),
            width: DEFAULT_WIDTH,
        }
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub fn votes(mut self, votes: Vec<VotingCard>) -> Self {
        self.votes = votes;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.set_width(width);
        self
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.accounts.width = width;
    }

    pub fn current_width(&self) -> usize {
        self.width
    }

    /// Fields of the active page's form, in display order.
    pub fn form_fields(&self) -> &'static [&'static str] {
        match self.page {
            Page::Send => &["receiver", "amount"],
            Page::Receive => &["amount"],
            Page::Voting => &["vote_id"],
        }
    }

    /// Sets `field` on the active page's form.
    ///
    /// Returns `false` and leaves the form alone when the page has no such field.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match (self.page, field) {
            (Page::Send, "receiver") => &mut self.send.receiver,
            (Page::Send, "amount") => &mut self.send.amount,
            (Page::Receive, "amount") => &mut self.receive.amount,
            (Page::Voting, "vote_id") => &mut self.voting.vote_id,
            _ => {
                warn!(page = %self.page, field, "ignoring unknown form field");
                return false;
            }
        };
        *slot = value.into();
        true
    }

    /// Submits the active page's form.
    pub fn submit(&self) -> Value {
        match self.page {
            Page::Send => self.send.submit(),
            Page::Receive => self.receive.submit(),
            Page::Voting => self.voting.submit(),
        }
    }

    /// Renders only the active page, without header or accounts.
    pub fn render_page(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        match self.page {
            Page::Send => {
                let mut page = SendPage::new(self.send.clone());
                page.width = self.width;
                cx.child(&page)
            }
            Page::Receive => {
                let address = self
                    .accounts
                    .selected_account()
                    .map(|a| a.address().to_string())
                    .unwrap_or_default();
                let mut page = ReceivePage::new(address);
                page.form = self.receive.clone();
                page.width = self.width;
                cx.child(&page)
            }
            Page::Voting => {
                let mut page = VotingPage::new(self.votes.clone());
                page.form = self.voting.clone();
                page.width = self.width;
                cx.child(&page)
            }
        }
    }
}

impl Component for Dashboard {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let divider = Divider { width: self.width };
        let parts = [
            cx.child(&self.header)?,
            cx.child(&divider)?,
            cx.child(&self.accounts)?,
            cx.child(&divider)?,
            self.render_page(cx)?,
        ];
        Ok(parts.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::text;

    fn accounts() -> Vec<Account> {
        vec![Account {
            id: 1,
            name: "Poseidon".into(),
            spend_pkey: "03b805fab5".into(),
            scan_pkey: "03b905fab5".into(),
            coins: 1000,
            votes: 15,
        }]
    }

    #[test]
    fn test_page_from_str() {
        assert_eq!("Receive".parse::<Page>().unwrap(), Page::Receive);
        assert_eq!("votes".parse::<Page>().unwrap(), Page::Voting);
        assert!("history".parse::<Page>().is_err());
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_dashboard_sections_in_order() {
        let out = text(&Dashboard::new(accounts()).width(20));
        let header = out.find("dark theme").unwrap();
        let card = out.find("Poseidon").unwrap();
        let page = out.find("Send\n\nReceiver address").unwrap();
        assert!(header < card && card < page);
        assert_eq!(out.matches(&"─".repeat(20)).count(), 2);
    }

    #[test]
    fn test_receive_page_uses_selected_address() {
        let out = text(&Dashboard::new(accounts()).page(Page::Receive));
        assert!(out.contains("joining votes\n03b805fab5"));
    }

    #[test]
    fn test_form_state_survives_page_switch() {
        let mut dashboard = Dashboard::new(accounts());
        assert!(dashboard.set_field("amount", "25"));
        dashboard.page = Page::Voting;
        assert!(dashboard.set_field("vote_id", "03b805fab5"));
        dashboard.page = Page::Send;
        assert!(text(&dashboard).contains("› 25"));
        assert_eq!(dashboard.voting.vote_id, "03b805fab5");
    }

    #[test]
    fn test_filled_send_form_submits_values() {
        let mut dashboard = Dashboard::new(accounts());
        assert!(dashboard.set_field("receiver", "03b805fab5e8ec2eee"));
        assert!(dashboard.set_field("amount", "100"));
        assert_eq!(
            dashboard.submit(),
            serde_json::json!({ "receiver": "03b805fab5e8ec2eee", "amount": "100" })
        );
    }

    #[test]
    fn test_set_field_is_scoped_to_active_page() {
        let mut dashboard = Dashboard::new(accounts()).page(Page::Receive);
        assert!(!dashboard.set_field("receiver", "03b8"));
        assert!(dashboard.set_field("amount", "7"));
        assert_eq!(dashboard.send, SendForm::default());
        assert_eq!(dashboard.submit(), serde_json::json!({ "amount": "7" }));
        assert_eq!(dashboard.form_fields(), &["amount"]);
    }
}
