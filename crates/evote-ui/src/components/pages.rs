//! Send, receive, and voting pages with their forms.
//!
//! Forms hold whatever the user typed. There is no validation; `submit`
//! hands the values back as JSON for the caller to echo.

use serde::Serialize;
use serde_json::{json, Value};

use super::{Button, ButtonContainer, Component, Headline, InfoLine, Subheading, VotingCard, DEFAULT_WIDTH};
use crate::error::RenderError;
use crate::render::RenderContext;

pub(crate) const FORM_FIELD: &str = r#"{{ label | style("field.label") }}{% if required %}{{ " *" | style("error") }}{% endif %}
{{ "›" | style("field.label") }} {% if value %}{{ value | style("field.value") }}{% else %}{{ placeholder | style("field.placeholder") }}{% endif %}"#;

/// A labelled text input, shown with its current value or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub required: bool,
}

impl FormField {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            value: String::new(),
            required: true,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl Component for FormField {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        cx.template("form_field", self)
    }
}

fn blocks(parts: Vec<String>) -> String {
    parts.join("\n\n")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendForm {
    pub receiver: String,
    pub amount: String,
}

impl SendForm {
    pub fn submit(&self) -> Value {
        json!({ "receiver": self.receiver, "amount": self.amount })
    }
}

/// Sends coins to another address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendPage {
    pub form: SendForm,
    pub width: usize,
}

impl SendPage {
    pub fn new(form: SendForm) -> Self {
        Self {
            form,
            width: DEFAULT_WIDTH,
        }
    }
}

impl Default for SendPage {
    fn default() -> Self {
        Self::new(SendForm::default())
    }
}

impl Component for SendPage {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let receiver = FormField::new("Receiver address", "hex string of 33 characters")
            .value(&self.form.receiver);
        let amount = FormField::new("Amount", "integer").value(&self.form.amount);
        Ok(blocks(vec![
            cx.child(&Headline("Send".into()))?,
            cx.child(&receiver)?,
            cx.child(&amount)?,
            cx.child(&ButtonContainer::new(vec![Button::new("Send")], self.width))?,
        ]))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiveForm {
    pub amount: String,
}

impl ReceiveForm {
    pub fn submit(&self) -> Value {
        json!({ "amount": self.amount })
    }
}

/// Shows the account's own address and requests coins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivePage {
    pub address: String,
    pub form: ReceiveForm,
    pub width: usize,
}

impl ReceivePage {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            form: ReceiveForm::default(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl Component for ReceivePage {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let address = InfoLine::new(
            "Your address for receiving coins and joining votes",
            &self.address,
        )
        .large();
        let amount = FormField::new("Amount", "integer").value(&self.form.amount);
        Ok(blocks(vec![
            cx.child(&Headline("Receive".into()))?,
            cx.child(&address)?,
            cx.child(&Button::new("Copy"))?,
            cx.child(&Subheading("Request coins".into()))?,
            cx.child(&amount)?,
            cx.child(&ButtonContainer::new(vec![Button::new("Request")], self.width))?,
        ]))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VotingForm {
    pub vote_id: String,
}

impl VotingForm {
    pub fn submit(&self) -> Value {
        json!({ "vote_id": self.vote_id })
    }
}

/// Vote id entry plus the votes this account holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotingPage {
    pub form: VotingForm,
    pub votes: Vec<VotingCard>,
    pub width: usize,
}

impl VotingPage {
    pub fn new(votes: Vec<VotingCard>) -> Self {
        Self {
            form: VotingForm::default(),
            votes,
            width: DEFAULT_WIDTH,
        }
    }
}

impl Component for VotingPage {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        let vote_id = FormField::new("Enter vote id", "hex string of 32 characters")
            .value(&self.form.vote_id);
        let mut parts = vec![
            cx.child(&Headline("Votes".into()))?,
            cx.child(&vote_id)?,
            cx.child(&ButtonContainer::new(vec![Button::new("Open")], self.width))?,
        ];
        for card in &self.votes {
            parts.push(cx.child(&card.clone().width(self.width))?);
        }
        Ok(blocks(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{tagged, text};

    #[test]
    fn test_empty_field_shows_placeholder() {
        let field = FormField::new("Amount", "integer");
        assert_eq!(text(&field), "Amount *\n› integer");
        assert!(tagged(&field).contains("[field.placeholder]integer[/field.placeholder]"));
    }

    #[test]
    fn test_filled_field_shows_value() {
        let field = FormField::new("Amount", "integer").value("42");
        assert!(tagged(&field).ends_with("[field.value]42[/field.value]"));
    }

    #[test]
    fn test_forms_submit_entered_values() {
        let send = SendForm {
            receiver: "03b8".into(),
            amount: "10".into(),
        };
        assert_eq!(send.submit(), json!({ "receiver": "03b8", "amount": "10" }));
        assert_eq!(ReceiveForm::default().submit(), json!({ "amount": "" }));
        let voting = VotingForm {
            vote_id: "ab".into(),
        };
        assert_eq!(voting.submit()["vote_id"], "ab");
    }

    #[test]
    fn test_send_page_layout() {
        let mut page = SendPage::default();
        page.width = 10;
        assert_eq!(
            text(&page),
            "Send\n\nReceiver address *\n› hex string of 33 characters\n\nAmount *\n› integer\n\n  [ Send ]"
        );
    }

    #[test]
    fn test_receive_page_shows_address() {
        let out = text(&ReceivePage::new("03b805fab5"));
        assert!(out.starts_with("Receive\n\nYour address for receiving coins and joining votes\n03b805fab5"));
        assert!(out.contains("[ Copy ]"));
        assert!(out.contains("Request coins"));
    }

    #[test]
    fn test_voting_page_lists_cards() {
        let page = VotingPage::new(vec![VotingCard::new("aa", 1), VotingCard::new("bb", 2)]);
        let out = text(&page);
        assert_eq!(out.matches("My votes").count(), 2);
        assert!(out.contains("[ Open ]"));
    }
}
