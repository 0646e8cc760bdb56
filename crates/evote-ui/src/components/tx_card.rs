//! One row of the transaction history.

use serde::Serialize;

use super::{Component, DEFAULT_WIDTH};
use crate::error::RenderError;
use crate::render::RenderContext;

pub(crate) const TX_CARD: &str = r#"{{ icon | style("tx.icon") }} {{ label | style("info.label") }}
  {{ name | truncate_at(name_width) | pad_right(name_width) | style("info.content") }} {{ value | style(value_style) }}"#;

/// Direction and asset of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    In,
    Out,
    VoteIn,
    VoteOut,
}

impl TxKind {
    pub fn is_incoming(self) -> bool {
        matches!(self, TxKind::In | TxKind::VoteIn)
    }

    fn icon(self) -> &'static str {
        match self {
            TxKind::In => "↓",
            TxKind::Out => "↑",
            TxKind::VoteIn | TxKind::VoteOut => "✓",
        }
    }
}

/// Counterparty and amount of a transaction.
///
/// Incoming values are drawn in the secondary color, outgoing ones in the
/// primary text color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxCard {
    pub kind: TxKind,
    /// Counterparty name or address.
    pub name: String,
    pub value: u64,
    pub width: usize,
}

impl TxCard {
    pub fn new(kind: TxKind, name: impl Into<String>, value: u64) -> Self {
        Self {
            kind,
            name: name.into(),
            value,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Component for TxCard {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        #[derive(Serialize)]
        struct View<'a> {
            icon: &'static str,
            label: &'static str,
            name: &'a str,
            name_width: usize,
            value: String,
            value_style: &'static str,
        }

        let incoming = self.kind.is_incoming();
        let value = self.value.to_string();
        // two columns of indent plus the gap before the value
        let name_width = self.width.saturating_sub(value.len() + 3);
        cx.template(
            "tx_card",
            &View {
                icon: self.kind.icon(),
                label: if incoming { "From" } else { "To" },
                name: &self.name,
                name_width,
                value,
                value_style: if incoming { "tx.in" } else { "tx.out" },
            },
        )
    }
}
