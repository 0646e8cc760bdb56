//! A vote the account takes part in.

use serde::Serialize;

use super::{Component, InfoLine, DEFAULT_WIDTH};
use crate::error::RenderError;
use crate::render::RenderContext;
use crate::util::truncate_to_width;

pub(crate) const VOTING_CARD: &str = r#"{{ id_line }}
{{ votes_line }}
{{ rule | style("divider") }}"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotingCard {
    pub vote_id: String,
    pub my_votes: u64,
    pub width: usize,
}

impl VotingCard {
    pub fn new(vote_id: impl Into<String>, my_votes: u64) -> Self {
        Self {
            vote_id: vote_id.into(),
            my_votes,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Component for VotingCard {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        #[derive(Serialize)]
        struct View {
            id_line: String,
            votes_line: String,
            rule: String,
        }

        let id = InfoLine::new("Vote id", truncate_to_width(&self.vote_id, self.width));
        let votes = InfoLine::new("My votes", self.my_votes.to_string());
        cx.template(
            "voting_card",
            &View {
                id_line: cx.child(&id)?,
                votes_line: cx.child(&votes)?,
                rule: "─".repeat(self.width),
            },
        )
    }
}
