//! Themed components of the wallet and voting screens.
//!
//! Every component is a plain struct of typed props implementing
//! [`Component`]. Rendering goes through a [`RenderContext`], whose theme is
//! the one the enclosing scope resolved for this pass; nothing theme-derived
//! is stored on a component between renders.
//!
//! Layout components ([`Header`], [`AccountsList`], [`Dashboard`], the pages)
//! compose leaf components through [`RenderContext::child`].

mod account_card;
mod accounts_list;
mod basics;
mod dashboard;
mod header;
mod pages;
mod tx_card;
mod voting_card;

pub use account_card::{AddAccountCard, AddressCard};
pub use accounts_list::AccountsList;
pub use basics::{Button, ButtonContainer, Divider, ErrorCard, Headline, InfoLine, Subheading};
pub use dashboard::{Dashboard, Page};
pub use header::{Header, LogoGroup};
pub use pages::{FormField, ReceiveForm, ReceivePage, SendForm, SendPage, VotingForm, VotingPage};
pub use tx_card::{TxCard, TxKind};
pub use voting_card::VotingCard;

use crate::error::RenderError;
use crate::render::RenderContext;

/// Default column budget for components that truncate long values.
pub const DEFAULT_WIDTH: usize = 48;

/// Something that renders under the active theme.
pub trait Component {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError>;
}

impl<C: Component + ?Sized> Component for &C {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        (**self).render(cx)
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, RenderError> {
        (**self).render(cx)
    }
}

/// Built-in templates, registered by every [`Renderer`](crate::Renderer).
pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    ("info_line", basics::INFO_LINE),
    ("headline", basics::HEADLINE),
    ("subheading", basics::SUBHEADING),
    ("button", basics::BUTTON),
    ("error_card", basics::ERROR_CARD),
    ("divider", basics::DIVIDER),
    ("logo_group", header::LOGO_GROUP),
    ("header", header::HEADER),
    ("address_card", account_card::ADDRESS_CARD),
    ("add_account_card", account_card::ADD_ACCOUNT_CARD),
    ("tx_card", tx_card::TX_CARD),
    ("voting_card", voting_card::VOTING_CARD),
    ("form_field", pages::FORM_FIELD),
];

#[cfg(test)]
pub(crate) mod testing {
    use super::Component;
    use crate::{OutputMode, Renderer, ThemeMode, ThemeRegistry, ThemeScope};

    /// Renders `component` under a fresh registry in `mode`.
    pub fn render_in(component: &dyn Component, mode: ThemeMode, output: OutputMode) -> String {
        let registry = ThemeRegistry::with_mode(mode);
        let scope = ThemeScope::mount(&registry);
        let renderer = Renderer::with_output(output).unwrap();
        scope.render(&renderer, component).unwrap().output
    }

    /// Plain text, dark mode.
    pub fn text(component: &dyn Component) -> String {
        render_in(component, ThemeMode::Dark, OutputMode::Text)
    }

    /// Style tags, dark mode.
    pub fn tagged(component: &dyn Component) -> String {
        render_in(component, ThemeMode::Dark, OutputMode::TermDebug)
    }
}
