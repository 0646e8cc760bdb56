//! Themed terminal components for the evote wallet and voting client.
//!
//! The crate renders account cards, send/receive/voting pages, and a header
//! under one of two themes, and lets any part of the application switch
//! between them without a reference to the mounted scope.
//!
//! - [`ThemeRegistry`]: process-wide mode plus toggle dispatch
//! - [`ThemeScope`]: a mounted theme provider; renders component trees
//! - [`Renderer`]: MiniJinja environment with the component templates
//! - [`components`]: typed-prop components
//!
//! # Example
//!
//! ```rust
//! use evote_ui::components::Headline;
//! use evote_ui::{OutputMode, Renderer, ThemeMode, ThemeRegistry, ThemeScope};
//!
//! let registry = ThemeRegistry::new();
//! let scope = ThemeScope::mount(&registry);
//! let renderer = Renderer::with_output(OutputMode::TermDebug).unwrap();
//!
//! let frame = scope.render(&renderer, &Headline("Send".into())).unwrap();
//! assert_eq!(frame.mode, ThemeMode::Dark);
//! assert_eq!(frame.output, "[headline]Send[/headline]");
//!
//! registry.request_toggle();
//! let frame = scope.render(&renderer, &Headline("Send".into())).unwrap();
//! assert_eq!(frame.mode, ThemeMode::Light);
//! ```

pub mod components;
mod error;
mod model;
mod output;
mod registry;
mod render;
pub mod scope;
pub mod style;
pub mod theme;
pub mod util;

pub use components::Component;
pub use error::{RenderError, ThemeError};
pub use model::Account;
pub use output::OutputMode;
pub use registry::{ModeObserver, Subscription, SubscriptionId, ThemeRegistry, ToggleTarget};
pub use render::{RenderContext, Renderer};
pub use scope::{Frame, ThemeScope};
pub use theme::{ThemeDefinition, ThemeMode, ThemePreference};
