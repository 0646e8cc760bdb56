//! Theme modes, definitions, and the catalog that maps one to the other.
//!
//! - [`ThemeMode`]: dark or light
//! - [`ThemePreference`]: the configured starting mode, including OS detection
//! - [`ThemeDefinition`]: palette + typography + derived styles for one mode
//! - [`catalog`]: the two built-in definitions
//!
//! Definitions are immutable and live for the whole process. Which one is
//! active is decided by the [`ThemeRegistry`](crate::ThemeRegistry) and the
//! mounted [`ThemeScope`](crate::ThemeScope), never by the definitions.

pub mod catalog;
mod definition;
mod mode;
pub mod palette;
pub mod typography;

pub use definition::ThemeDefinition;
pub use mode::{reset_theme_detector, set_theme_detector, ThemeMode, ThemePreference};
pub use palette::{Palette, Rgb};
pub use typography::{Typography, Variant};
