//! Named styles with alias layering.
//!
//! - [`StyleValue`]: a concrete style or an alias to another name
//! - [`Styles`]: the registry each theme definition builds from its palette
//! - [`StyleValidationError`]: dangling or cyclic aliases

mod error;
mod registry;
mod value;

pub use error::StyleValidationError;
pub use registry::{Styles, DEFAULT_MISSING_STYLE_INDICATOR};
pub use value::StyleValue;
