//! Style alias validation errors.

use thiserror::Error;

/// Error returned when a theme's style aliases do not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleValidationError {
    /// An alias points at a name the registry does not define
    #[error("style '{from}' is an alias of undefined style '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// Following aliases from `path[0]` came back to a name already visited
    #[error("style aliases form a cycle: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}
