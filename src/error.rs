//! Errors raised at the fallible edges of the crate.
//!
//! Building a legend never fails; only reading a persisted configuration
//! or parsing a color explicitly does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The serialized configuration is not valid JSON or has fields of
    /// the wrong type.
    #[error("invalid color scale configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A string could not be understood as a CSS color.
    #[error("invalid color “{value}”: {reason}")]
    Color { value: String, reason: String },
}
