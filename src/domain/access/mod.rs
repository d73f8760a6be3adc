//! Access gate: one shared password protects the whole API.

mod gate;

pub use gate::SharedSecretGate;

use thiserror::Error;

/// Errors raised by the access gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Invalid password")]
    InvalidPassword,

    #[error("Shared secret is not configured")]
    MissingSecret,

    #[error("Shared secret rejected as HMAC key: {0}")]
    KeyRejected(String),
}
