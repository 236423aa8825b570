//! Crate-wide error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! `Precondition` marks caller mistakes (a derivation invoked without a
//! resolved user) and is never handled internally. `Transport` carries a
//! fixed per-endpoint message; the offending status and body are logged
//! at the call site and never surfaced to callers.

/// Errors surfaced by the stores, derivations, and HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A derivation was invoked without the context it requires.
    #[error("{0}")]
    Precondition(&'static str),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Transport { message: &'static str },

    /// The request never completed or the body failed to decode.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
