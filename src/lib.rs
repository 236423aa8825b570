//! # walletfront
//!
//! Client-side library for the wallet frontend: user identity, per-user
//! preferences (theme, first-time modals, preferred payment method), and
//! the third-party character directory.
//!
//! The crate is split the way UI components consume it: `net` holds wire
//! types and HTTP clients, `state` holds per-domain stores plus the pure
//! derivation functions they re-evaluate, and [`App`] wires everything
//! together for an embedding host.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod state;

pub use app::App;
pub use config::Config;
pub use error::Error;
