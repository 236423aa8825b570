//! Per-domain stores and the pure derivation functions they re-evaluate.
//!
//! DESIGN
//! ======
//! Stores own the caches and the session-local bits (transient modal
//! dismissals, active filters). Every UI-facing value is computed by a
//! pure function of (identity, cached query data, session state), so
//! re-evaluating on any input change is safe and idempotent.

pub mod characters;
pub mod first_time_modal;
pub mod identity;
pub mod preferences;
pub mod theme;
