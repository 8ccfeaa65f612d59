//! The single-player opponent.
//!
//! Policies are trait-based so tests and embedders can swap in their own
//! move choice; the engine only ships `RandomOpponent`.

pub mod policy;

pub use policy::{OpponentPolicy, RandomOpponent};
