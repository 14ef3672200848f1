//! Authentication state of a run.
//!
//! Holds the bearer tokens captured during the login phase.

mod token_store;

pub use token_store::TokenStore;
