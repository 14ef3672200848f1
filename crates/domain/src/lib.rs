//! TTML Smoke Domain - Core types
//!
//! This crate defines the domain model of the API smoke suite.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod phase;
pub mod request;
pub mod response;
pub mod role;
pub mod summary;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use phase::Phase;
pub use request::{CheckRequest, Header, HttpMethod, RequestSpec};
pub use response::ResponseSpec;
pub use role::{Account, LoginRequest, Role};
pub use summary::RunSummary;
pub use testing::{CheckOutcome, TestResults};
