//! Request types

mod check;
mod header;
mod method;

pub use check::{CheckRequest, DEFAULT_EXPECTED_STATUS, RequestSpec};
pub use header::{AUTHORIZATION, Header};
pub use method::HttpMethod;
