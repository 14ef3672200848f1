//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the suite and the outside world.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod clock;
mod http_client;
mod reporter;

pub use clock::Clock;
pub use http_client::{HttpClient, HttpClientError};
pub use reporter::Reporter;
