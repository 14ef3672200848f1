//! TTML Smoke Application - Suite runner and ports
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP client, clock, reporter)
//! - The fixed endpoint catalog and suite configuration
//! - The [`SmokeSuite`] runner

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ports;
pub mod suite;

pub use auth::TokenStore;
pub use config::SuiteConfig;
pub use error::{SuiteError, SuiteResult};
pub use ports::{Clock, HttpClient, HttpClientError, Reporter};
pub use suite::{Exchange, SmokeSuite};
