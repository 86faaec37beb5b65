//! sentry-client
//!
//! Thin HTTP client for the Sentry REST API, shared by every data source in
//! the provider.

pub(crate) mod client;
pub mod models;


pub use client::{Client, ClientError, ClientResult};
pub use models::{Organization, Project, Team};
