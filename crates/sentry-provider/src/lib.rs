//! sentry-provider
//!
//! Data sources of the Sentry infrastructure-as-code provider. The plugin
//! host owns schema registration, state storage and graph evaluation; this
//! crate supplies the schemas, the read entry points and the shared client
//! wiring.

pub mod context;
pub mod data_sources;
pub mod diagnostics;
pub mod error;
pub mod logger;
pub mod provider;
pub mod schema;
pub mod state;

#[cfg(test)]
mod tests;

pub use context::{Interrupted, ReadContext};
pub use data_sources::{
    LookupError, LookupResult, ProjectDataSource, ProjectKey, ProjectReader, ProjectRecord,
    project_schema,
};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{ProviderError, Result as ProviderResult};
pub use provider::Provider;
pub use schema::{Attribute, AttributeRole, AttributeType, Schema};
pub use state::{AttributeValue, ResourceData};
