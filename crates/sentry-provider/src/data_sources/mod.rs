pub mod error;
pub mod project;
pub mod project_key;
pub mod project_record;
pub mod reader;

pub use error::{LookupError, Result as LookupResult};
pub use project::{ProjectDataSource, project_schema};
pub use project_key::ProjectKey;
pub use project_record::ProjectRecord;
pub use reader::ProjectReader;
