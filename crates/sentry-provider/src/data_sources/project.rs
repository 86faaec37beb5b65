//! `sentry_project` data source.

use crate::data_sources::project_key::{ORGANIZATION, SLUG};
use crate::data_sources::project_record::{
    COLOR, DIGESTS_MAX_DELAY, DIGESTS_MIN_DELAY, FEATURES, INTERNAL_ID, IS_PUBLIC, NAME, PLATFORM,
    RESOLVE_AGE, STATUS, TEAMS,
};
use crate::{
    Attribute, AttributeType, Diagnostic, Diagnostics, Interrupted, LookupError, LookupResult,
    ProjectKey, ProjectReader, ProjectRecord, ReadContext, ResourceData, Schema,
};

use std::sync::Arc;

use log::{debug, warn};

pub const TYPE_NAME: &str = "sentry_project";

/// Attribute schema of the `sentry_project` data source
pub fn project_schema() -> Schema {
    Schema::new(
        "Sentry Project data source.",
        vec![
            Attribute::required(ORGANIZATION, AttributeType::String)
                .describe("The slug of the organization the project belongs to."),
            Attribute::computed(NAME, AttributeType::String).describe("The name of this project."),
            Attribute::required(SLUG, AttributeType::String).describe("The slug for this project."),
            Attribute::optional_computed(PLATFORM, AttributeType::String)
                .describe("The optional platform for this project."),
            Attribute::computed(INTERNAL_ID, AttributeType::String)
                .describe("The internal ID for this project."),
            Attribute::computed(IS_PUBLIC, AttributeType::Bool),
            Attribute::computed(COLOR, AttributeType::String),
            Attribute::computed(FEATURES, AttributeType::StringList),
            Attribute::computed(STATUS, AttributeType::String),
            Attribute::optional_computed(DIGESTS_MIN_DELAY, AttributeType::Int).describe(
                "The minimum amount of time (in seconds) to wait between scheduling digests for delivery after the initial scheduling.",
            ),
            Attribute::optional_computed(DIGESTS_MAX_DELAY, AttributeType::Int).describe(
                "The maximum amount of time (in seconds) to wait between scheduling digests for delivery.",
            ),
            Attribute::optional_computed(RESOLVE_AGE, AttributeType::Int).describe(
                "Hours in which an issue is automatically resolve if not seen after this amount of time.",
            ),
            Attribute::computed(TEAMS, AttributeType::StringSet)
                .describe("The slugs of the teams this project belongs to."),
        ],
    )
}

/// Reads a single Sentry project by organization and project slug.
///
/// Stateless apart from the shared reader; one instance can serve any
/// number of concurrent reads.
pub struct ProjectDataSource<R> {
    reader: Arc<R>,
    schema: Schema,
}

impl<R: ProjectReader> ProjectDataSource<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            reader,
            schema: project_schema(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Fetch the project once and project it into a `ProjectRecord`.
    ///
    /// No retries and no caching; two calls mean two requests.
    pub async fn lookup(&self, ctx: &ReadContext, key: &ProjectKey) -> LookupResult<ProjectRecord> {
        debug!(
            "Reading Sentry project: org={}, project_slug={}",
            key.organization, key.slug
        );

        let project = match ctx
            .run(self.reader.get_project(&key.organization, &key.slug))
            .await
        {
            Ok(Ok(project)) => project,
            Ok(Err(e)) if e.is_not_found() => return Err(LookupError::not_found(key)),
            Ok(Err(e)) => return Err(LookupError::remote(key, e)),
            Err(Interrupted::Cancelled) => return Err(LookupError::cancelled(key)),
            Err(Interrupted::DeadlineExceeded) => {
                return Err(LookupError::deadline_exceeded(key));
            }
        };

        let record =
            ProjectRecord::try_from(project).map_err(|message| LookupError::mapping(key, message))?;

        debug!(
            "Read Sentry project: org={}, project_slug={}, project_id={}",
            record.organization_slug, record.slug, record.id
        );

        Ok(record)
    }

    /// Host entry point for the read phase.
    ///
    /// Takes the key from `data`, looks the project up and, on success,
    /// writes every attribute and sets the id to the resolved slug. Any
    /// failure leaves `data` unchanged.
    pub async fn read(&self, ctx: &ReadContext, data: &mut ResourceData) -> Diagnostics {
        let key = match ProjectKey::from_resource_data(data) {
            Ok(key) => key,
            Err(diagnostics) => return diagnostics,
        };

        let record = match self.lookup(ctx, &key).await {
            Ok(record) => record,
            Err(e) => {
                warn!("{}", e);
                return Diagnostic::from(&e).into();
            }
        };

        if record.slug != key.slug {
            debug!("Sentry project {} resolved to slug {}", key, record.slug);
        }

        let diagnostics = data.set_all(&self.schema, record.attribute_values());
        if !diagnostics.has_errors() {
            data.set_id(record.slug);
        }

        diagnostics
    }
}
