mod data_sources;

use crate::ProjectReader;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sentry_client::{ClientError, ClientResult, Project};
use serde_json::json;

type Respond = dyn Fn(&str, &str) -> ClientResult<Project> + Send + Sync;

/// In-memory reader that counts calls and answers from a closure
pub(crate) struct FakeReader {
    calls: AtomicUsize,
    respond: Box<Respond>,
}

impl FakeReader {
    pub(crate) fn new<F>(respond: F) -> Arc<Self>
    where
        F: Fn(&str, &str) -> ClientResult<Project> + Send + Sync + 'static,
    {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            respond: Box::new(respond),
        })
    }

    pub(crate) fn returning(project: Project) -> Arc<Self> {
        Self::new(move |_, _| Ok(project.clone()))
    }

    pub(crate) fn failing_with_status(status: u16) -> Arc<Self> {
        Self::new(move |_, _| Err(ClientError::api_error(status, "remote said no".to_string())))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectReader for FakeReader {
    async fn get_project(&self, organization: &str, slug: &str) -> ClientResult<Project> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)(organization, slug)
    }
}

/// Reader whose request never completes
pub(crate) struct HangingReader;

#[async_trait]
impl ProjectReader for HangingReader {
    async fn get_project(&self, _organization: &str, _slug: &str) -> ClientResult<Project> {
        std::future::pending::<ClientResult<Project>>().await
    }
}

/// The `acme/web-app` project: no platform, no digest settings, two teams
pub(crate) fn web_app_project() -> Project {
    serde_json::from_value(json!({
        "id": "123",
        "name": "Web App",
        "slug": "web-app",
        "organization": {"slug": "acme"},
        "isPublic": false,
        "color": "#ff0000",
        "features": ["releases"],
        "status": "active",
        "teams": [{"slug": "backend"}, {"slug": "frontend"}]
    }))
    .unwrap()
}
