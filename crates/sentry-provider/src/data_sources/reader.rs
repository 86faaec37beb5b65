use async_trait::async_trait;
use sentry_client::{Client, ClientResult, Project};

/// Remote read capability the project data source depends on.
///
/// Implementations must be safe to call concurrently; the host may run
/// several reads against one reader at the same time.
#[async_trait]
pub trait ProjectReader: Send + Sync {
    async fn get_project(&self, organization: &str, slug: &str) -> ClientResult<Project>;
}

#[async_trait]
impl ProjectReader for Client {
    async fn get_project(&self, organization: &str, slug: &str) -> ClientResult<Project> {
        Client::get_project(self, organization, slug).await
    }
}
