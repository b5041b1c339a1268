use crate::model::{Build, LogLine, RepoKey, Repository};
use async_trait::async_trait;
use color_eyre::eyre::Result;

/// Read-only access to the CI backend. The navigation core never calls this
/// directly; it emits fetch effects which [`crate::fetch`] runs against it.
#[async_trait]
pub trait DataGateway: Send + Sync {
    async fn list_repositories(&self) -> Result<Vec<Repository>>;
    async fn list_builds(&self, repo: &RepoKey, page: u32) -> Result<Vec<Build>>;
    async fn get_build(&self, repo: &RepoKey, number: u64) -> Result<Build>;
    async fn get_log_lines(
        &self,
        repo: &RepoKey,
        build: u64,
        stage: u64,
        step: u64,
    ) -> Result<Vec<LogLine>>;
    fn server_url(&self) -> &str;
}
