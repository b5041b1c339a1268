use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    Pending,
    Running,
    Success,
    Failure,
    Error,
    Killed,
    Skipped,
    Blocked,
    Declined,
    WaitingOnDependencies,
    #[default]
    #[serde(other)]
    Unknown,
}

impl BuildStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Error => "error",
            Self::Killed => "killed",
            Self::Skipped => "skipped",
            Self::Blocked => "blocked",
            Self::Declined => "declined",
            Self::WaitingOnDependencies => "waiting_on_dependencies",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Running | Self::Blocked | Self::WaitingOnDependencies
        )
    }
}

/// Build summary embedded in a repository listing (`?latest=true`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuildSummary {
    pub number: u64,
    pub status: BuildStatus,
    pub finished: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub namespace: String,
    pub name: String,
    pub slug: String,
    pub active: bool,
    pub build: BuildSummary,
}

impl Repository {
    pub fn key(&self) -> RepoKey {
        RepoKey {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
        }
    }
}

/// `namespace/name` pair addressing a repository on the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoKey {
    pub namespace: String,
    pub name: String,
}

impl std::fmt::Display for RepoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Build {
    pub number: u64,
    pub status: BuildStatus,
    pub event: String,
    pub target: String,
    #[serde(rename = "author_login")]
    pub author: String,
    pub message: String,
    pub started: i64,
    pub finished: i64,
    pub stages: Vec<Stage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stage {
    pub number: u64,
    pub name: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Step {
    pub number: u64,
    pub name: String,
    pub status: BuildStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogLine {
    #[serde(rename = "pos")]
    pub number: u64,
    #[serde(rename = "out")]
    pub message: String,
    #[serde(rename = "time")]
    pub timestamp: i64,
}

/// Converts a Drone unix timestamp, treating `0` as unset.
pub fn unix_time(secs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        return None;
    }
    Utc.timestamp_opt(secs, 0).single()
}
