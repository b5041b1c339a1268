use thiserror::Error;

/// Which gateway call a fetch was running, or the browser launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListRepositories,
    ListBuilds,
    GetBuild,
    GetLogLines,
    OpenBrowser,
}

impl Operation {
    pub fn describe(self) -> &'static str {
        match self {
            Self::ListRepositories => "loading repositories",
            Self::ListBuilds => "loading builds",
            Self::GetBuild => "loading build",
            Self::GetLogLines => "loading logs",
            Self::OpenBrowser => "opening browser",
        }
    }
}

/// The one error kind the navigation core distinguishes. What matters is the
/// screen whose load failed, not the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error {}: {cause}", operation.describe())]
pub struct FetchError {
    pub operation: Operation,
    pub cause: String,
}

impl FetchError {
    pub fn new(operation: Operation, cause: impl std::fmt::Display) -> Self {
        Self {
            operation,
            cause: cause.to_string(),
        }
    }
}
