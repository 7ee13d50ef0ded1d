use async_trait::async_trait;
use derive_more::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: {0}")]
    Error(&'static str),
    #[error("Invalid project id: {0:?}")]
    InvalidProject(String),
    // status, transport and body decoding failures alike
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Opaque identifier of a project hosted on the distribution platform.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::InvalidProject(value.to_string()));
        }
        Ok(ProjectId(value.to_string()))
    }
}

/// Source of per-project download counts.
#[async_trait]
pub trait Client: Send + Sync {
    /// Lifetime download count of `project`.
    async fn total_downloads(&self, project: &ProjectId) -> Result<u64>;
}

#[test]
fn project_id_trimmed_test() {
    let project: ProjectId = " 238222 ".parse().unwrap();
    assert_eq!(project.as_str(), "238222");
    assert_eq!(project.to_string(), "238222");
}

#[test]
fn project_id_empty_test() {
    let project = "  ".parse::<ProjectId>();
    assert!(matches!(project, Err(Error::InvalidProject(_))));
}
