use crate::api::{Client, Error, ProjectId, Result};
use crate::document::{BadgeDocument, BadgeStyle};
use derive_more::Constructor;
use futures::{stream, StreamExt, TryStreamExt};
use log::{debug, error, info};
use std::io::ErrorKind;
use std::path::Path;
use strum_macros::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
#[strum(serialize_all = "lowercase")]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

#[derive(Debug, PartialEq, Constructor)]
pub struct Publication {
    pub document: BadgeDocument,
    pub outcome: WriteOutcome,
}

pub struct BadgeGenerator<CLIENT>
where
    CLIENT: Client,
{
    client: CLIENT,
    style: BadgeStyle,
}

impl<CLIENT> BadgeGenerator<CLIENT>
where
    CLIENT: Client,
{
    pub fn new(client: CLIENT, style: BadgeStyle) -> Self {
        BadgeGenerator { client, style }
    }

    /// Sums download counts of `projects`, one request at a time.
    ///
    /// The first failing request aborts the whole sum.
    pub async fn total_downloads(&self, projects: &[ProjectId]) -> Result<u64> {
        if projects.is_empty() {
            return Err(Error::Error("No projects configured."));
        }
        let total = stream::iter(projects)
            .then(|project| self.project_downloads(project))
            .try_fold(0u64, |total, downloads| async move {
                total
                    .checked_add(downloads)
                    .ok_or(Error::Error("Download total overflows u64."))
            })
            .await?;
        info!("Total downloads of {} projects: {}", projects.len(), total);
        Ok(total)
    }

    pub async fn generate(&self, projects: &[ProjectId]) -> Result<BadgeDocument> {
        let total = self.total_downloads(projects).await?;
        Ok(BadgeDocument::new(&self.style, total))
    }

    /// Generates the badge and writes it to `path`.
    ///
    /// Nothing is written unless every count was fetched.
    pub async fn publish(&self, projects: &[ProjectId], path: impl AsRef<Path>) -> Result<Publication> {
        let path = path.as_ref();
        let document = self.generate(projects).await?;
        let outcome = write_if_changed(path, &document.to_json()?).await?;
        info!("Badge \"{}\" {} to {}", document.message, outcome, path.display());
        Ok(Publication::new(document, outcome))
    }

    async fn project_downloads(&self, project: &ProjectId) -> Result<u64> {
        match self.client.total_downloads(project).await {
            Ok(downloads) => {
                debug!("Project {} has {} downloads", project, downloads);
                Ok(downloads)
            }
            Err(err) => {
                error!("Failed to get downloads of project {}: {}", project, err);
                Err(err)
            }
        }
    }
}

async fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome> {
    match tokio::fs::read(path).await {
        Ok(existing) if existing == contents.as_bytes() => return Ok(WriteOutcome::Unchanged),
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    Ok(WriteOutcome::Written)
}
