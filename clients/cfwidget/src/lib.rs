//! [`badge::api::Client`] backed by the [cfwidget](https://api.cfwidget.com) project API.

mod builder;
mod payload;

pub use builder::CfWidgetClientBuilder;
pub use builder::DEFAULT_API_URL;
pub use builder::DEFAULT_USER_AGENT;

use async_trait::async_trait;
use badge::api::{Error, ProjectId, Result};
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

pub struct CfWidgetClient {
    client: Client,
    api_url: Url,
}

impl CfWidgetClient {
    fn project_url(&self, project: &ProjectId) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Error("API URL cannot be a base."))?
            .pop_if_empty()
            .extend(project.as_str().split('/'));
        Ok(url)
    }
}

#[async_trait]
impl badge::api::Client for CfWidgetClient {
    async fn total_downloads(&self, project: &ProjectId) -> Result<u64> {
        let request_url = self.project_url(project)?;
        debug!("GET {}", request_url);
        let response = self.client.get(request_url).send().await?;
        let project = read_response::<payload::Project>(response).await?;
        Ok(project.downloads.total)
    }
}

/// Fails on non-success status, otherwise decodes the JSON body.
pub(crate) async fn read_response<T: DeserializeOwned>(response: Response) -> reqwest::Result<T> {
    response.error_for_status()?.json::<T>().await
}
