use crate::CfWidgetClient;
use badge::api::Result;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::ClientBuilder;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.cfwidget.com";
pub const DEFAULT_USER_AGENT: &str = "downloads-badge";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CfWidgetClientBuilder {
    client_builder: ClientBuilder,
    api_url: String,
    headers: HeaderMap,
    timeout: Duration,
}

impl Default for CfWidgetClientBuilder {
    fn default() -> Self {
        let mut headers = HeaderMap::default();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            client_builder: ClientBuilder::default(),
            api_url: DEFAULT_API_URL.to_string(),
            headers,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CfWidgetClientBuilder {
    pub fn try_with_user_agent<STR: AsRef<str>>(self, user_agent: STR) -> Result<CfWidgetClientBuilder> {
        Ok(self.try_with_header(header::USER_AGENT, user_agent)?)
    }

    pub fn with_api_url<STR: AsRef<str>>(mut self, url: STR) -> CfWidgetClientBuilder {
        self.api_url = url.as_ref().to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> CfWidgetClientBuilder {
        self.timeout = timeout;
        self
    }

    fn try_with_header(mut self, key: HeaderName, val: impl AsRef<str>) -> anyhow::Result<CfWidgetClientBuilder> {
        let val = HeaderValue::from_str(val.as_ref())?;
        self.headers.insert(key, val);
        Ok(self)
    }

    pub fn build(self) -> Result<CfWidgetClient> {
        let api_url = parse_api_url(&self.api_url)?;
        let client = self
            .client_builder
            .default_headers(self.headers)
            .timeout(self.timeout)
            .build()?;
        Ok(CfWidgetClient { client, api_url })
    }
}

fn parse_api_url(api_url: &str) -> anyhow::Result<Url> {
    let url = Url::parse(api_url)?;
    if url.cannot_be_a_base() {
        anyhow::bail!("API URL {} cannot be a base", api_url);
    }
    Ok(url)
}

#[test]
fn invalid_api_url_test() {
    let client = CfWidgetClientBuilder::default().with_api_url("not a url").build();
    assert!(matches!(client, Err(badge::api::Error::Other(_))));

    let client = CfWidgetClientBuilder::default().with_api_url("mailto:mods@example.com").build();
    assert!(matches!(client, Err(badge::api::Error::Other(_))));
}

#[test]
fn invalid_user_agent_test() {
    let builder = CfWidgetClientBuilder::default().try_with_user_agent("bad\nagent");
    assert!(builder.is_err());
}
