//! OpenAlex Client

use crate::{config::Config, error::Result};
use reqwest::{Client, StatusCode};

static APP_USER_AGENT: &str =
    concat!("RS", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[derive(Debug, Clone)]
pub struct OpenAlex {
    base_url: String,
    mailto: Option<String>,
    client: Client,
}

impl OpenAlex {
    /// Create a client for the given API root.
    ///
    /// No request timeout is set; reqwest's defaults apply.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            mailto: None,
            client,
        })
    }

    /// Create a client from the API root and contact email of a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Self::new(&config.base_url)?;
        Ok(match config.mailto.as_deref() {
            Some(mailto) => client.with_mailto(mailto),
            None => client,
        })
    }

    /// Send `mailto` with every request so OpenAlex routes it to the polite pool.
    pub fn with_mailto(mut self, mailto: &str) -> Self {
        self.mailto = Some(mailto.to_owned());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn mailto(&self) -> Option<&str> {
        self.mailto.as_deref()
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub async fn query<Q: Query>(&self, query: &Q) -> Result<Q::Response> {
        query.query(self).await
    }
}

pub trait Query {
    type Response;

    fn query(
        &self,
        client: &OpenAlex,
    ) -> impl std::future::Future<Output = Result<Self::Response>> + Send;
}

/// Non-success HTTP status returned by the API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("HTTP {status}: {error}")]
pub struct RequestFailedError {
    pub status: u16,
    pub error: String,
}

impl RequestFailedError {
    pub(crate) async fn from_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let error = resp
            .text()
            .await
            .ok()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_owned()
            });
        Self {
            status: status.as_u16(),
            error,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
