use crate::client::OpenAlex;
use reqwest::RequestBuilder;

const ORCID_URL_PREFIX: &str = "https://orcid.org/";

/// Build a GET request, attaching the polite-pool contact when one is configured.
pub(crate) fn build_request(client: &OpenAlex, url: &str) -> RequestBuilder {
    let mut req_builder = client.client().get(url);
    if let Some(mailto) = client.mailto() {
        req_builder = req_builder.query(&[("mailto", mailto)]);
    }
    req_builder
}

/// `https://orcid.org/0000-0002-1825-0097` -> `0000-0002-1825-0097`
pub(crate) fn strip_orcid_prefix(orcid: &str) -> &str {
    orcid.strip_prefix(ORCID_URL_PREFIX).unwrap_or(orcid)
}
