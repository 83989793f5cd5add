//! Works listing
//!
//! `GET /works`
//!
//! Lists works matching a filter, one page at a time. Paging uses the basic
//! `page`/`per-page` parameters; a page with no results marks the end of the
//! listing.
//!
//! Example: `https://api.openalex.org/works?filter=author.orcid:0000-0001-6187-6610&per-page=200&page=1`

use crate::{
    client::{OpenAlex, Query, RequestFailedError},
    error::{Error, Result},
    openalex::models::{Work, WorksResponse},
    utils::build_request,
};
use serde::Serialize;
use tracing::debug;

/// Largest page size OpenAlex accepts.
pub const MAX_PER_PAGE: u32 = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorksParam {
    /// Filter expression, e.g. `author.orcid:0000-0001-6187-6610`
    pub filter: String,
    #[serde(rename = "per-page")]
    pub per_page: u32,
    /// 1-based page number
    pub page: u32,
}

impl WorksParam {
    /// All works of the author with the given ORCID iD, full pages, starting at page 1.
    pub fn by_orcid(orcid: &str) -> Self {
        Self {
            filter: format!("author.orcid:{}", orcid),
            per_page: MAX_PER_PAGE,
            page: 1,
        }
    }

    pub fn builder() -> WorksParamBuilder {
        WorksParamBuilder::default()
    }

    /// The same query one page further.
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }
}

impl Query for WorksParam {
    type Response = WorksResponse;

    async fn query(&self, client: &OpenAlex) -> Result<Self::Response> {
        let url = format!("{}/works", client.base_url());
        debug!(filter = %self.filter, page = self.page, "GET {}", url);
        let resp = build_request(client, &url).query(self).send().await?;
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(RequestFailedError::from_response(resp).await.into())
        }
    }
}

/// Builder for the works listing parameters
#[derive(Debug, Clone, Default)]
pub struct WorksParamBuilder {
    filter: Option<String>,
    per_page: Option<u32>,
    page: Option<u32>,
}

impl WorksParamBuilder {
    pub fn filter(&mut self, filter: &str) -> &mut Self {
        self.filter = Some(filter.to_owned());
        self
    }

    /// Restrict to works with the given author ORCID iD
    pub fn author_orcid(&mut self, orcid: &str) -> &mut Self {
        self.filter(&format!("author.orcid:{}", orcid))
    }

    pub fn per_page(&mut self, per_page: u32) -> &mut Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn page(&mut self, page: u32) -> &mut Self {
        self.page = Some(page);
        self
    }

    pub fn build(&self) -> Result<WorksParam> {
        let filter = match self.filter.as_deref() {
            Some(filter) if !filter.trim().is_empty() => filter.to_owned(),
            _ => return Err(Error::InvalidParameter("filter must be set".to_owned())),
        };

        let per_page = self.per_page.unwrap_or(MAX_PER_PAGE);
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(Error::InvalidParameter(format!(
                "per-page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }

        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(Error::InvalidParameter("page starts at 1".to_owned()));
        }

        Ok(WorksParam {
            filter,
            per_page,
            page,
        })
    }
}

/// Walks the pages of a works listing until an empty page is returned.
#[derive(Debug)]
pub struct WorksPager<'a> {
    client: &'a OpenAlex,
    param: WorksParam,
    done: bool,
}

impl<'a> WorksPager<'a> {
    pub fn new(client: &'a OpenAlex, param: WorksParam) -> Self {
        Self {
            client,
            param,
            done: false,
        }
    }

    /// Page number the next call to [`next_page`](Self::next_page) requests.
    pub fn page(&self) -> u32 {
        self.param.page
    }

    /// Fetch the current page and advance.
    ///
    /// Returns `Ok(None)` once an empty page has been seen. An error leaves the
    /// pager on the failing page.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Work>>> {
        if self.done {
            return Ok(None);
        }
        let works = self.client.query(&self.param).await?.results;
        if works.is_empty() {
            self.done = true;
            return Ok(None);
        }
        self.param = self.param.next_page();
        Ok(Some(works))
    }

    /// Pages as a stream, ending at the first empty page or after the first error.
    #[cfg(feature = "stream")]
    pub fn into_stream(mut self) -> impl futures::Stream<Item = Result<Vec<Work>>> + 'a {
        async_stream::stream! {
            loop {
                match self.next_page().await {
                    Ok(Some(works)) => yield Ok(works),
                    Ok(None) => break,
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                }
            }
        }
    }
}
