//! Per-identifier co-author collection

use crate::{
    client::OpenAlex,
    coauthors::{CoAuthorMap, output_path, write_csv},
    config::Config,
    error::{Error, Result},
    openalex::works::{WorksPager, WorksParam},
};
use std::{path::PathBuf, time::Duration};
use tracing::{info, warn};

/// How the collection for one identifier ended
#[derive(Debug)]
pub enum Outcome {
    /// A CSV was written.
    Written { path: PathBuf, count: usize },
    /// Every page was read but no co-author was found; nothing was written.
    Empty,
    /// Fetching or writing failed; nothing collected for this identifier was kept.
    Failed(Error),
}

/// Fetches all works of one ORCID iD and exports its co-authors.
#[derive(Debug, Clone)]
pub struct Collector {
    client: OpenAlex,
    delay: Duration,
    output_dir: PathBuf,
}

impl Collector {
    pub fn new(client: OpenAlex, config: &Config) -> Self {
        Self {
            client,
            delay: config.delay,
            output_dir: config.output_dir.clone(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(OpenAlex::from_config(config)?, config))
    }

    /// Collect and write, logging instead of returning errors.
    pub async fn process(&self, orcid: &str) -> Outcome {
        info!("Processing ORCID iD: {}", orcid);
        match self.collect(orcid).await {
            Ok(Some((path, count))) => {
                info!(
                    "Created {} with {} unique co-authors",
                    path.display(),
                    count
                );
                Outcome::Written { path, count }
            }
            Ok(None) => {
                info!(
                    "No co-authors found for {}, no CSV file was created",
                    orcid
                );
                Outcome::Empty
            }
            Err(e) => {
                warn!("Giving up on {}: {}", orcid, e);
                Outcome::Failed(e)
            }
        }
    }

    /// Page through every work of `orcid` and write the co-author CSV.
    ///
    /// Returns the written path and row count, or `None` when no co-author was
    /// found. A failed page request aborts without writing anything.
    pub async fn collect(&self, orcid: &str) -> Result<Option<(PathBuf, usize)>> {
        let mut co_authors = CoAuthorMap::new(orcid);
        let mut pager = WorksPager::new(&self.client, WorksParam::by_orcid(orcid));

        info!("Fetching works from OpenAlex...");
        loop {
            let page = pager.page();
            let works = match pager.next_page().await? {
                Some(works) => works,
                None => break,
            };
            co_authors.extend_from_works(&works);
            info!(
                "Processed page {}... Found {} unique co-authors so far.",
                page,
                co_authors.len()
            );
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        if co_authors.is_empty() {
            return Ok(None);
        }

        let path = output_path(&self.output_dir, orcid);
        info!("Writing to CSV file: {}", path.display());
        let rows = co_authors.into_sorted();
        write_csv(&path, &rows)?;
        Ok(Some((path, rows.len())))
    }
}
