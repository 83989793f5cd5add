//! Batch driver

use crate::{
    collector::{Collector, Outcome},
    config::Config,
    error::{Error, Result},
};
use std::{io::ErrorKind, path::Path};
use tracing::info;

/// Counts reported at the end of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub written: usize,
    pub empty: usize,
    pub failed: usize,
}

/// Read one identifier per line, skipping blank lines.
pub fn read_identifiers(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    Ok(parse_identifiers(&content))
}

fn parse_identifiers(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Runs the collector over every identifier of the input file, in order.
#[derive(Debug, Clone)]
pub struct BatchDriver {
    config: Config,
}

impl BatchDriver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// A failure on one identifier is logged and the batch moves on.
    pub async fn run(&self) -> Result<BatchSummary> {
        let orcids = read_identifiers(&self.config.input_file)?;
        info!(
            "Found {} ORCID iDs in {}.",
            orcids.len(),
            self.config.input_file.display()
        );

        let collector = Collector::from_config(&self.config)?;
        let mut summary = BatchSummary {
            total: orcids.len(),
            ..BatchSummary::default()
        };
        for orcid in &orcids {
            match collector.process(orcid).await {
                Outcome::Written { .. } => summary.written += 1,
                Outcome::Empty => summary.empty += 1,
                Outcome::Failed(_) => summary.failed += 1,
            }
        }

        info!(
            written = summary.written,
            empty = summary.empty,
            failed = summary.failed,
            "Batch processing complete."
        );
        Ok(summary)
    }
}
