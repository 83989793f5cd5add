//! Co-author extraction and CSV export

use crate::{
    error::Result,
    openalex::models::{Author, Work},
};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Written in the `orcid` column when a co-author has no ORCID.
pub const MISSING_ORCID: &str = "NA";

/// One row of the output CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoAuthor {
    pub openalex_id: String,
    pub display_name: String,
    /// ORCID URL as returned by OpenAlex, or [`MISSING_ORCID`]
    pub orcid: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    display_name: String,
    orcid: String,
}

/// Unique co-authors of one subject, keyed by OpenAlex author ID.
///
/// Re-inserting an ID overwrites the previous name and ORCID.
#[derive(Debug, Clone)]
pub struct CoAuthorMap {
    subject: String,
    entries: BTreeMap<String, Entry>,
}

impl CoAuthorMap {
    /// `subject` is the bare ORCID iD whose co-authors are collected.
    pub fn new(subject: &str) -> Self {
        Self {
            subject: subject.to_owned(),
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record every co-author of a batch of works.
    pub fn extend_from_works<'w, I>(&mut self, works: I)
    where
        I: IntoIterator<Item = &'w Work>,
    {
        for work in works {
            for authorship in &work.authorships {
                self.insert_author(&authorship.author);
            }
        }
    }

    /// Record one author. Returns `false` when the author is the subject or
    /// lacks an ID or a display name.
    pub fn insert_author(&mut self, author: &Author) -> bool {
        if author.short_orcid() == Some(self.subject.as_str()) {
            return false;
        }
        let (Some(id), Some(name)) = (
            author.id.as_deref().filter(|id| !id.is_empty()),
            author.display_name.as_deref().filter(|name| !name.is_empty()),
        ) else {
            return false;
        };
        let orcid = author
            .orcid
            .as_deref()
            .filter(|orcid| !orcid.is_empty())
            .unwrap_or(MISSING_ORCID);
        self.entries.insert(
            id.to_owned(),
            Entry {
                display_name: name.to_owned(),
                orcid: orcid.to_owned(),
            },
        );
        true
    }

    /// Rows ordered by display name, then by ID for identical names.
    pub fn into_sorted(self) -> Vec<CoAuthor> {
        let mut rows = self
            .entries
            .into_iter()
            .map(|(openalex_id, entry)| CoAuthor {
                openalex_id,
                display_name: entry.display_name,
                orcid: entry.orcid,
            })
            .collect::<Vec<_>>();
        // stable: ties keep the ID order of the BTreeMap
        rows.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        rows
    }
}

/// `co_authors_<orcid>.csv`
pub fn output_file_name(orcid: &str) -> String {
    format!("co_authors_{}.csv", orcid)
}

/// Output path for `orcid` inside `dir`.
pub fn output_path(dir: &Path, orcid: &str) -> PathBuf {
    dir.join(output_file_name(orcid))
}

/// Write rows with the `openalex_id,display_name,orcid` header, replacing any existing file.
///
/// Records end with `\r\n`.
pub fn write_csv(path: &Path, rows: &[CoAuthor]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
