//! Run configuration

use std::path::PathBuf;
use std::time::Duration;

/// OpenAlex REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openalex.org";

/// Identifier list read when no other path is given.
pub const DEFAULT_INPUT_FILE: &str = "orcid-list.txt";

/// Pause between two page requests (0.25 s).
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

/// Settings shared by the batch driver and the collector.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Newline-delimited list of ORCID iDs.
    pub input_file: PathBuf,
    /// Contact email sent as `mailto` so requests land in the polite pool.
    pub mailto: Option<String>,
    /// Pause after every processed page.
    pub delay: Duration,
    /// Directory receiving the `co_authors_<orcid>.csv` files.
    pub output_dir: PathBuf,
    /// API root, overridable for mock servers.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            mailto: None,
            delay: DEFAULT_DELAY,
            output_dir: PathBuf::from("."),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl Config {
    pub fn with_input_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.input_file = path.into();
        self
    }

    /// Empty or whitespace-only addresses are treated as absent.
    pub fn with_mailto(mut self, mailto: &str) -> Self {
        let mailto = mailto.trim();
        self.mailto = (!mailto.is_empty()).then(|| mailto.to_owned());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }
}
