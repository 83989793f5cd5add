use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input file '{}' was not found", path.display())]
    InputNotFound { path: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    RequestFailed(#[from] crate::client::RequestFailedError),
    #[error("{0}")]
    Request(String),
    #[error("CSV error: {0}")]
    Csv(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Request(error.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
