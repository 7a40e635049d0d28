// Roster ingestion: sheet URL resolution, CSV download, and normalization
// into engine players.

pub mod parse;
pub mod sheet;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unrecognized sheet URL: {url}")]
    BadSheetUrl { url: String },

    #[error("failed to fetch roster from {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("roster endpoint returned HTTP {status}")]
    HttpStatus { status: reqwest::StatusCode },

    #[error("failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
