// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for loading a country catalog.
//!
//! Lookups never fail; only [`load`](crate::load) and friends return these.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CountryMapperError>;

#[derive(Debug, Error)]
pub enum CountryMapperError {
    /// Caller misuse detected before any I/O, e.g. two source locations.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Fetching a remote dataset failed (connection, status, body).
    #[error("failed to fetch country data from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The delimited text is malformed or a row is too short.
    #[error("malformed country data at line {line}: {message}")]
    Parse { line: u64, message: String },
}

impl CountryMapperError {
    pub(crate) fn transport<E>(url: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            url: url.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<csv::Error> for CountryMapperError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        Self::Parse {
            line,
            message: err.to_string(),
        }
    }
}
