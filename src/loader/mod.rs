// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog loading
//!
//! A catalog comes from exactly one place: the dataset compiled into the
//! crate, a remote URL, or any reader handed in by the caller. Every load
//! builds a fresh, independent catalog.

mod fetch;
pub mod parser;

use crate::client::CountryInfoClient;
use crate::error::{CountryMapperError, Result};
use std::io::Read;
use tracing::debug;

pub use fetch::fetch;

static DEFAULT_COUNTRY_INFO: &str = include_str!("../../data/country_info.csv");

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Bundled,
    Url(String),
}

impl Source {
    /// Pick a source from zero or one location strings.
    pub fn from_locations<S: AsRef<str>>(locations: &[S]) -> Result<Self> {
        match locations {
            [] => Ok(Source::Bundled),
            [url] => Ok(Source::Url(url.as_ref().to_string())),
            _ => Err(CountryMapperError::InvalidArgument(
                "only one source may be specified".to_string(),
            )),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Source::Bundled => "bundled",
            Source::Url(_) => "url",
        }
    }
}

/// Load from the bundled dataset, or from the single URL in `locations`.
///
/// More than one location is rejected before any I/O happens.
///
/// ```
/// let client = country_mapper::load::<&str>(&[])?;
/// assert_eq!(client.by_alpha2("sg").map(|c| c.name.as_str()), Some("Singapore"));
///
/// let rejected = country_mapper::load(&["https://a.example", "https://b.example"]);
/// assert!(rejected.is_err_and(|err| err.is_invalid_argument()));
/// # Ok::<(), country_mapper::CountryMapperError>(())
/// ```
pub fn load<S: AsRef<str>>(locations: &[S]) -> Result<CountryInfoClient> {
    load_source(&Source::from_locations(locations)?)
}

pub fn load_default() -> Result<CountryInfoClient> {
    load_source(&Source::Bundled)
}

pub fn load_from_url(url: &str) -> Result<CountryInfoClient> {
    load_source(&Source::Url(url.to_string()))
}

pub fn load_source(source: &Source) -> Result<CountryInfoClient> {
    debug!(source = source.kind(), "loading country catalog");
    match source {
        Source::Bundled => load_from_reader(DEFAULT_COUNTRY_INFO.as_bytes()),
        Source::Url(url) => {
            let body = fetch(url)?;
            load_from_reader(body.as_slice())
        }
    }
}

/// Parse a table from any reader with the standard layout.
pub fn load_from_reader<R: Read>(reader: R) -> Result<CountryInfoClient> {
    let records = parser::parse_records(reader)?;
    debug!(records = records.len(), "country catalog parsed");
    Ok(CountryInfoClient::from_records(records))
}
