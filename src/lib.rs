// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country-Mapper — static country reference data lookups.
//!
//! Loads a semicolon-delimited table of country attributes (names, ISO
//! codes, capital, currencies, calling codes, region, subregion) and answers
//! lookups against it. A default table is compiled into the crate; a caller
//! may instead point [`load`] at a remote copy with the same layout.
//!
//! ```
//! let client = country_mapper::load_default()?;
//!
//! let korea = client.by_name("south korea");
//! assert_eq!(korea.map(|c| c.alpha3.as_str()), Some("KOR"));
//!
//! let sgd = client.by_currency("SGD");
//! assert_eq!(sgd[0].name, "Singapore");
//! # Ok::<(), country_mapper::CountryMapperError>(())
//! ```
//!
//! The catalog is read-only after load. [`CountryInfoClient`] holds no
//! interior mutability, so a shared reference can be queried from any number
//! of threads at once.

pub mod client;
pub mod error;
pub mod loader;
pub mod types;

pub use client::CountryInfoClient;
pub use error::{CountryMapperError, Result};
pub use loader::{load, load_default, load_from_reader, load_from_url, load_source, Source};
pub use types::CountryInfo;
