// SPDX-License-Identifier: PMPL-1.0-or-later

//! Remote dataset retrieval

use crate::error::{CountryMapperError, Result};
use std::io::Read;
use tracing::warn;

/// Blocking GET of `url`, returning the full response body.
///
/// Non-2xx statuses are failures. No retry, no custom headers.
pub fn fetch(url: &str) -> Result<Vec<u8>> {
    let response = ureq::get(url).call().map_err(|err| {
        warn!(url, error = %err, "country data fetch failed");
        CountryMapperError::transport(url, err)
    })?;

    // 3xx that could not be followed arrive here as Ok
    let status = response.status();
    if !(200..300).contains(&status) {
        warn!(url, status, "country data fetch returned non-success status");
        return Err(CountryMapperError::transport(
            url,
            ureq::Error::Status(status, response),
        ));
    }

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|err| {
            warn!(url, error = %err, "country data body read failed");
            CountryMapperError::transport(url, err)
        })?;
    Ok(body)
}
