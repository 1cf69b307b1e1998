// SPDX-License-Identifier: PMPL-1.0-or-later

//! Semicolon-delimited country table parsing
//!
//! Column layout (0-indexed, header row discarded):
//!
//! | Index | Content                                              |
//! |-------|------------------------------------------------------|
//! | 0     | `Name[,AltName,...]`                                 |
//! | 2     | ISO alpha-2                                          |
//! | 4     | ISO alpha-3                                          |
//! | 5     | currencies, comma separated                          |
//! | 6     | calling codes, comma separated                       |
//! | 7     | capital; its comma tokens also join the alternates   |
//! | 8     | alternate spellings, comma separated                 |
//! | 10    | region                                               |
//! | 11    | subregion                                            |
//!
//! Columns 1, 3 and 9 are present in the table but unused.

use crate::error::{CountryMapperError, Result};
use crate::types::CountryInfo;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

pub const DELIMITER: u8 = b';';
pub const MIN_FIELDS: usize = 12;

const NAMES: usize = 0;
const ALPHA2: usize = 2;
const ALPHA3: usize = 4;
const CURRENCIES: usize = 5;
const CALLING_CODES: usize = 6;
const CAPITAL: usize = 7;
const ALT_SPELLINGS: usize = 8;
const REGION: usize = 10;
const SUBREGION: usize = 11;

/// Parse a complete table. Any malformed row fails the whole parse.
pub fn parse_records<R: Read>(input: R) -> Result<Vec<CountryInfo>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(false)
        .from_reader(input);

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        // skip header
        if idx == 0 {
            continue;
        }
        records.push(parse_row(&row)?);
    }
    Ok(records)
}

fn parse_row(row: &StringRecord) -> Result<CountryInfo> {
    if row.len() < MIN_FIELDS {
        let line = row.position().map(|pos| pos.line()).unwrap_or(0);
        return Err(CountryMapperError::parse(
            line,
            format!("expected at least {MIN_FIELDS} fields, found {}", row.len()),
        ));
    }
    let field = |idx: usize| row.get(idx).unwrap_or_default();

    let mut names = split_list(field(NAMES));
    let name = names.remove(0);

    let mut alternate_names = names;
    alternate_names.extend(split_list(field(CAPITAL)));
    alternate_names.extend(split_list(field(ALT_SPELLINGS)));

    Ok(CountryInfo::new(
        name,
        alternate_names,
        field(ALPHA2),
        field(ALPHA3),
        field(CAPITAL),
        split_list(field(CURRENCIES)),
        split_list(field(CALLING_CODES)),
        field(REGION),
        field(SUBREGION),
    ))
}

/// Comma split that keeps empty tokens, so an empty field yields `[""]`.
fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}
