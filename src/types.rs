// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country record definition

use serde::{Deserialize, Deserializer, Serialize};

/// One country (or territory) from the catalog.
///
/// Records are immutable once built. Comparison keys are lower-cased once at
/// construction so that lookups only fold the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub name: String,
    pub alternate_names: Vec<String>,
    pub alpha2: String,
    pub alpha3: String,
    pub capital: String,
    pub currencies: Vec<String>,
    pub calling_codes: Vec<String>,
    pub region: String,
    pub subregion: String,

    #[serde(skip)]
    folded: FoldedKeys,
}

/// Lower-cased copies of every field a lookup compares against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FoldedKeys {
    pub name: String,
    pub alternate_names: Vec<String>,
    pub alpha2: String,
    pub alpha3: String,
    pub currencies: Vec<String>,
    pub calling_codes: Vec<String>,
    pub region: String,
    pub subregion: String,
}

/// Case folding used on both sides of every comparison.
pub(crate) fn fold(value: &str) -> String {
    value.to_lowercase()
}

fn fold_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| fold(v)).collect()
}

impl CountryInfo {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        alternate_names: Vec<String>,
        alpha2: impl Into<String>,
        alpha3: impl Into<String>,
        capital: impl Into<String>,
        currencies: Vec<String>,
        calling_codes: Vec<String>,
        region: impl Into<String>,
        subregion: impl Into<String>,
    ) -> Self {
        let mut info = Self {
            name: name.into(),
            alternate_names,
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            capital: capital.into(),
            currencies,
            calling_codes,
            region: region.into(),
            subregion: subregion.into(),
            folded: FoldedKeys::default(),
        };
        info.folded = FoldedKeys {
            name: fold(&info.name),
            alternate_names: fold_all(&info.alternate_names),
            alpha2: fold(&info.alpha2),
            alpha3: fold(&info.alpha3),
            currencies: fold_all(&info.currencies),
            calling_codes: fold_all(&info.calling_codes),
            region: fold(&info.region),
            subregion: fold(&info.subregion),
        };
        info
    }

    pub(crate) fn folded(&self) -> &FoldedKeys {
        &self.folded
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountryInfoRepr {
    name: String,
    #[serde(default)]
    alternate_names: Vec<String>,
    alpha2: String,
    alpha3: String,
    #[serde(default)]
    capital: String,
    #[serde(default)]
    currencies: Vec<String>,
    #[serde(default)]
    calling_codes: Vec<String>,
    #[serde(default)]
    region: String,
    #[serde(default)]
    subregion: String,
}

// Deserialize through the constructor so the folded keys are always populated.
impl<'de> Deserialize<'de> for CountryInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = CountryInfoRepr::deserialize(deserializer)?;
        Ok(CountryInfo::new(
            repr.name,
            repr.alternate_names,
            repr.alpha2,
            repr.alpha3,
            repr.capital,
            repr.currencies,
            repr.calling_codes,
            repr.region,
            repr.subregion,
        ))
    }
}
