// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookup client over a loaded catalog
//!
//! Every query is a linear scan in catalog order (~250 records) comparing
//! case-folded keys. Single-result lookups return the first match; list
//! lookups return all matches in catalog order. The client has no write
//! path, so it can be shared across threads without locking.

use crate::types::{fold, CountryInfo, FoldedKeys};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryInfoClient {
    data: Vec<CountryInfo>,
}

impl CountryInfoClient {
    pub fn from_records(data: Vec<CountryInfo>) -> Self {
        Self { data }
    }

    pub fn records(&self) -> &[CountryInfo] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryInfo> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Match against the canonical name or any alternate name.
    pub fn by_name(&self, name: &str) -> Option<&CountryInfo> {
        let query = fold(name);
        self.find(|keys| keys.name == query || keys.alternate_names.contains(&query))
    }

    pub fn by_alpha2(&self, alpha2: &str) -> Option<&CountryInfo> {
        let query = fold(alpha2);
        self.find(|keys| keys.alpha2 == query)
    }

    pub fn by_alpha3(&self, alpha3: &str) -> Option<&CountryInfo> {
        let query = fold(alpha3);
        self.find(|keys| keys.alpha3 == query)
    }

    pub fn by_currency(&self, currency: &str) -> Vec<&CountryInfo> {
        let query = fold(currency);
        self.filter(|keys| keys.currencies.contains(&query))
    }

    pub fn by_calling_code(&self, calling_code: &str) -> Vec<&CountryInfo> {
        let query = fold(calling_code);
        self.filter(|keys| keys.calling_codes.contains(&query))
    }

    pub fn by_region(&self, region: &str) -> Vec<&CountryInfo> {
        let query = fold(region);
        self.filter(|keys| keys.region == query)
    }

    pub fn by_subregion(&self, subregion: &str) -> Vec<&CountryInfo> {
        let query = fold(subregion);
        self.filter(|keys| keys.subregion == query)
    }

    fn find<F>(&self, pred: F) -> Option<&CountryInfo>
    where
        F: Fn(&FoldedKeys) -> bool,
    {
        self.data.iter().find(|row| pred(row.folded()))
    }

    fn filter<F>(&self, pred: F) -> Vec<&CountryInfo>
    where
        F: Fn(&FoldedKeys) -> bool,
    {
        self.data.iter().filter(|row| pred(row.folded())).collect()
    }
}

impl<'a> IntoIterator for &'a CountryInfoClient {
    type Item = &'a CountryInfo;
    type IntoIter = std::slice::Iter<'a, CountryInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, alpha2: &str, currency: &str, code: &str, region: &str) -> CountryInfo {
        CountryInfo::new(
            name,
            vec![format!("{name} Alt")],
            alpha2,
            format!("{alpha2}X"),
            "Capital",
            vec![currency.to_string()],
            vec![code.to_string()],
            region,
            format!("Sub {region}"),
        )
    }

    fn client() -> CountryInfoClient {
        CountryInfoClient::from_records(vec![
            record("Alpha", "AA", "EUR", "1", "Europe"),
            record("Beta", "BB", "USD", "1", "Americas"),
            record("Alpha", "CC", "EUR", "2", "Europe"),
        ])
    }

    #[test]
    fn first_match_wins_on_point_lookups() {
        let client = client();
        assert_eq!(client.by_name("alpha").map(|c| c.alpha2.as_str()), Some("AA"));
        assert_eq!(client.by_name("ALPHA ALT").map(|c| c.alpha2.as_str()), Some("AA"));
    }

    #[test]
    fn list_lookups_preserve_catalog_order() {
        let client = client();
        let euro: Vec<_> = client.by_currency("eur").into_iter().map(|c| c.alpha2.as_str()).collect();
        assert_eq!(euro, vec!["AA", "CC"]);
        let one: Vec<_> = client.by_calling_code("1").into_iter().map(|c| c.alpha2.as_str()).collect();
        assert_eq!(one, vec!["AA", "BB"]);
        assert_eq!(client.by_region("europe").len(), 2);
        assert_eq!(client.by_subregion("SUB AMERICAS").len(), 1);
    }

    #[test]
    fn codes_are_case_insensitive() {
        let client = client();
        assert_eq!(client.by_alpha2("bb").map(|c| c.name.as_str()), Some("Beta"));
        assert_eq!(client.by_alpha3("ccx").map(|c| c.name.as_str()), Some("Alpha"));
    }

    #[test]
    fn misses_are_empty_not_errors() {
        let client = client();
        assert!(client.by_name("Gamma").is_none());
        assert!(client.by_alpha2("ZZ").is_none());
        assert!(client.by_alpha3("ZZZ").is_none());
        assert!(client.by_currency("JPY").is_empty());
        assert!(client.by_calling_code("999").is_empty());
        assert!(client.by_region("Atlantis").is_empty());
        assert!(client.by_subregion("Atlantis").is_empty());
    }

    #[test]
    fn empty_client() {
        let client = CountryInfoClient::default();
        assert!(client.is_empty());
        assert!(client.by_name("").is_none());
        assert_eq!((&client).into_iter().count(), 0);
    }
}
