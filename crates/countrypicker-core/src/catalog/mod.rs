// crates/countrypicker-core/src/catalog/mod.rs

//! # Country Catalog
//!
//! The built-in, alphabetically sorted country list and the [`Catalog`]
//! wrapper pickers draw their rows from.

use crate::common::CatalogStats;
use crate::model::Country;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::{debug, warn};

mod data;

static BUILTIN: Lazy<Vec<Country>> = Lazy::new(|| {
    let mut countries: Vec<Country> = data::COUNTRY_TABLE
        .iter()
        .filter_map(|&(name, code, dial)| {
            Country::with_derived_flag(name, code, dial)
                .map_err(|e| warn!(code, error = %e, "skipping invalid built-in country"))
                .ok()
        })
        .collect();
    countries.sort_by(|a, b| a.name().cmp(b.name()));
    debug!(count = countries.len(), "built-in country catalog ready");
    countries
});

/// The full built-in catalog, sorted ascending by name, codes unique.
///
/// Built once on first access and shared read-only afterwards.
///
/// ```rust
/// let all = countrypicker_core::all_countries();
/// assert!(all.iter().any(|c| c.code() == "US"));
/// ```
pub fn all_countries() -> &'static [Country] {
    &BUILTIN
}

/// The list of countries a picker shows: either the built-in catalog or a
/// caller-supplied custom list.
///
/// Custom lists are used exactly as given (order and duplicates are the
/// caller's business). The whitelist/blacklist helpers keep the relative
/// order of the surviving entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    countries: Cow<'static, [Country]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The built-in catalog (borrowed, no copy).
    pub fn builtin() -> Self {
        Self {
            countries: Cow::Borrowed(all_countries()),
        }
    }

    /// A caller-supplied list.
    pub fn custom(countries: Vec<Country>) -> Self {
        Self {
            countries: Cow::Owned(countries),
        }
    }

    /// Custom list if given, built-in catalog otherwise.
    pub fn from_custom_or_builtin(custom: Option<Vec<Country>>) -> Self {
        custom.map_or_else(Self::builtin, Self::custom)
    }

    /// Keep only countries whose code is in `codes` (case-insensitive).
    pub fn only_codes(&self, codes: &[&str]) -> Self {
        let wanted = normalize_codes(codes);
        self.retain(|c| wanted.contains(&c.code().to_ascii_uppercase()))
    }

    /// Drop countries whose code is in `codes` (case-insensitive).
    pub fn excluding_codes(&self, codes: &[&str]) -> Self {
        let blocked = normalize_codes(codes);
        self.retain(|c| !blocked.contains(&c.code().to_ascii_uppercase()))
    }

    fn retain(&self, keep: impl Fn(&Country) -> bool) -> Self {
        let countries: Vec<Country> = self.countries.iter().filter(|c| keep(c)).cloned().collect();
        debug!(
            before = self.countries.len(),
            after = countries.len(),
            "catalog narrowed by code list"
        );
        Self::custom(countries)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// `true` when this catalog borrows the built-in list unchanged.
    pub fn is_builtin(&self) -> bool {
        matches!(self.countries, Cow::Borrowed(_))
    }

    pub fn into_vec(self) -> Vec<Country> {
        self.countries.into_owned()
    }

    pub fn stats(&self) -> CatalogStats {
        let dial_codes: HashSet<&str> = self.countries.iter().map(Country::dial_code).collect();
        CatalogStats {
            countries: self.countries.len(),
            dial_codes: dial_codes.len(),
        }
    }
}

fn normalize_codes(codes: &[&str]) -> HashSet<String> {
    codes
        .iter()
        .map(|c| c.trim().to_ascii_uppercase())
        .filter(|c| !c.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_row_is_valid() {
        assert_eq!(all_countries().len(), data::COUNTRY_TABLE.len());
    }

    #[test]
    fn builtin_is_sorted_and_unique() {
        let all = all_countries();
        for w in all.windows(2) {
            assert!(
                w[0].name() < w[1].name(),
                "not sorted: {} >= {}",
                w[0].name(),
                w[1].name()
            );
        }
        let codes: HashSet<&str> = all.iter().map(Country::code).collect();
        assert_eq!(codes.len(), all.len(), "duplicate country codes found");
    }

    #[test]
    fn only_and_excluding_keep_order() {
        let cat = Catalog::builtin();
        let only = cat.only_codes(&["us", "CA", " gb "]);
        let names: Vec<&str> = only.countries().iter().map(Country::name).collect();
        assert_eq!(names, ["Canada", "United Kingdom", "United States"]);

        let without = cat.excluding_codes(&["US"]);
        assert_eq!(without.len(), cat.len() - 1);
        assert!(without.countries().iter().all(|c| c.code() != "US"));
        assert!(!without.is_builtin());
    }

    #[test]
    fn custom_or_builtin() {
        assert!(Catalog::from_custom_or_builtin(None).is_builtin());
        let one = vec![Country::new("Canada", "CA", "🇨🇦", "+1").unwrap()];
        let cat = Catalog::from_custom_or_builtin(Some(one.clone()));
        assert_eq!(cat.countries(), one.as_slice());
    }

    #[test]
    fn stats_count_distinct_dial_codes() {
        let cat = Catalog::custom(vec![
            Country::new("United States", "US", "🇺🇸", "+1").unwrap(),
            Country::new("Canada", "CA", "🇨🇦", "+1").unwrap(),
            Country::new("India", "IN", "🇮🇳", "+91").unwrap(),
        ]);
        let stats = cat.stats();
        assert_eq!(stats.countries, 3);
        assert_eq!(stats.dial_codes, 2);
    }
}
