// crates/countrypicker-core/src/search.rs

//! Query matching over country lists.
//!
//! [`filter`] is what a picker runs on every keystroke. The [`CountrySearch`]
//! trait bundles it with code/dial-code lookups and a ranked search.

use crate::catalog::Catalog;
use crate::model::Country;
use crate::text::{fold_case, fold_key, is_blank};
use crate::traits::NameMatch;

/// Narrow `countries` to the entries matching `query`.
///
/// A blank query returns every entry. Otherwise an entry matches when its
/// name, code or dial code contains the query, ignoring case. Matching is
/// plain substring containment and the input order is preserved.
///
/// ```rust
/// use countrypicker_core::{all_countries, filter};
///
/// let hits = filter(all_countries(), "+1");
/// assert!(hits.iter().any(|c| c.code() == "US"));
/// assert!(hits.iter().any(|c| c.code() == "CA"));
/// assert_eq!(filter(all_countries(), "").len(), all_countries().len());
/// ```
pub fn filter<'a>(countries: &'a [Country], query: &str) -> Vec<&'a Country> {
    if is_blank(query) {
        return countries.iter().collect();
    }
    let q = fold_case(query);
    countries.iter().filter(|c| matches_query(c, &q)).collect()
}

/// `q` must already be case-folded.
fn matches_query(country: &Country, q: &str) -> bool {
    fold_case(country.name()).contains(q)
        || fold_case(country.code()).contains(q)
        || fold_case(country.dial_code()).contains(q)
}

/// Result item of [`CountrySearch::smart_search`] with relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartHit<'a> {
    pub score: i32,
    pub country: &'a Country,
}

impl<'a> SmartHit<'a> {
    pub const EXACT_CODE: i32 = 100;
    pub const EXACT_NAME: i32 = 90;
    pub const NAME_PREFIX: i32 = 80;
    pub const NAME_CONTAINS: i32 = 70;
    pub const DIAL_PREFIX: i32 = 20;

    #[inline]
    pub fn new(score: i32, country: &'a Country) -> Self {
        SmartHit { score, country }
    }

    /// Returns true if this hit refers to the country with the given code.
    #[inline]
    pub fn is_code(&self, code: &str) -> bool {
        self.country.code().eq_ignore_ascii_case(code)
    }
}

/// Search operations available on any list of countries.
pub trait CountrySearch {
    /// The list being searched.
    fn countries(&self) -> &[Country];

    /// See [`filter`].
    fn filter(&self, query: &str) -> Vec<&Country> {
        filter(self.countries(), query)
    }

    /// Exact, case-sensitive code match. This is how pre-selection resolves
    /// its code.
    fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.countries().iter().find(|c| c.code() == code)
    }

    /// Code lookup ignoring ASCII case and surrounding whitespace (e.g. "de", " US").
    fn find_by_code_ignore_case(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.countries()
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// Countries whose dial code starts with `prefix` (e.g. "+1", "44").
    ///
    /// The leading `+` is optional. A blank prefix matches nothing.
    fn find_by_dial_code(&self, prefix: &str) -> Vec<&Country> {
        let p = prefix.trim().trim_start_matches('+');
        if p.is_empty() {
            return Vec::new();
        }
        self.countries()
            .iter()
            .filter(|c| c.dial_code().trim_start_matches('+').starts_with(p))
            .collect()
    }

    /// Ranked search over codes, names and dial codes.
    ///
    /// Each country contributes at most one hit carrying its best score:
    /// exact code, exact name, name prefix, name substring, then dial-code
    /// prefix. Name comparisons are accent-insensitive. Hits are ordered by
    /// descending score; equal scores keep list order.
    fn smart_search(&self, query: &str) -> Vec<SmartHit<'_>> {
        let q_raw = query.trim();
        if q_raw.is_empty() {
            return Vec::new();
        }
        let q = fold_key(q_raw);
        let phone = q_raw.trim_start_matches('+');
        let phone_query = !phone.is_empty() && phone.chars().all(|ch| ch.is_ascii_digit());

        let mut out: Vec<SmartHit<'_>> = Vec::new();
        for c in self.countries() {
            if c.code().eq_ignore_ascii_case(q_raw) {
                out.push(SmartHit::new(SmartHit::EXACT_CODE, c));
                continue;
            }

            let cname = fold_key(c.name());
            let score = if c.is_named(q_raw) {
                SmartHit::EXACT_NAME
            } else if cname.starts_with(&q) {
                SmartHit::NAME_PREFIX
            } else if cname.contains(&q) {
                SmartHit::NAME_CONTAINS
            } else if phone_query && c.dial_code().trim_start_matches('+').starts_with(phone) {
                SmartHit::DIAL_PREFIX
            } else {
                continue;
            };
            out.push(SmartHit::new(score, c));
        }

        // stable: ties keep list order
        out.sort_by(|a, b| b.score.cmp(&a.score));
        out
    }
}

impl CountrySearch for [Country] {
    fn countries(&self) -> &[Country] {
        self
    }
}

impl CountrySearch for Vec<Country> {
    fn countries(&self) -> &[Country] {
        self
    }
}

impl CountrySearch for Catalog {
    fn countries(&self) -> &[Country] {
        Catalog::countries(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Country> {
        vec![
            Country::new("Australia", "AU", "🇦🇺", "+61").unwrap(),
            Country::new("Canada", "CA", "🇨🇦", "+1").unwrap(),
            Country::new("Cote d'Ivoire", "CI", "🇨🇮", "+225").unwrap(),
            Country::new("Russia", "RU", "🇷🇺", "+7").unwrap(),
            Country::new("United States", "US", "🇺🇸", "+1").unwrap(),
        ]
    }

    fn codes(hits: &[&Country]) -> Vec<String> {
        hits.iter().map(|c| c.code().to_string()).collect()
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let list = sample();
        for q in ["", "   ", "\t"] {
            let hits = filter(&list, q);
            assert_eq!(hits.len(), list.len());
            assert!(hits.iter().zip(&list).all(|(a, b)| std::ptr::eq(*a, b)));
        }
    }

    #[test]
    fn matches_name_code_and_dial() {
        let list = sample();
        assert_eq!(codes(&filter(&list, "united")), ["US"]);
        assert_eq!(codes(&filter(&list, "ca")), ["CA"]);
        assert_eq!(codes(&filter(&list, "+1")), ["CA", "US"]);
        assert_eq!(codes(&filter(&list, "225")), ["CI"]);
    }

    #[test]
    fn us_hits_code_and_names_containing_us() {
        let list = sample();
        // "US" is the code of United States and a substring of "Australia" and "Russia".
        assert_eq!(codes(&filter(&list, "US")), ["AU", "RU", "US"]);
    }

    #[test]
    fn case_insensitive() {
        let list = sample();
        assert_eq!(filter(&list, "united states"), filter(&list, "UNITED STATES"));
        assert_eq!(filter(&list, "cA"), filter(&list, "Ca"));
    }

    #[test]
    fn single_character_and_no_match() {
        let list = sample();
        assert!(!filter(&list, "a").is_empty());
        assert!(filter(&list, "zzz").is_empty());
    }

    #[test]
    fn idempotent() {
        let list = sample();
        for q in ["a", "+1", "us", "ia"] {
            let once: Vec<Country> = filter(&list, q).into_iter().cloned().collect();
            let twice: Vec<Country> = filter(&once, q).into_iter().cloned().collect();
            assert_eq!(once, twice, "query {q:?}");
        }
    }

    #[test]
    fn code_lookups() {
        let list = sample();
        assert_eq!(list.find_by_code("US").map(Country::name), Some("United States"));
        assert!(list.find_by_code("us").is_none());
        assert_eq!(list.find_by_code_ignore_case(" us ").map(Country::code), Some("US"));
    }

    #[test]
    fn dial_code_prefix() {
        let list = sample();
        assert_eq!(codes(&list.find_by_dial_code("+1")), ["CA", "US"]);
        assert_eq!(codes(&list.find_by_dial_code("7")), ["RU"]);
        assert!(list.find_by_dial_code("+").is_empty());
    }

    #[test]
    fn smart_search_ranks_exact_code_first() {
        let list = sample();
        let hits = list.smart_search("ca");
        assert!(hits[0].is_code("CA"));
        assert_eq!(hits[0].score, SmartHit::EXACT_CODE);

        let hits = list.smart_search("côte");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, SmartHit::NAME_PREFIX);

        let hits = list.smart_search("+1");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.score == SmartHit::DIAL_PREFIX));

        assert!(list.smart_search("  ").is_empty());
    }

    #[test]
    fn smart_search_orders_by_score() {
        let list = sample();
        let hits = list.smart_search("us");
        let scores: Vec<i32> = hits.iter().map(|h| h.score).collect();
        assert_eq!(scores[0], SmartHit::EXACT_CODE);
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}
