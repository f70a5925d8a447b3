// crates/countrypicker-core/src/model.rs

use crate::error::InvalidCountry;
use crate::text::is_blank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Codepoint of REGIONAL INDICATOR SYMBOL LETTER A.
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// A country as shown by the picker: display name, ISO 3166-1 alpha-2 code,
/// flag glyph and international dial code.
///
/// Values are validated on construction and immutable afterwards. Two
/// countries are equal iff all four fields are equal.
///
/// ```rust
/// use countrypicker_core::Country;
///
/// let us = Country::new("United States", "US", "🇺🇸", "+1").unwrap();
/// assert_eq!(us.display_name(), "🇺🇸 United States");
/// assert_eq!(us.display_dial_code(), "🇺🇸 +1");
///
/// assert!(Country::new("United States", "USA", "🇺🇸", "+1").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CountryFields")]
pub struct Country {
    name: String,
    code: String,
    flag: String,
    dial_code: String,
}

/// Unvalidated field set; every deserialized [`Country`] passes through
/// [`Country::new`].
#[derive(Deserialize)]
struct CountryFields {
    name: String,
    code: String,
    #[serde(alias = "flagEmoji")]
    flag: String,
    #[serde(alias = "dialCode")]
    dial_code: String,
}

impl TryFrom<CountryFields> for Country {
    type Error = InvalidCountry;

    fn try_from(f: CountryFields) -> Result<Self, Self::Error> {
        Country::new(f.name, f.code, f.flag, f.dial_code)
    }
}

impl Country {
    /// Validate and build a country.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCountry`] when the name is blank, the code is blank or
    /// not exactly two characters, the flag is blank, or the dial code is
    /// blank or does not start with `+`.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        flag: impl Into<String>,
        dial_code: impl Into<String>,
    ) -> Result<Self, InvalidCountry> {
        let name = name.into();
        let code = code.into();
        let flag = flag.into();
        let dial_code = dial_code.into();

        if is_blank(&name) {
            return Err(InvalidCountry::BlankName);
        }
        if is_blank(&code) {
            return Err(InvalidCountry::BlankCode);
        }
        let code_len = code.chars().count();
        if code_len != 2 {
            return Err(InvalidCountry::CodeLength(code_len));
        }
        if is_blank(&flag) {
            return Err(InvalidCountry::BlankFlag);
        }
        if is_blank(&dial_code) {
            return Err(InvalidCountry::BlankDialCode);
        }
        if !dial_code.starts_with('+') {
            return Err(InvalidCountry::DialCodeWithoutPlus(dial_code));
        }

        Ok(Self {
            name,
            code,
            flag,
            dial_code,
        })
    }

    /// Build a country whose flag is derived from its code, see [`flag_for_code`].
    ///
    /// # Errors
    ///
    /// Same as [`Country::new`], plus [`InvalidCountry::UnderivableFlag`] when
    /// the code is two characters but not two ASCII letters.
    pub fn with_derived_flag(
        name: impl Into<String>,
        code: impl Into<String>,
        dial_code: impl Into<String>,
    ) -> Result<Self, InvalidCountry> {
        let name = name.into();
        let code = code.into();
        let dial_code = dial_code.into();

        match flag_for_code(&code) {
            Some(flag) => Self::new(name, code, flag, dial_code),
            // Let the regular validation report blank/length problems first.
            None => match Self::new(name, code.clone(), "?", dial_code) {
                Ok(_) => Err(InvalidCountry::UnderivableFlag(code)),
                Err(e) => Err(e),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    /// `"<flag> <name>"`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.flag, self.name)
    }

    /// `"<flag> <dial_code>"`
    pub fn display_dial_code(&self) -> String {
        format!("{} {}", self.flag, self.dial_code)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag, self.name)
    }
}

/// Flag emoji for a two-letter country code, built from the matching pair of
/// regional indicator symbols. Letters are case-insensitive.
///
/// Returns `None` unless `code` is exactly two ASCII letters.
///
/// ```rust
/// use countrypicker_core::flag_for_code;
///
/// assert_eq!(flag_for_code("DE").as_deref(), Some("🇩🇪"));
/// assert_eq!(flag_for_code("de").as_deref(), Some("🇩🇪"));
/// assert_eq!(flag_for_code("D1"), None);
/// ```
pub fn flag_for_code(code: &str) -> Option<String> {
    let mut chars = code.chars();
    let (a, b) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }
    [a, b]
        .into_iter()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            let offset = u32::from(c.to_ascii_uppercase()) - u32::from('A');
            char::from_u32(REGIONAL_INDICATOR_A + offset)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> Country {
        Country::new("United States", "US", "🇺🇸", "+1").unwrap()
    }

    #[test]
    fn valid_country_keeps_fields() {
        let c = us();
        assert_eq!(c.name(), "United States");
        assert_eq!(c.code(), "US");
        assert_eq!(c.flag(), "🇺🇸");
        assert_eq!(c.dial_code(), "+1");
    }

    #[test]
    fn display_strings() {
        let c = us();
        assert_eq!(c.display_name(), "🇺🇸 United States");
        assert_eq!(c.display_dial_code(), "🇺🇸 +1");
        assert_eq!(c.to_string(), c.display_name());
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            Country::new("", "US", "🇺🇸", "+1"),
            Err(InvalidCountry::BlankName)
        );
        assert_eq!(
            Country::new("   ", "US", "🇺🇸", "+1"),
            Err(InvalidCountry::BlankName)
        );
    }

    #[test]
    fn rejects_bad_code() {
        assert_eq!(
            Country::new("United States", "", "🇺🇸", "+1"),
            Err(InvalidCountry::BlankCode)
        );
        assert_eq!(
            Country::new("United States", "  ", "🇺🇸", "+1"),
            Err(InvalidCountry::BlankCode)
        );
        assert_eq!(
            Country::new("United States", "USA", "🇺🇸", "+1"),
            Err(InvalidCountry::CodeLength(3))
        );
        assert_eq!(
            Country::new("United States", "U", "🇺🇸", "+1"),
            Err(InvalidCountry::CodeLength(1))
        );
    }

    #[test]
    fn code_case_and_alphabet_are_not_enforced() {
        assert!(Country::new("Lowercase", "us", "🇺🇸", "+1").is_ok());
        assert!(Country::new("Digits", "12", "🏳", "+1").is_ok());
    }

    #[test]
    fn rejects_blank_flag() {
        assert_eq!(
            Country::new("United States", "US", "", "+1"),
            Err(InvalidCountry::BlankFlag)
        );
    }

    #[test]
    fn rejects_bad_dial_code() {
        assert_eq!(
            Country::new("United States", "US", "🇺🇸", ""),
            Err(InvalidCountry::BlankDialCode)
        );
        assert_eq!(
            Country::new("United States", "US", "🇺🇸", "1"),
            Err(InvalidCountry::DialCodeWithoutPlus("1".into()))
        );
    }

    #[test]
    fn structural_equality() {
        assert_eq!(us(), us());
        let ca = Country::new("Canada", "CA", "🇨🇦", "+1").unwrap();
        assert_ne!(us(), ca);
    }

    #[test]
    fn derived_flag() {
        let c = Country::with_derived_flag("Germany", "DE", "+49").unwrap();
        assert_eq!(c.flag(), "🇩🇪");
        assert_eq!(flag_for_code("us").as_deref(), Some("🇺🇸"));
        assert_eq!(flag_for_code("USA"), None);
        assert_eq!(flag_for_code("U"), None);
    }

    #[test]
    fn derived_flag_reports_validation_first() {
        assert_eq!(
            Country::with_derived_flag("Nowhere", "X", "+1"),
            Err(InvalidCountry::CodeLength(1))
        );
        assert_eq!(
            Country::with_derived_flag("Nowhere", "X1", "+1"),
            Err(InvalidCountry::UnderivableFlag("X1".into()))
        );
    }

    #[test]
    fn deserialize_validates() {
        let ok: Country = serde_json::from_str(
            r#"{"name":"Canada","code":"CA","flag":"🇨🇦","dial_code":"+1"}"#,
        )
        .unwrap();
        assert_eq!(ok.code(), "CA");

        let camel: Country = serde_json::from_str(
            r#"{"name":"Canada","code":"CA","flagEmoji":"🇨🇦","dialCode":"+1"}"#,
        )
        .unwrap();
        assert_eq!(camel, ok);

        let bad = serde_json::from_str::<Country>(
            r#"{"name":"Canada","code":"CAN","flag":"🇨🇦","dial_code":"+1"}"#,
        );
        assert!(bad.is_err());
    }
}
