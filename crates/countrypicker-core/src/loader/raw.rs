// crates/countrypicker-core/src/loader/raw.rs
use crate::error::InvalidCountry;
use crate::model::Country;
use serde::Deserialize;

/// Raw country record as it comes from a custom list file.
///
/// Mirrors the external file shape; validation happens in
/// [`CountryRecord::into_country`].
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub code: String,
    #[serde(default, alias = "flagEmoji")]
    pub flag: Option<String>,
    #[serde(alias = "dialCode")]
    pub dial_code: String,
}

impl CountryRecord {
    /// Validate the record; a missing flag is derived from the code.
    ///
    /// # Errors
    ///
    /// See [`Country::new`] and [`Country::with_derived_flag`].
    pub fn into_country(self) -> Result<Country, InvalidCountry> {
        match self.flag {
            Some(flag) => Country::new(self.name, self.code, flag, self.dial_code),
            None => Country::with_derived_flag(self.name, self.code, self.dial_code),
        }
    }
}
