// crates/countrypicker-core/src/loader/mod.rs

//! # Custom List Loader
//!
//! Reads caller-supplied country lists from JSON. Handles the physical layer
//! (file I/O, optional gzip) and delegates record parsing to [`raw`].
//!
//! Expected shape:
//!
//! ```json
//! [
//!   { "name": "United States", "code": "US", "flag": "🇺🇸", "dial_code": "+1" },
//!   { "name": "India", "code": "IN", "dialCode": "+91" }
//! ]
//! ```
//!
//! `flag` may be omitted (it is then derived from the code); camelCase
//! `dialCode` / `flagEmoji` are accepted. File order is kept.

use crate::error::{PickerError, Result};
use crate::model::Country;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

mod raw;

pub use raw::CountryRecord;

/// Load a custom country list from a `.json` (or, with the `compact`
/// feature, `.json.gz`) file.
///
/// # Errors
///
/// [`PickerError::NotFound`] if the file cannot be opened,
/// [`PickerError::Json`] for malformed JSON and
/// [`PickerError::InvalidCountry`] for the first record that fails validation.
pub fn load_countries_from_path(path: impl AsRef<Path>) -> Result<Vec<Country>> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let countries = load_countries_from_reader(reader)?;
    debug!(path = %path.display(), count = countries.len(), "custom country list loaded");
    Ok(countries)
}

/// # Errors
///
/// Same as [`load_countries_from_path`], minus the file errors.
pub fn load_countries_from_reader(reader: impl Read) -> Result<Vec<Country>> {
    let records: Vec<CountryRecord> = serde_json::from_reader(reader)?;
    into_countries(records)
}

/// # Errors
///
/// Same as [`load_countries_from_reader`].
pub fn load_countries_from_str(json: &str) -> Result<Vec<Country>> {
    let records: Vec<CountryRecord> = serde_json::from_str(json)?;
    into_countries(records)
}

fn into_countries(records: Vec<CountryRecord>) -> Result<Vec<Country>> {
    records
        .into_iter()
        .map(|r| r.into_country().map_err(PickerError::from))
        .collect()
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the name
/// ends in `.gz`.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PickerError::NotFound(format!("Country list not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if gzipped {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(PickerError::NotFound(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}
