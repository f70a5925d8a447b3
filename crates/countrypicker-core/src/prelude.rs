//! countrypicker prelude: bring common types and traits into scope for demos.

pub use crate::catalog::{all_countries, Catalog};
pub use crate::error::{InvalidCountry, PickerError, Result};
#[cfg(feature = "json")]
pub use crate::loader::{load_countries_from_path, load_countries_from_str};
pub use crate::model::{flag_for_code, Country};
pub use crate::search::{filter, CountrySearch, SmartHit};
pub use crate::session::{PickerOptions, PickerRow, PickerSession, PickerState, SessionSnapshot};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::NameMatch;
