// crates/countrypicker-core/src/lib.rs

//! countrypicker-core
//! ==================
//!
//! The data and selection model behind country picker widgets, independent
//! of any UI toolkit:
//!
//! - [`Country`]: validated value object (name, ISO alpha-2 code, flag, dial code)
//! - [`all_countries`] / [`Catalog`]: the built-in sorted catalog and custom lists
//! - [`filter`] / [`CountrySearch`]: keystroke filtering, lookups, ranked search
//! - [`PickerSession`]: pre-selection, single-fire selection and dismissal
//!
//! ```rust
//! use countrypicker_core::prelude::*;
//!
//! let hits = filter(all_countries(), "united");
//! assert!(hits.iter().any(|c| c.code() == "GB"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod common;
pub mod error;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod session;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::catalog::{all_countries, Catalog};
pub use crate::common::CatalogStats;
pub use crate::error::{InvalidCountry, PickerError, Result};
pub use crate::model::{flag_for_code, Country};
pub use crate::search::{filter, CountrySearch, SmartHit};
pub use crate::session::{PickerOptions, PickerRow, PickerSession, PickerState, SessionSnapshot};
