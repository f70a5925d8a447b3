// crates/countrypicker-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a country list.
///
/// Returned by [`Catalog::stats`](crate::Catalog::stats); counts reflect the
/// list after any whitelist/blacklist narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub countries: usize,
    pub dial_codes: usize,
}
