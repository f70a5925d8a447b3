//! countrypicker-rs
//!
//! Umbrella crate re-exporting [`countrypicker_core`]; it hosts the runnable
//! demos under `demos/`.
pub use countrypicker_core::*;
