//! citydb-rs
//! =========
//!
//! Umbrella crate re-exporting [`citydb_core`] so the demos can write
//! `use citydb_rs::prelude::*;`.

pub use citydb_core::*;
