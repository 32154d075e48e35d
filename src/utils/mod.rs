//! Internal helpers shared across the catalog implementations.

pub mod convert;
