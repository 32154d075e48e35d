//! Helper function registry and invoker for configuration templating.
//!
//! A templating engine resolving `${...}` expressions hands this crate a
//! function name, a list of pre-evaluated argument nodes, the original
//! snippet text, and a partial-resolution flag; it gets back an envelope
//! holding either the resolved value or a structured error. See
//! [`HelperRegistry::call`] for the invocation contract and
//! [`HelperRegistry::docs`] for the documentation boundary.

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
pub use core::*;
