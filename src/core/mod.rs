// Public modules
pub mod catalog;
pub mod docs;
pub mod error;
pub mod invoke;
pub mod schema;

// Internal modules - not part of public API
pub(crate) mod functions;

// Re-export common types for convenience
pub use catalog::{Example, HelperEntry, HelperFn, HelperRegistry, HelperSpec};
pub use docs::{ExampleDoc, HelperDoc, ParamDoc};
pub use error::{Error, ErrorCode, Result};
pub use invoke::{Argument, HelperOutcome};
pub use schema::{Param, ParamType};
