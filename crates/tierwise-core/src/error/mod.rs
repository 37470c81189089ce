//! Error types for Tierwise
//!
//! Build-time problems (a bad catalog, bad plans, unreadable files) are
//! fatal and abort registry construction. Lookup misses are recoverable and
//! are always handed back to the caller as explicit values.

mod constructors;
mod types;

pub use types::{RegistryError, RegistryResult, ResourceType};
