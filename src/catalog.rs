#![forbid(unsafe_code)]

//! Rule sources, profiles and the catalog that holds them

pub mod builtin;
mod profile;
mod registry;
mod source;

// Re-export core types
pub use profile::Profile;
pub use registry::Catalog;
pub use source::RuleSource;
