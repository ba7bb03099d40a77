//! Output formatters: generated documents, diagnostics (human and JSONL)
//! and catalog listings

pub mod document;
pub mod human;
pub mod jsonl;
pub mod listing;

pub use document::write_document;
pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
pub use listing::{ListingHumanFormatter, ListingJsonlFormatter};
