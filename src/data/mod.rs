//! Experience data
//!
//! Raw transaction exports, validation into per-project records, and the
//! file loader standing in for the remote fetch.

pub mod loader;
pub mod records;

pub use loader::{fetch_records, load_records};
pub use records::{ingest, keep_highest_per_project, ExperienceRecord, IngestError, RawTransaction};
