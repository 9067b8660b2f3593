//! Edit scripts produced by the diff algorithm
//!
//! - `record`: a single run of kept, added or removed elements
//! - `edit_script`: the compacted, ordered list of records
//! - `hunk`: grouping of changes with surrounding context

pub mod edit_script;
pub mod hunk;
pub mod record;

pub use edit_script::{Change, DiffStats, EditScript};
pub use hunk::Hunk;
pub use record::{Diff, DiffMode};
