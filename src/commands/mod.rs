//! Command implementations behind the `snakediff` binary
//!
//! Every command reads two text files, diffs them line by line and writes a
//! rendering of the result to the session's writer:
//!
//! - `script`: the raw edit script, one record per line
//! - `patch`: unified hunks with context lines
//! - `stat`: insertion, deletion and distance counts
//!
//! The session owns the output writer so commands can be exercised against
//! an in-memory buffer.

pub mod input;
pub mod patch;
pub mod script;
pub mod session;
pub mod stat;

pub use input::DiffInput;
pub use session::{DiffSession, PatchOptions};
