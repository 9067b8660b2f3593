//! Minimal edit scripts between two sequences, computed with the linear
//! space variant of Myers' difference algorithm.
//!
//! ```
//! use snakediff::{Diff, find_diff};
//!
//! let a: Vec<char> = "abcabba".chars().collect();
//! let b: Vec<char> = "cbabac".chars().collect();
//! let script = find_diff(&a, &b);
//!
//! assert_eq!(script.distance(), 5);
//! assert_eq!(script.first(), Some(&Diff::remove(2)));
//! assert_eq!(script.apply(&a, &b), b);
//! ```

pub mod algorithm;
pub mod commands;
pub mod script;
pub mod text;

pub use algorithm::{MyersDiff, find_diff, find_diff_by};
pub use script::{Change, Diff, DiffMode, DiffStats, EditScript, Hunk};
