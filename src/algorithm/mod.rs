//! Linear space variant of Myers' O(ND) difference algorithm
//!
//! See "An O(ND) Difference Algorithm and Its Variations" (Myers, 1986).
//!
//! - `diagonal`: diagonal-indexed working arrays shared by the whole search
//! - `snake`: extension of a furthest reaching path along one diagonal
//! - `middle_snake`: simultaneous forward and reverse search
//! - `recursion`: divide and conquer driver emitting the edit script
//!
//! Time is O((N+M)D) and the only allocation is two arrays of `2(N+M)+1`
//! diagonals made up front; the recursion reuses them at every level.

mod diagonal;
mod middle_snake;
mod recursion;
mod snake;

pub use recursion::{MyersDiff, find_diff, find_diff_by};
