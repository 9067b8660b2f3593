use crate::script::hunk::{Hunk, group_hunks};
use crate::script::record::{Diff, DiffMode};
use std::ops::Deref;

/// Ordered list of [`Diff`] records turning an old sequence into a new one.
///
/// Records are kept compact: no record is empty and no two neighbours share
/// the same mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript(Vec<Diff>);

/// Element counts per mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub kept: usize,
    pub added: usize,
    pub removed: usize,
}

/// A record annotated with where it starts in both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub mode: DiffMode,
    pub old_index: usize,
    pub new_index: usize,
    pub len: usize,
}

impl EditScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, merging it into the last one when they are of the
    /// same mode. Inserted runs only merge when their sources in the new
    /// sequence are contiguous.
    pub(crate) fn append(&mut self, diff: Diff) {
        if diff.len == 0 {
            return;
        }

        if let Some(last) = self.0.last_mut() {
            if last.mode == diff.mode
                && (diff.mode != DiffMode::Add || last.pos_b + last.len == diff.pos_b)
            {
                last.len += diff.len;
                return;
            }
        }

        self.0.push(diff);
    }

    pub fn as_slice(&self) -> &[Diff] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Diff> {
        self.0
    }

    /// Number of inserted plus removed elements.
    pub fn distance(&self) -> usize {
        self.0
            .iter()
            .filter(|diff| diff.is_change())
            .map(|diff| diff.len)
            .sum()
    }

    pub fn stats(&self) -> DiffStats {
        self.0
            .iter()
            .fold(DiffStats::default(), |mut stats, diff| {
                match diff.mode {
                    DiffMode::Keep => stats.kept += diff.len,
                    DiffMode::Add => stats.added += diff.len,
                    DiffMode::Remove => stats.removed += diff.len,
                }
                stats
            })
    }

    /// Whether the script leaves the old sequence untouched.
    pub fn is_identity(&self) -> bool {
        self.0.iter().all(|diff| !diff.is_change())
    }

    /// Walks the records, tracking the position reached in both sequences.
    pub fn changes(&self) -> impl Iterator<Item = Change> + '_ {
        self.0.iter().scan((0usize, 0usize), |(old, new), diff| {
            let change = Change {
                mode: diff.mode,
                old_index: *old,
                new_index: *new,
                len: diff.len,
            };

            if diff.mode.consumes_old() {
                *old += diff.len;
            }
            if diff.mode.consumes_new() {
                *new += diff.len;
            }

            Some(change)
        })
    }

    /// Groups the changes into hunks surrounded by up to `context` kept
    /// elements on each side.
    pub fn hunks(&self, context: usize) -> Vec<Hunk> {
        group_hunks(&self.changes().collect::<Vec<_>>(), context)
    }

    /// Rebuilds the new sequence from the old one.
    ///
    /// Kept elements are taken from `a`, inserted ones from `b`.
    ///
    /// # Panics
    ///
    /// Panics if the script was not produced for these two sequences.
    pub fn apply<T: Clone>(&self, a: &[T], b: &[T]) -> Vec<T> {
        let mut result = Vec::with_capacity(b.len());
        let mut pos_a = 0;

        for diff in &self.0 {
            match diff.mode {
                DiffMode::Keep => {
                    result.extend_from_slice(&a[pos_a..pos_a + diff.len]);
                    pos_a += diff.len;
                }
                DiffMode::Remove => pos_a += diff.len,
                DiffMode::Add => result.extend_from_slice(&b[diff.pos_b..diff.pos_b + diff.len]),
            }
        }

        result
    }
}

impl Deref for EditScript {
    type Target = [Diff];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Diff]> for EditScript {
    fn as_ref(&self) -> &[Diff] {
        &self.0
    }
}

impl IntoIterator for EditScript {
    type Item = Diff;
    type IntoIter = std::vec::IntoIter<Diff>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'s> IntoIterator for &'s EditScript {
    type Item = &'s Diff;
    type IntoIter = std::slice::Iter<'s, Diff>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<EditScript> for Vec<Diff> {
    fn from(script: EditScript) -> Self {
        script.0
    }
}
