use crate::script::edit_script::Change;
use crate::script::record::DiffMode;

/// A group of nearby changes with their surrounding context.
///
/// Starts are 0-based indices into the old (`a`) and new (`b`) sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    a_start: usize,
    b_start: usize,
    a_size: usize,
    b_size: usize,
    changes: Vec<Change>,
}

impl Hunk {
    fn starting_at(a_start: usize, b_start: usize) -> Self {
        Self {
            a_start,
            b_start,
            a_size: 0,
            b_size: 0,
            changes: Vec::new(),
        }
    }

    fn push(&mut self, change: Change) {
        if change.len == 0 {
            return;
        }
        if change.mode.consumes_old() {
            self.a_size += change.len;
        }
        if change.mode.consumes_new() {
            self.b_size += change.len;
        }
        self.changes.push(change);
    }

    /// Pushes the first `len` elements of a kept run.
    fn push_head(&mut self, change: &Change, len: usize) {
        self.push(Change {
            len: len.min(change.len),
            ..*change
        });
    }

    /// Opens a hunk with the last `len` elements of a kept run.
    fn from_tail(change: &Change, len: usize) -> Self {
        let len = len.min(change.len);
        let skip = change.len - len;
        let mut hunk = Self::starting_at(change.old_index + skip, change.new_index + skip);
        hunk.push(Change {
            mode: DiffMode::Keep,
            old_index: change.old_index + skip,
            new_index: change.new_index + skip,
            len,
        });
        hunk
    }

    /// 1-based start line as shown in a unified hunk header; an empty side
    /// points at the line before it.
    pub fn a_start(&self) -> usize {
        if self.a_size == 0 {
            self.a_start
        } else {
            self.a_start + 1
        }
    }

    pub fn b_start(&self) -> usize {
        if self.b_size == 0 {
            self.b_start
        } else {
            self.b_start + 1
        }
    }

    pub fn a_size(&self) -> usize {
        self.a_size
    }

    pub fn b_size(&self) -> usize {
        self.b_size
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start(),
            self.a_size(),
            self.b_start(),
            self.b_size()
        )
    }
}

pub(crate) fn group_hunks(changes: &[Change], context: usize) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut current: Option<Hunk> = None;
    let last = changes.len().saturating_sub(1);

    for (i, change) in changes.iter().enumerate() {
        if change.mode != DiffMode::Keep {
            current
                .get_or_insert_with(|| Hunk::starting_at(change.old_index, change.new_index))
                .push(*change);
            continue;
        }

        current = match current.take() {
            None if i == last => None,
            None => Some(Hunk::from_tail(change, context)),
            Some(mut hunk) if i != last && change.len <= 2 * context => {
                hunk.push(*change);
                Some(hunk)
            }
            Some(mut hunk) => {
                hunk.push_head(change, context);
                hunks.push(hunk);
                (i != last).then(|| Hunk::from_tail(change, context))
            }
        };
    }

    if let Some(hunk) = current {
        hunks.push(hunk);
    }

    hunks
}
