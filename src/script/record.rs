use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffMode {
    /// Elements present in both sequences.
    Keep,
    /// Elements inserted from the new sequence.
    Add,
    /// Elements removed from the old sequence.
    Remove,
}

impl DiffMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffMode::Keep => "keep",
            DiffMode::Add => "add",
            DiffMode::Remove => "remove",
        }
    }

    /// Whether a run of this mode advances through the old sequence.
    pub fn consumes_old(&self) -> bool {
        matches!(self, DiffMode::Keep | DiffMode::Remove)
    }

    /// Whether a run of this mode advances through the new sequence.
    pub fn consumes_new(&self) -> bool {
        matches!(self, DiffMode::Keep | DiffMode::Add)
    }
}

/// A run of `len` elements sharing the same [`DiffMode`].
///
/// `pos_b` is only meaningful for [`DiffMode::Add`], where it is the index in
/// the new sequence of the first inserted element. Keep and Remove runs are
/// positioned by the lengths of the records before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Diff {
    pub mode: DiffMode,
    pub len: usize,
    pub pos_b: usize,
}

impl Diff {
    pub fn keep(len: usize) -> Self {
        Self::new(DiffMode::Keep, len, 0)
    }

    pub fn add(len: usize, pos_b: usize) -> Self {
        Self::new(DiffMode::Add, len, pos_b)
    }

    pub fn remove(len: usize) -> Self {
        Self::new(DiffMode::Remove, len, 0)
    }

    pub fn is_change(&self) -> bool {
        self.mode != DiffMode::Keep
    }
}

impl Display for Diff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mode {
            DiffMode::Add => write!(f, "{} {} @{}", self.mode.as_str(), self.len, self.pos_b),
            _ => write!(f, "{} {}", self.mode.as_str(), self.len),
        }
    }
}
