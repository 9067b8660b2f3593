use std::ops::{Index, IndexMut};

/// Furthest reaching x-coordinate per diagonal of the edit graph.
///
/// Diagonals are signed (`k = x - y`), so the backing storage is a flat
/// buffer addressed through a symmetric offset: diagonal `k` lives at
/// `k + offset`. A buffer built for a problem of total size `N + M` covers
/// every diagonal from `-(N + M)` to `N + M`, which is enough for every
/// sub-problem the recursion carves out of it.
#[derive(Debug, Clone)]
pub(crate) struct Diagonals {
    offset: isize,
    v: Vec<isize>,
}

impl Diagonals {
    pub(crate) fn new(max: usize) -> Self {
        Self {
            offset: max as isize,
            v: vec![0; 2 * max + 1],
        }
    }

    pub(crate) fn span(&self) -> isize {
        self.offset
    }

    fn slot(&self, k: isize) -> usize {
        debug_assert!(
            -self.offset <= k && k <= self.offset,
            "diagonal {k} outside of [-{0}, {0}]",
            self.offset
        );
        (k + self.offset) as usize
    }
}

impl Index<isize> for Diagonals {
    type Output = isize;

    fn index(&self, k: isize) -> &Self::Output {
        &self.v[self.slot(k)]
    }
}

impl IndexMut<isize> for Diagonals {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        let slot = self.slot(k);
        &mut self.v[slot]
    }
}
