use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::io::Write;

pub const DEFAULT_CONTEXT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct PatchOptions {
    /// Kept lines shown around each hunk.
    pub context: usize,
    /// Compare lines with all whitespace removed.
    pub ignore_whitespace: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT, false)
    }
}

pub struct DiffSession {
    writer: RefCell<Box<dyn Write>>,
    options: PatchOptions,
}

impl DiffSession {
    pub fn new(writer: Box<dyn Write>, options: PatchOptions) -> Self {
        Self {
            writer: RefCell::new(writer),
            options,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn options(&self) -> PatchOptions {
        self.options
    }
}
