//! Line oriented diffing of text
//!
//! Text is split into lines (without their terminators) and the lines are
//! diffed as opaque elements.

use crate::algorithm::{find_diff, find_diff_by};
use crate::script::edit_script::EditScript;

pub type LineSet<'t> = Vec<&'t str>;

pub fn lines(text: &str) -> LineSet<'_> {
    text.lines().collect()
}

/// Compares lines with every whitespace character removed.
pub fn eq_ignoring_whitespace(a: &str, b: &str) -> bool {
    a.chars()
        .filter(|c| !c.is_whitespace())
        .eq(b.chars().filter(|c| !c.is_whitespace()))
}

pub fn diff_lines(old: &str, new: &str) -> EditScript {
    TextDiff::compute(old, new, false).into_script()
}

pub fn diff_lines_ignoring_whitespace(old: &str, new: &str) -> EditScript {
    TextDiff::compute(old, new, true).into_script()
}

/// Both sides of a line diff together with the script between them.
#[derive(Debug, Clone)]
pub struct TextDiff<'t> {
    old: LineSet<'t>,
    new: LineSet<'t>,
    script: EditScript,
}

impl<'t> TextDiff<'t> {
    pub fn compute(old: &'t str, new: &'t str, ignore_whitespace: bool) -> Self {
        let (old, new) = (lines(old), lines(new));
        let script = if ignore_whitespace {
            find_diff_by(&old, &new, |a, b| eq_ignoring_whitespace(a, b))
        } else {
            find_diff(&old, &new)
        };

        Self { old, new, script }
    }

    pub fn old_lines(&self) -> &[&'t str] {
        &self.old
    }

    pub fn new_lines(&self) -> &[&'t str] {
        &self.new
    }

    pub fn script(&self) -> &EditScript {
        &self.script
    }

    pub fn into_script(self) -> EditScript {
        self.script
    }
}
