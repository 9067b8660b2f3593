use crate::commands::input::DiffInput;
use crate::commands::session::DiffSession;
use crate::script::{DiffMode, Hunk};
use crate::text::TextDiff;
use colored::Colorize;

impl DiffSession {
    pub fn patch(&self, old: &DiffInput, new: &DiffInput) -> anyhow::Result<()> {
        let options = self.options();
        let diff = TextDiff::compute(old.content(), new.content(), options.ignore_whitespace);

        if diff.script().is_identity() {
            return Ok(());
        }

        writeln!(
            self.writer(),
            "{}",
            format!("--- {}", old.path().display()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {}", new.path().display()).bold()
        )?;

        for hunk in diff.script().hunks(options.context) {
            self.print_hunk(&hunk, &diff)?;
        }

        Ok(())
    }

    /// Within a run of changes, removed lines are printed before added ones.
    fn print_hunk(&self, hunk: &Hunk, diff: &TextDiff<'_>) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header().cyan())?;

        let mut pending: Vec<&str> = Vec::new();
        for change in hunk.changes() {
            let old_lines = &diff.old_lines()[change.old_index..];
            match change.mode {
                DiffMode::Keep => {
                    self.print_added(&pending)?;
                    pending.clear();
                    for line in &old_lines[..change.len] {
                        writeln!(self.writer(), " {line}")?;
                    }
                }
                DiffMode::Remove => {
                    for line in &old_lines[..change.len] {
                        writeln!(self.writer(), "{}", format!("-{line}").red())?;
                    }
                }
                DiffMode::Add => pending.extend_from_slice(
                    &diff.new_lines()[change.new_index..change.new_index + change.len],
                ),
            }
        }

        self.print_added(&pending)
    }

    fn print_added(&self, lines: &[&str]) -> anyhow::Result<()> {
        for line in lines {
            writeln!(self.writer(), "{}", format!("+{line}").green())?;
        }

        Ok(())
    }
}
