use crate::commands::input::DiffInput;
use crate::commands::session::DiffSession;
use crate::text::TextDiff;

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

impl DiffSession {
    pub fn stat(&self, old: &DiffInput, new: &DiffInput) -> anyhow::Result<()> {
        let diff = TextDiff::compute(
            old.content(),
            new.content(),
            self.options().ignore_whitespace,
        );
        let stats = diff.script().stats();

        writeln!(
            self.writer(),
            "{}(+), {}(-), distance {}",
            plural(stats.added, "insertion"),
            plural(stats.removed, "deletion"),
            diff.script().distance()
        )?;

        Ok(())
    }
}
