use crate::commands::input::DiffInput;
use crate::commands::session::DiffSession;
use crate::text::TextDiff;

impl DiffSession {
    pub fn script(&self, old: &DiffInput, new: &DiffInput) -> anyhow::Result<()> {
        let diff = TextDiff::compute(
            old.content(),
            new.content(),
            self.options().ignore_whitespace,
        );

        for record in diff.script() {
            writeln!(self.writer(), "{record}")?;
        }

        Ok(())
    }
}
