use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// One side of a text diff, read from disk.
#[derive(Debug, Clone, new)]
pub struct DiffInput {
    pub(crate) path: PathBuf,
    pub(crate) content: String,
}

impl DiffInput {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "read diff input");

        Ok(Self::new(path.to_path_buf(), content))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
