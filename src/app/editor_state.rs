//! Text buffer and file state for the editor.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// State of the open document.
#[derive(Debug, Default)]
pub struct EditorState {
    /// Document contents
    pub text: String,
    /// Backing file, if the document has one
    file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    modified: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Marks the buffer as having unsaved changes.
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Name shown in the title bar and status bar.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Replaces the buffer with the contents of a file.
    pub fn load_from(&mut self, path: PathBuf) -> Result<()> {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        self.text = text;
        self.file_path = Some(path);
        self.modified = false;
        Ok(())
    }

    /// Writes the buffer to a file and adopts it as the backing file.
    pub fn save_to(&mut self, path: PathBuf) -> Result<()> {
        std::fs::write(&path, &self.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        self.file_path = Some(path);
        self.modified = false;
        Ok(())
    }

    /// Line count of the buffer (at least 1, like the caret position).
    pub fn line_count(&self) -> usize {
        self.text.lines().count().max(1)
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
