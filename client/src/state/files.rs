//! Generated file collection and active-file selection.
//!
//! DESIGN
//! ======
//! The collection is only ever replaced wholesale. The active key is either
//! empty or names a file in the current collection; every mutation below
//! keeps that true.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::net::types::{FileItem, FileSet};

/// Filename rendered into the live preview.
pub const PREVIEW_ENTRY: &str = "index.html";

/// Sandbox tokens for the preview iframe.
pub const PREVIEW_SANDBOX: &str = "allow-scripts allow-same-origin allow-forms";

#[derive(Clone, Debug, Default)]
pub struct FilesState {
    files: FileSet,
    active: Option<String>,
}

impl FilesState {
    pub fn files(&self) -> &FileSet {
        &self.files
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_file(&self) -> Option<&FileItem> {
        self.active.as_deref().and_then(|name| self.files.get(name))
    }

    /// Replace the whole collection and select its first file.
    pub fn replace(&mut self, files: FileSet) {
        self.active = files.first_name().map(str::to_owned);
        self.files = files;
    }

    /// Select a file by name. Names outside the collection are ignored.
    pub fn select(&mut self, filename: &str) -> bool {
        if !self.files.contains(filename) {
            return false;
        }
        self.active = Some(filename.to_owned());
        true
    }

    pub fn clear(&mut self) {
        self.files = FileSet::new();
        self.active = None;
    }

    /// HTML for the preview surface, when the collection has an `index.html`.
    pub fn preview_html(&self) -> Option<&str> {
        self.files.get(PREVIEW_ENTRY).map(|file| file.content.as_str())
    }
}
