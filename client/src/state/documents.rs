//! Document-list state for the dashboard overview and documents pages.
//!
//! DESIGN
//! ======
//! Separating list inventory from per-document views keeps uploads, deletes,
//! and reloads editing one model that both pages render from.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::types::{ApiError, FileRecord};

/// Number of files shown in the overview's "recent" strip.
pub const RECENT_LIMIT: usize = 5;

/// Uploaded documents for the signed-in user, newest first.
#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    pub items: Vec<FileRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DocumentsState {
    /// Replace the list with a fetch result. Errors keep the previous items.
    pub fn apply_list(&mut self, result: Result<Vec<FileRecord>, ApiError>) {
        self.loading = false;
        match result {
            Ok(mut items) => {
                items.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Put a freshly uploaded file at the front, replacing any entry with the same id.
    pub fn insert_uploaded(&mut self, record: FileRecord) {
        self.items.retain(|f| f.id != record.id);
        self.items.insert(0, record);
    }

    /// Drop `file_id` from the list. Returns whether anything was removed.
    pub fn remove(&mut self, file_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|f| f.id != file_id);
        self.items.len() != before
    }

    pub fn find(&self, file_id: &str) -> Option<&FileRecord> {
        self.items.iter().find(|f| f.id == file_id)
    }

    pub fn recent(&self) -> &[FileRecord] {
        &self.items[..self.items.len().min(RECENT_LIMIT)]
    }
}
