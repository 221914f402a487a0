//! Storage estimation.
//!
//! Converts entity counts and declared file sizes into megabyte figures.
//! Accumulators keep full precision; only [`round2`] rounds, and callers
//! apply it at the presentation step so nested aggregates do not compound
//! rounding error.

use crate::FileEntry;
use crate::constants::{BYTES_PER_MB, CHAT_MB, IMAGE_STORAGE_RATIO, KNOWLEDGE_BASE_MB, MESSAGE_MB};

/// Unrounded storage figures for one scope (global, one user, or a time
/// window).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StorageEstimate {
    /// Sum of declared file sizes, in megabytes.
    pub files_mb: f64,
    pub chat_count: u64,
    pub knowledge_count: u64,
    pub message_count: u64,
}

impl StorageEstimate {
    /// Build an estimate from a scope's files and entity counts.
    pub fn new(
        files: &[FileEntry],
        chat_count: u64,
        knowledge_count: u64,
        message_count: u64,
    ) -> Self {
        Self { files_mb: files_mb(files), chat_count, knowledge_count, message_count }
    }

    pub fn chats_mb(&self) -> f64 {
        self.chat_count as f64 * CHAT_MB
    }

    pub fn knowledge_mb(&self) -> f64 {
        self.knowledge_count as f64 * KNOWLEDGE_BASE_MB
    }

    pub fn messages_mb(&self) -> f64 {
        self.message_count as f64 * MESSAGE_MB
    }

    /// Image storage is a fixed share of file storage for the same scope,
    /// not a direct sum over classified image files.
    pub fn images_mb(&self) -> f64 {
        self.files_mb * IMAGE_STORAGE_RATIO
    }

    /// Scope total. Image storage is an overlay of file storage and is not
    /// added again.
    pub fn total_mb(&self) -> f64 {
        self.files_mb + self.knowledge_mb() + self.chats_mb() + self.messages_mb()
    }
}

/// Sum of declared file sizes in megabytes. Files without a usable declared
/// size contribute nothing.
pub fn files_mb(files: &[FileEntry]) -> f64 {
    files.iter().filter_map(FileEntry::declared_size_bytes).map(|b| b / BYTES_PER_MB).sum()
}

/// Presentation rounding to 2 decimal places, for megabyte figures and
/// percentages alike.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file_of_size(size: i64) -> FileEntry {
        FileEntry {
            id: format!("f-{size}"),
            user_id: "u1".to_string(),
            meta: Some(json!({"size": size})),
            created_at: 0,
        }
    }

    #[test]
    fn test_worked_example_totals_seven_mb() {
        // 3 files of 1 MiB, 2 MiB, and 0 bytes; 2 knowledge bases; 10 chats;
        // 100 messages.
        let files = vec![file_of_size(1_048_576), file_of_size(2_097_152), file_of_size(0)];
        let estimate = StorageEstimate::new(&files, 10, 2, 100);

        assert_eq!(round2(estimate.files_mb), 3.00);
        assert_eq!(round2(estimate.knowledge_mb()), 2.00);
        assert_eq!(round2(estimate.chats_mb()), 1.00);
        assert_eq!(round2(estimate.messages_mb()), 1.00);
        assert_eq!(round2(estimate.total_mb()), 7.00);
    }

    #[test]
    fn test_files_without_size_contribute_zero() {
        let files = vec![
            file_of_size(1_048_576),
            FileEntry { id: "f2".to_string(), user_id: "u1".to_string(), meta: None, created_at: 0 },
            FileEntry {
                id: "f3".to_string(),
                user_id: "u1".to_string(),
                meta: Some(json!({"content_type": "text/plain"})),
                created_at: 0,
            },
        ];
        assert_eq!(files_mb(&files), 1.0);
    }

    #[test]
    fn test_images_mb_is_thirty_percent_of_files() {
        let files = vec![file_of_size(10_485_760)];
        let estimate = StorageEstimate::new(&files, 0, 0, 0);
        assert_eq!(round2(estimate.images_mb()), round2(0.3 * estimate.files_mb));
        assert_eq!(round2(estimate.images_mb()), 3.00);
    }

    #[test]
    fn test_total_excludes_image_overlay() {
        let files = vec![file_of_size(1_048_576)];
        let estimate = StorageEstimate::new(&files, 1, 1, 1);
        assert_eq!(round2(estimate.total_mb()), round2(1.0 + 1.0 + 0.1 + 0.01));
    }

    #[test]
    fn test_total_from_unrounded_intermediates() {
        // 3 × 0.005 MB of messages round to 0.01 each individually, but the
        // total must come from the unrounded sum.
        let files: Vec<FileEntry> = Vec::new();
        let estimate = StorageEstimate::new(&files, 0, 0, 3);
        assert_eq!(round2(estimate.total_mb()), 0.03);
    }

    #[test]
    fn test_empty_scope_is_zero() {
        let estimate = StorageEstimate::default();
        assert_eq!(estimate.total_mb(), 0.0);
        assert_eq!(estimate.images_mb(), 0.0);
    }

    #[test]
    fn test_estimates_never_negative() {
        let files = vec![FileEntry {
            id: "f".to_string(),
            user_id: "u".to_string(),
            meta: Some(json!({"size": -5000})),
            created_at: 0,
        }];
        let estimate = StorageEstimate::new(&files, 0, 0, 0);
        assert!(estimate.files_mb >= 0.0);
        assert!(estimate.total_mb() >= 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(0.0), 0.0);
    }
}
