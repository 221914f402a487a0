//! File media-type classification.

use crate::FileEntry;

/// Media types counted as images. Exact literals only — no wildcard or
/// prefix matching.
pub const IMAGE_CONTENT_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/gif", "image/webp"];

/// Whether a file's metadata declares one of the recognized image types.
///
/// Missing metadata, non-mapping metadata, a missing `content_type` key, or
/// any unrecognized value all classify as not-image.
pub fn is_image(file: &FileEntry) -> bool {
    file.content_type().is_some_and(|ct| IMAGE_CONTENT_TYPES.contains(&ct))
}

/// Number of image files in a scope.
pub fn count_images(files: &[FileEntry]) -> u64 {
    files.iter().filter(|f| is_image(f)).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file(meta: Option<serde_json::Value>) -> FileEntry {
        FileEntry { id: "f".to_string(), user_id: "u".to_string(), meta, created_at: 0 }
    }

    #[test]
    fn test_recognized_types_are_images() {
        for ct in IMAGE_CONTENT_TYPES {
            assert!(is_image(&file(Some(json!({"content_type": ct})))), "{ct} should classify");
        }
    }

    #[test]
    fn test_unrecognized_type_is_not_image() {
        assert!(!is_image(&file(Some(json!({"content_type": "image/svg+xml"})))));
        assert!(!is_image(&file(Some(json!({"content_type": "application/pdf"})))));
    }

    #[test]
    fn test_case_sensitive_no_prefix_match() {
        assert!(!is_image(&file(Some(json!({"content_type": "IMAGE/PNG"})))));
        assert!(!is_image(&file(Some(json!({"content_type": "image/png; charset=binary"})))));
    }

    #[test]
    fn test_missing_meta_is_not_image() {
        assert!(!is_image(&file(None)));
    }

    #[test]
    fn test_malformed_meta_is_not_image() {
        assert!(!is_image(&file(Some(json!(["not", "a", "mapping"])))));
        assert!(!is_image(&file(Some(json!(null)))));
    }

    #[test]
    fn test_count_images_narrows_only() {
        let files = vec![
            file(Some(json!({"content_type": "image/png"}))),
            file(Some(json!({"content_type": "text/plain"}))),
            file(None),
        ];
        let images = count_images(&files);
        assert_eq!(images, 1);
        assert!(images <= files.len() as u64);
    }
}
