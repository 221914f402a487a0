//! Entities read from the content hub.
//!
//! All of these are owned and mutated by the hub itself; this service only
//! reads them. Creation timestamps are epoch integers whose unit differs per
//! entity and is documented on each field.

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Seconds since epoch.
    pub last_active_at: i64,
}

/// A user group. Membership is a flat list of user ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub user_ids: Vec<String>,
}

/// A chat owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub user_id: String,
    /// Seconds since epoch.
    pub created_at: i64,
}

/// An uploaded file with open-ended metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: String,
    pub user_id: String,
    /// Open JSON mapping that may carry `content_type` (string) and `size`
    /// (bytes). Absent, null, or non-mapping metadata is tolerated
    /// everywhere.
    pub meta: Option<serde_json::Value>,
    /// Seconds since epoch.
    pub created_at: i64,
}

impl FileEntry {
    /// Declared media type, if the metadata mapping carries a string
    /// `content_type`.
    pub fn content_type(&self) -> Option<&str> {
        self.meta.as_ref()?.as_object()?.get("content_type")?.as_str()
    }

    /// Declared byte size, if the metadata mapping carries a numeric `size`.
    ///
    /// Negative declared sizes are treated as absent: storage estimates
    /// must never go below zero.
    pub fn declared_size_bytes(&self) -> Option<f64> {
        let size = self.meta.as_ref()?.as_object()?.get("size")?.as_f64()?;
        (size >= 0.0).then_some(size)
    }
}

/// A knowledge base owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub id: String,
    pub user_id: String,
    /// Seconds since epoch.
    pub created_at: i64,
}

/// A single message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user_id: String,
    /// Nanoseconds since epoch — a finer unit than every other entity.
    /// Window comparisons must convert their bounds before filtering.
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file_with_meta(meta: Option<serde_json::Value>) -> FileEntry {
        FileEntry { id: "f1".to_string(), user_id: "u1".to_string(), meta, created_at: 0 }
    }

    #[test]
    fn test_declared_size_present() {
        let file = file_with_meta(Some(json!({"size": 2_097_152})));
        assert_eq!(file.declared_size_bytes(), Some(2_097_152.0));
    }

    #[test]
    fn test_declared_size_missing_key() {
        let file = file_with_meta(Some(json!({"content_type": "text/plain"})));
        assert_eq!(file.declared_size_bytes(), None);
    }

    #[test]
    fn test_declared_size_absent_meta() {
        assert_eq!(file_with_meta(None).declared_size_bytes(), None);
    }

    #[test]
    fn test_declared_size_malformed_meta() {
        let file = file_with_meta(Some(json!("not a mapping")));
        assert_eq!(file.declared_size_bytes(), None);
    }

    #[test]
    fn test_declared_size_negative_is_absent() {
        let file = file_with_meta(Some(json!({"size": -100})));
        assert_eq!(file.declared_size_bytes(), None);
    }

    #[test]
    fn test_declared_size_non_numeric() {
        let file = file_with_meta(Some(json!({"size": "big"})));
        assert_eq!(file.declared_size_bytes(), None);
    }

    #[test]
    fn test_content_type_present() {
        let file = file_with_meta(Some(json!({"content_type": "image/png"})));
        assert_eq!(file.content_type(), Some("image/png"));
    }

    #[test]
    fn test_content_type_non_string() {
        let file = file_with_meta(Some(json!({"content_type": 42})));
        assert_eq!(file.content_type(), None);
    }
}
