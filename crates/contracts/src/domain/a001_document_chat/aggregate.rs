use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Who authored a chat turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One message of the conversation, in the shape the chat endpoint expects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// File uploaded within a session, as listed by `/api/files/list`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileDescriptor {
    pub file_id: String,
    pub filename: String,
    /// Size in bytes
    pub size: u64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Parse a server timestamp.
///
/// Accepts RFC 3339 (`2024-03-15T14:02:26Z`) and naive ISO timestamps without an offset
/// (`2024-03-15T14:02:26.123456`), the latter read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

pub(crate) mod timestamp {
    use super::*;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_role_wire_names() {
        let turn = ChatTurn::user("hi");
        let json = serde_json::to_string(&turn).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);

        let back: ChatTurn =
            serde_json::from_str(r#"{"role":"assistant","content":"ok"}"#).unwrap();
        assert_eq!(back, ChatTurn::assistant("ok"));
    }

    #[test]
    fn test_descriptor_with_naive_timestamp() {
        let raw = r#"{
            "file_id": "file_01",
            "filename": "report.pdf",
            "size": 2097152,
            "mime_type": "application/pdf",
            "created_at": "2024-03-15T14:02:26.123456"
        }"#;
        let d: FileDescriptor = serde_json::from_str(raw).unwrap();
        assert_eq!(d.filename, "report.pdf");
        assert_eq!(d.size, 2 * 1024 * 1024);
        assert_eq!(d.created_at.day(), 15);
        assert_eq!(d.created_at.hour(), 14);
        assert_eq!(d.mime_type.as_deref(), Some("application/pdf"));
    }

    #[test]
    fn test_descriptor_without_mime_type() {
        let raw = r#"{"file_id":"f","filename":"a.txt","size":1,"created_at":"2024-12-31T23:59:59Z"}"#;
        let d: FileDescriptor = serde_json::from_str(raw).unwrap();
        assert!(d.mime_type.is_none());
        assert_eq!(d.created_at.year(), 2024);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-03-15T14:02:26+03:00").is_some());
        assert!(parse_timestamp("2024-03-15T14:02:26").is_some());
    }
}
