use serde::{Deserialize, Serialize};

/// Результат сравнения двух файлов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowCounts {
    /// Количество строк B, отсутствующих в A
    pub new_rows_count: u64,
    /// Количество строк A, отсутствующих в B
    pub non_existing_rows_count: u64,
}

/// Ответ `/process` со статусом 2xx.
///
/// The server flags logical failures (bad upload, unknown key column) with an
/// `error` field. A body carrying `error` is a rejection even when counts are
/// present too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessReply {
    Rejected { error: String },
    Counts(RowCounts),
}

/// Тело ответа сервера при статусе, отличном от 2xx
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Extract the server's `error` text from a raw response body
    pub fn parse(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_reply() {
        let body = r#"{"new_rows_count": 5, "non_existing_rows_count": 2}"#;
        let reply: ProcessReply = serde_json::from_str(body).unwrap();
        assert_eq!(
            reply,
            ProcessReply::Counts(RowCounts {
                new_rows_count: 5,
                non_existing_rows_count: 2,
            })
        );
    }

    #[test]
    fn test_error_reply() {
        let body = r#"{"error": "Invalid file format"}"#;
        let reply: ProcessReply = serde_json::from_str(body).unwrap();
        assert_eq!(
            reply,
            ProcessReply::Rejected {
                error: "Invalid file format".to_string()
            }
        );
    }

    #[test]
    fn test_error_wins_over_counts() {
        let body = r#"{
            "error": "Key column 'id' not found in file A",
            "new_rows_count": 1,
            "non_existing_rows_count": 0
        }"#;
        let reply: ProcessReply = serde_json::from_str(body).unwrap();
        assert!(matches!(reply, ProcessReply::Rejected { .. }));
    }

    #[test]
    fn test_incomplete_reply_is_rejected_by_decoder() {
        assert!(serde_json::from_str::<ProcessReply>(r#"{"new_rows_count": 5}"#).is_err());
        assert!(serde_json::from_str::<ProcessReply>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<ProcessReply>(r#"[]"#).is_err());
    }

    #[test]
    fn test_error_body_parse() {
        assert_eq!(
            ErrorBody::parse(r#"{"error": "Error reading Excel file: bad zip"}"#).as_deref(),
            Some("Error reading Excel file: bad zip")
        );
        assert_eq!(ErrorBody::parse("<html>Internal Server Error</html>"), None);
    }
}
