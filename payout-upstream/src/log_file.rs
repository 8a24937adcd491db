//! Append-only file sink for payout diagnostics.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use payout_types::{DiagnosticSink, PayoutLogRecord};

/// Best-effort file sink. One formatted line per record, written with a
/// single append so concurrent requests cannot interleave within a line.
/// Create/write failures are swallowed; diagnostics never fail a request.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(record: &PayoutLogRecord) -> String {
        format!(
            "{} | URL: {} | PAYLOAD: {} | HTTP: {} | ERR: {} | RESP: {}\n",
            record.timestamp.to_rfc3339(),
            record.url,
            record.payload,
            record
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            record.transport_error.as_deref().unwrap_or("-"),
            record.response_excerpt,
        )
    }
}

#[async_trait::async_trait]
impl DiagnosticSink for FileSink {
    async fn append(&self, record: &PayoutLogRecord) {
        let line = Self::format_line(record);

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                let _ = tokio::fs::create_dir_all(dir).await;
            }
        }

        let file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await;

        match file {
            Ok(mut file) => {
                if let Err(err) = file.write_all(line.as_bytes()).await {
                    tracing::debug!(error = %err, "diagnostic log write failed");
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, path = %self.path.display(), "diagnostic log open failed");
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> PayoutLogRecord {
        PayoutLogRecord::new(
            "https://api.feexpay.me/api/payouts/public/free_sn",
            json!({ "phoneNumber": "771234567", "shop": "shop-1" }),
            Some(200),
            None,
            r#"{"ok":true}"#,
        )
    }

    #[tokio::test]
    async fn test_appends_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("feexpay.log"));

        sink.append(&record()).await;
        sink.append(&record()).await;

        let contents = tokio::fs::read_to_string(sink.path()).await.unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("URL: https://api.feexpay.me/api/payouts/public/free_sn"));
        assert!(contents.contains("HTTP: 200"));
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("logs/nested/feexpay.log"));

        sink.append(&record()).await;

        assert!(sink.path().exists());
    }

    #[tokio::test]
    async fn test_transport_error_is_formatted() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("feexpay.log"));

        let rec = PayoutLogRecord::new("http://u", json!({}), None, Some("timed out".into()), "");
        sink.append(&rec).await;

        let contents = tokio::fs::read_to_string(sink.path()).await.unwrap();
        assert!(contents.contains("ERR: timed out"));
        assert!(contents.contains("HTTP: -"));
    }

    #[tokio::test]
    async fn test_unwritable_path_is_silently_ignored() {
        // A directory path cannot be opened as a file; append must not panic.
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path());

        sink.append(&record()).await;
    }
}
