use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use tokio::fs;

use crate::errors::ServiceError;

/// JSON file-backed document accessor.
///
/// Persists a single `serde_json::Value` document at a fixed path. Nothing is
/// cached between operations: every load re-reads the file and every save
/// rewrites it in full. Intended for lightweight single-user state where a
/// database is overkill.
#[derive(Clone)]
pub struct JsonDocStore {
    file_path: PathBuf,
}

impl JsonDocStore {
    /// Create an accessor for the document at `path`. Ensures the parent
    /// directory exists; the file itself is only created by the first save.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }
        Ok(Arc::new(Self { file_path }))
    }

    /// Read and parse the full document.
    ///
    /// A missing or blank file reads as an empty JSON object; malformed
    /// contents are a hard error with no partial result.
    pub async fn load(&self) -> Result<Value, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Value::Object(serde_json::Map::new()));
            }
            Err(e) => return Err(ServiceError::Io(e.to_string())),
        };
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Parse(e.to_string()))
    }

    /// Serialize `doc` pretty-printed (2-space indent, UTF-8 kept as-is) and
    /// replace the file contents in full. The write is not atomic.
    pub async fn save(&self, doc: &Value) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(doc).map_err(|e| ServiceError::Parse(e.to_string()))?;
        fs::write(&self.file_path, data).await.map_err(|e| ServiceError::Io(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tmp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("json_doc_store_{}_{}.json", tag, uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn load_of_missing_file_is_empty_object() -> Result<(), anyhow::Error> {
        let store = JsonDocStore::new(tmp_path("missing")).await?;
        assert_eq!(store.load().await?, json!({}));
        Ok(())
    }

    #[tokio::test]
    async fn load_of_blank_file_is_empty_object() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("blank");
        tokio::fs::write(&tmp, b"  \n").await?;
        let store = JsonDocStore::new(&tmp).await?;
        assert_eq!(store.load().await?, json!({}));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn round_trip_preserves_document_and_key_order() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("roundtrip");
        let store = JsonDocStore::new(&tmp).await?;

        let doc = json!({
            "zebra": {"interval": 3},
            "apfel": {"interval": 1},
            "maus": ["a", "b"],
        });
        store.save(&doc).await?;
        let loaded = store.load().await?;
        assert_eq!(loaded, doc);

        // insertion order survives the disk round trip
        let keys: Vec<&String> = loaded.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zebra", "apfel", "maus"]);

        // on-disk form is pretty-printed with 2-space indentation
        let raw = tokio::fs::read_to_string(&tmp).await?;
        assert!(raw.contains("\n  \"zebra\""));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn save_replaces_prior_contents_in_full() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("replace");
        let store = JsonDocStore::new(&tmp).await?;
        store.save(&json!({"a": 1, "b": 2})).await?;
        store.save(&json!({"c": 3})).await?;
        assert_eq!(store.load().await?, json!({"c": 3}));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("malformed");
        tokio::fs::write(&tmp, b"{not json").await?;
        let store = JsonDocStore::new(&tmp).await?;
        match store.load().await {
            Err(ServiceError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
