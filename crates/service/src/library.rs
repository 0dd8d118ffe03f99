use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::ServiceError;
use crate::storage::json_doc_store::JsonDocStore;

/// Read-only access to the static vocabulary library document.
///
/// The document is opaque to the server: no field is inspected or validated,
/// and whatever JSON the file holds is served as-is.
#[derive(Clone)]
pub struct LibraryStore {
    store: Arc<JsonDocStore>,
}

impl LibraryStore {
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonDocStore::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Load the library document; a missing file reads as `{}`.
    pub async fn get(&self) -> Result<Value, ServiceError> {
        self.store.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tmp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("library_store_{}_{}.json", tag, uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_library_reads_as_empty_object() -> Result<(), anyhow::Error> {
        let store = LibraryStore::new(tmp_path("missing")).await?;
        assert_eq!(store.get().await?, json!({}));
        Ok(())
    }

    #[tokio::test]
    async fn array_library_is_served_unchanged() -> Result<(), anyhow::Error> {
        let tmp = tmp_path("array");
        tokio::fs::write(&tmp, br#"["a","b","c"]"#).await?;
        let store = LibraryStore::new(&tmp).await?;
        assert_eq!(store.get().await?, json!(["a", "b", "c"]));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
