use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::errors::ServiceError;
use crate::storage::json_doc_store::JsonDocStore;

/// File-backed access to the single user's performance document.
///
/// Reads substitute a canonical default when nothing meaningful is stored
/// yet; writes replace the document wholesale with whatever the client sent.
#[derive(Clone)]
pub struct PerformanceStore {
    store: Arc<JsonDocStore>,
}

/// The canonical empty performance document.
pub fn default_document() -> Value {
    json!({
        "progress": {},
        "lastSessionDate": "",
        "dailyUniqueWords": [],
    })
}

/// A stored value of null, false, zero, or an empty string/array/object
/// counts as "no data yet". Missing file, empty file and `{}` are all
/// deliberately indistinguishable to callers.
fn is_empty_document(doc: &Value) -> bool {
    match doc {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

impl PerformanceStore {
    /// Initialize the store for the given file path. The file is created on
    /// the first save, not here.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonDocStore::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Load the performance document, substituting the default shape when
    /// the file is absent or holds an empty value. Never fails on a missing
    /// file.
    pub async fn get(&self) -> Result<Value, ServiceError> {
        let doc = self.store.load().await?;
        if is_empty_document(&doc) {
            return Ok(default_document());
        }
        Ok(doc)
    }

    /// Persist `doc` verbatim, discarding whatever was stored before. No
    /// shape validation is applied.
    pub async fn put(&self, doc: &Value) -> Result<(), ServiceError> {
        self.store.save(doc).await
    }
}
