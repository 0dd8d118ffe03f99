//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected files and directories exist at startup.

use std::path::Path;
use tracing::warn;

/// Ensure the user-data directory exists; warn when the library file is
/// missing (the library endpoint then serves an empty document).
pub async fn ensure_env(library_path: &str, user_data_path: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(library_path).await.is_err() {
        warn!(%library_path, "library file not found; /api/library will serve an empty document");
    }
    if let Some(parent) = Path::new(user_data_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
