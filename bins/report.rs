//! Diagnostic listing of the library document's top-level properties,
//! printed in numbered groups of ten. Reads the same file the server
//! serves; has no persisted effect.

use std::path::Path;

use anyhow::{bail, Context};
use serde_json::Value;

use service::report;

fn library_path() -> String {
    let cfg = configs::AppConfig::load_and_validate()
        .unwrap_or_else(|_| configs::AppConfig::from_env());
    cfg.storage.library_path
}

fn main() -> anyhow::Result<()> {
    // Optional positional override of the configured library path
    let path = std::env::args().nth(1).unwrap_or_else(library_path);

    if !Path::new(&path).exists() {
        bail!("file not found: {path}");
    }
    let contents = std::fs::read_to_string(&path).with_context(|| format!("cannot read {path}"))?;
    let doc: Value =
        serde_json::from_str(&contents).with_context(|| format!("invalid JSON in {path}"))?;

    let props = report::properties(&doc)?;
    for line in report::grouped_lines(&props) {
        println!("{line}");
    }
    Ok(())
}
