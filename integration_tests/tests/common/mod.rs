use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use catalog_core::{project_root, CatalogConfig, FixtureKind};
use serde_json::Value;
use tempfile::TempDir;

/// Copies every registered fixture from the repository into a fresh temp root.
pub fn copy_shipped_fixtures() -> Result<TempDir> {
    let dir = tempfile::tempdir().context("failed to create temp fixture root")?;
    let source_root = project_root();
    let config = CatalogConfig::builtin();
    for registration in &config.fixtures {
        let from = registration.resolve(&source_root);
        let to = registration.resolve(dir.path());
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::copy(&from, &to).with_context(|| format!("failed to copy {}", from.display()))?;
    }
    Ok(dir)
}

/// Overwrites the first fixture of `kind` under `root` with `value`.
pub fn replace_fixture(root: &Path, kind: FixtureKind, value: &Value) -> Result<()> {
    let config = CatalogConfig::builtin();
    let registration = config
        .fixture(kind)
        .with_context(|| format!("no {kind} fixture registered"))?;
    let path = registration.resolve(root);
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))
}

pub fn remove_fixture(root: &Path, kind: FixtureKind) -> Result<()> {
    let config = CatalogConfig::builtin();
    let registration = config
        .fixture(kind)
        .with_context(|| format!("no {kind} fixture registered"))?;
    let path = registration.resolve(root);
    fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))
}
