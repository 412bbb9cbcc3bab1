use anyhow::{Context, Result};

use catalog_core::logging::init_tracing;
use catalog_core::{build_and_write, project_root, CatalogConfig};

fn main() -> Result<()> {
    init_tracing();

    let config = CatalogConfig::builtin();
    let root = project_root();
    let output = build_and_write(&root, &config)
        .with_context(|| format!("Failed to build ui reference under {}", root.display()))?;

    println!("[build-ui-reference] wrote {}", output.display());
    Ok(())
}
