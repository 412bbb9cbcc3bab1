mod common;

use anyhow::Result;
use catalog_core::reference::{ReferenceBuilder, ReferenceSources};
use catalog_core::{CatalogConfig, FixtureKind, Validator};
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn repeated_validation_renders_identically() -> Result<()> {
    let root = common::copy_shipped_fixtures()?;
    common::replace_fixture(
        root.path(),
        FixtureKind::Commands,
        &json!([{"id": "cmd-1", "sequence": "one", "type": "move", "rng_offset_before": 0}]),
    )?;
    common::remove_fixture(root.path(), FixtureKind::Advantages)?;
    let config = CatalogConfig::builtin();

    let first = Validator::new(root.path(), &config).run();
    let second = Validator::new(root.path(), &config).run();

    assert!(!first.is_pass());
    assert_eq!(first.render(), second.render());
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn build_is_a_pure_function_of_sources_and_time() -> Result<()> {
    let root = common::copy_shipped_fixtures()?;
    let config = CatalogConfig::builtin();
    let sources = ReferenceSources::load(root.path(), &config)?;
    let stamp = Utc
        .with_ymd_and_hms(2026, 10, 19, 9, 0, 0)
        .single()
        .expect("valid timestamp");

    let builder = ReferenceBuilder::new(&config);
    let a = serde_json::to_string_pretty(&builder.build(&sources, stamp))?;
    let b = serde_json::to_string_pretty(&builder.build(&sources, stamp))?;
    assert_eq!(a, b);
    Ok(())
}
