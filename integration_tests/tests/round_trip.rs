mod common;

use anyhow::Result;
use catalog_core::{build_and_write, CatalogConfig, FixtureKind, Validator};
use catalog_schema::UiReference;

/// A freshly built reference must satisfy the validator's ui_reference rules.
#[test]
fn built_reference_passes_validation() -> Result<()> {
    let root = common::copy_shipped_fixtures()?;
    common::remove_fixture(root.path(), FixtureKind::UiReference)?;
    let config = CatalogConfig::builtin();

    let before = Validator::new(root.path(), &config).run();
    assert_eq!(before.for_fixture("ui_reference").count(), 1);

    let output = build_and_write(root.path(), &config)?;
    assert_eq!(output, config.reference_output_path(root.path()));

    let report = Validator::new(root.path(), &config).run();
    assert!(report.is_pass(), "violations:\n{}", report.render());
    Ok(())
}

#[test]
fn rebuild_overwrites_previous_reference() -> Result<()> {
    let root = common::copy_shipped_fixtures()?;
    let config = CatalogConfig::builtin();
    let output = config.reference_output_path(root.path());
    std::fs::write(&output, "{ truncated")?;

    build_and_write(root.path(), &config)?;

    let written = std::fs::read_to_string(&output)?;
    let reference: UiReference = serde_json::from_str(&written)?;
    assert_eq!(reference.version, config.schema_version);
    assert_eq!(reference.factions.len(), 5);
    assert_eq!(reference.missions.len(), 6);
    assert_eq!(reference.actions.len(), 5);
    assert_eq!(reference.optional_rules.commander_traits.len(), 3);
    assert_eq!(reference.optional_rules.battle_events.len(), 6);
    assert!(reference.glossary.is_empty());
    Ok(())
}

#[test]
fn malformed_source_aborts_without_writing() -> Result<()> {
    let root = common::copy_shipped_fixtures()?;
    let config = CatalogConfig::builtin();
    let output = config.reference_output_path(root.path());
    let original = std::fs::read_to_string(&output)?;
    common::replace_fixture(
        root.path(),
        FixtureKind::Missions,
        &serde_json::json!([{"id": "occupy"}]),
    )?;

    assert!(build_and_write(root.path(), &config).is_err());
    assert_eq!(std::fs::read_to_string(&output)?, original);
    Ok(())
}

/// Whatever the validator lets through, the builder must turn into a reference.
#[test]
fn validator_and_builder_agree_on_odd_scoring_points() -> Result<()> {
    let root = common::copy_shipped_fixtures()?;
    let config = CatalogConfig::builtin();
    common::replace_fixture(
        root.path(),
        FixtureKind::Missions,
        &serde_json::json!([{
            "id": "occupy",
            "name": "Occupy",
            "control_zones": ["left", "right"],
            "scoring_rules": {"points": "zone presence"},
            "round_limit": 4,
            "max_extra_rounds": 2,
            "unique_per_campaign": false,
            "version": "1.0"
        }]),
    )?;

    let report = Validator::new(root.path(), &config).run();
    assert_eq!(
        report.for_fixture("missions").map(ToString::to_string).collect::<Vec<_>>(),
        vec!["[missions] missions[0].scoring_rules.points: must be an object when present, found string"]
    );

    let output = build_and_write(root.path(), &config)?;
    let reference: UiReference = serde_json::from_str(&std::fs::read_to_string(output)?)?;
    assert_eq!(reference.missions.len(), 1);
    assert_eq!(reference.missions[0].scoring_summary, "");
    Ok(())
}

#[test]
fn fractional_stats_are_caught_before_the_build() -> Result<()> {
    let root = common::copy_shipped_fixtures()?;
    let config = CatalogConfig::builtin();
    common::replace_fixture(
        root.path(),
        FixtureKind::Factions,
        &serde_json::json!([{
            "id": "azure_blades",
            "name": "Azure Blades",
            "base_stats": {"move": 5, "range": 2, "aq": 1, "defense": 8.5},
            "traits": ["azure_melee_aq_bonus"],
            "roster_limit": 6,
            "movement_mode": "fixed",
            "version": "1.0"
        }]),
    )?;

    let report = Validator::new(root.path(), &config).run();
    assert_eq!(
        report.for_fixture("factions").map(ToString::to_string).collect::<Vec<_>>(),
        vec!["[factions] factions[0].base_stats.defense: must be a non-negative integer, found 8.5"]
    );
    assert!(build_and_write(root.path(), &config).is_err());
    Ok(())
}
