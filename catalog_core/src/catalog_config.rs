//! Fixed registry of catalogue fixtures and the reference output location.
//!
//! Loaded from the builtin `catalog_config.json`; alternate documents can be
//! supplied through [`CatalogConfig::from_file`] when pointing the tools at a
//! different fixture tree.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use thiserror::Error;

pub const BUILTIN_CATALOG_CONFIG: &str = include_str!("data/catalog_config.json");

/// Shape family of a fixture file; selects the validation rules applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKind {
    SaveMatch,
    CommandLog,
    MatchState,
    Commands,
    OptionalRulesConfig,
    Factions,
    Missions,
    TerrainTemplates,
    CommanderTraits,
    BattleEvents,
    Advantages,
    RngSeed,
    UiReference,
}

impl FixtureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureKind::SaveMatch => "save_match",
            FixtureKind::CommandLog => "command_log",
            FixtureKind::MatchState => "match_state",
            FixtureKind::Commands => "commands",
            FixtureKind::OptionalRulesConfig => "optional_rules_config",
            FixtureKind::Factions => "factions",
            FixtureKind::Missions => "missions",
            FixtureKind::TerrainTemplates => "terrain_templates",
            FixtureKind::CommanderTraits => "commander_traits",
            FixtureKind::BattleEvents => "battle_events",
            FixtureKind::Advantages => "advantages",
            FixtureKind::RngSeed => "rng_seed",
            FixtureKind::UiReference => "ui_reference",
        }
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical fixture name bound to a path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixtureRegistration {
    pub name: String,
    pub path: PathBuf,
    pub kind: FixtureKind,
}

impl FixtureRegistration {
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub schema_version: String,
    pub reference_output: PathBuf,
    pub fixtures: Vec<FixtureRegistration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            schema_version: "0.1.0".to_string(),
            reference_output: PathBuf::from("docs/data-definition/exports/ui_reference.json"),
            fixtures: Vec::new(),
        }
    }
}

impl CatalogConfig {
    pub fn builtin() -> Arc<Self> {
        Arc::new(
            serde_json::from_str(BUILTIN_CATALOG_CONFIG)
                .expect("builtin catalog config should parse"),
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogConfigError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = CatalogConfig::from_json_str(&contents)?;
        tracing::info!(
            target: "catalog::config",
            path = %path.display(),
            fixtures = config.fixtures.len(),
            "catalog_config.loaded=file"
        );
        Ok(config)
    }

    /// First registration of the given kind; per-mission variants share a kind
    /// with their base fixture and are only reachable through [`Self::fixtures_of`].
    pub fn fixture(&self, kind: FixtureKind) -> Option<&FixtureRegistration> {
        self.fixtures.iter().find(|entry| entry.kind == kind)
    }

    pub fn fixtures_of(&self, kind: FixtureKind) -> impl Iterator<Item = &FixtureRegistration> {
        self.fixtures.iter().filter(move |entry| entry.kind == kind)
    }

    pub fn reference_output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.reference_output)
    }
}

#[derive(Debug, Error)]
pub enum CatalogConfigError {
    #[error("failed to parse catalog config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read catalog config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_parses() {
        let config = CatalogConfig::builtin();
        assert_eq!(config.schema_version, "0.1.0");
        assert!(config.fixture(FixtureKind::Factions).is_some());
        assert_eq!(config.fixtures_of(FixtureKind::MatchState).count(), 3);
    }

    #[test]
    fn builtin_reference_output_is_validated() {
        let config = CatalogConfig::builtin();
        let registered = config
            .fixture(FixtureKind::UiReference)
            .expect("ui reference registered");
        assert_eq!(registered.path, config.reference_output);
    }

    #[test]
    fn builtin_fixture_names_are_unique() {
        let config = CatalogConfig::builtin();
        let mut names: Vec<&str> = config.fixtures.iter().map(|f| f.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = CatalogConfig::from_json_str("{}").expect("empty config parses");
        assert_eq!(config.schema_version, "0.1.0");
        assert!(config.fixtures.is_empty());
    }

    #[test]
    fn unknown_fixture_kind_is_rejected() {
        let err = CatalogConfig::from_json_str(
            r#"{"fixtures": [{"name": "x", "path": "x.json", "kind": "weather"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogConfigError::Parse(_)));
    }
}
