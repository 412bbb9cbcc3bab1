//! UI reference builder.
//!
//! Derives the normalized glossary document from the faction, mission,
//! commander trait and battle event fixtures. Derivation is pure; the only side
//! effect is the final atomic write in [`write_reference`].

pub mod actions;
pub mod deltas;
pub mod notes;
pub mod requirements;
pub mod scoring;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use catalog_schema::{
    Faction, FactionEntry, Mission, MissionEntry, OptionalRulesReference, RuleCard, RuleCardEntry,
    UiReference,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::catalog_config::{CatalogConfig, FixtureKind};
use crate::fixtures::{self, FixtureReadError};

use self::deltas::{DeltaDrift, RoundDeltaTable};
use self::requirements::{
    RequirementTable, BATTLE_EVENT_REQUIREMENTS, COMMANDER_TRAIT_REQUIREMENTS,
    FACTION_REQUIREMENTS, MISSION_REQUIREMENTS,
};

#[derive(Debug, Error)]
pub enum ReferenceBuildError {
    #[error("no {kind} fixture is registered in the catalog config")]
    MissingFixture { kind: FixtureKind },
    #[error(transparent)]
    Fixture(#[from] FixtureReadError),
    #[error("failed to serialize ui reference: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write ui reference to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Raw fixture records the reference is derived from.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSources {
    pub factions: Vec<Faction>,
    pub missions: Vec<Mission>,
    pub commander_traits: Vec<RuleCard>,
    pub battle_events: Vec<RuleCard>,
}

impl ReferenceSources {
    pub fn load(root: &Path, config: &CatalogConfig) -> Result<Self, ReferenceBuildError> {
        Ok(Self {
            factions: load_list(root, config, FixtureKind::Factions)?,
            missions: load_list(root, config, FixtureKind::Missions)?,
            commander_traits: load_list(root, config, FixtureKind::CommanderTraits)?,
            battle_events: load_list(root, config, FixtureKind::BattleEvents)?,
        })
    }
}

fn load_list<T: DeserializeOwned>(
    root: &Path,
    config: &CatalogConfig,
    kind: FixtureKind,
) -> Result<Vec<T>, ReferenceBuildError> {
    let registration = config
        .fixture(kind)
        .ok_or(ReferenceBuildError::MissingFixture { kind })?;
    let records: Vec<T> = fixtures::read_typed(&registration.resolve(root))?;
    tracing::debug!(
        target: "catalog::reference",
        fixture = %registration.name,
        records = records.len(),
        "reference.source_loaded"
    );
    Ok(records)
}

pub struct ReferenceBuilder {
    schema_version: String,
    deltas: RoundDeltaTable,
}

impl ReferenceBuilder {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            schema_version: config.schema_version.clone(),
            deltas: RoundDeltaTable::builtin(),
        }
    }

    pub fn with_deltas(mut self, deltas: RoundDeltaTable) -> Self {
        self.deltas = deltas;
        self
    }

    /// Builds the document; identical sources and timestamp give an identical result.
    pub fn build(&self, sources: &ReferenceSources, generated_at: DateTime<Utc>) -> UiReference {
        self.report_delta_drift(&sources.missions);

        UiReference {
            version: self.schema_version.clone(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            factions: sources.factions.iter().map(faction_entry).collect(),
            actions: actions::action_entries(),
            missions: sources
                .missions
                .iter()
                .map(|mission| mission_entry(mission, &self.deltas))
                .collect(),
            optional_rules: OptionalRulesReference {
                commander_traits: sources
                    .commander_traits
                    .iter()
                    .map(|card| rule_card_entry(card, &COMMANDER_TRAIT_REQUIREMENTS))
                    .collect(),
                battle_events: sources
                    .battle_events
                    .iter()
                    .map(|card| rule_card_entry(card, &BATTLE_EVENT_REQUIREMENTS))
                    .collect(),
            },
            glossary: Vec::new(),
        }
    }

    fn report_delta_drift(&self, missions: &[Mission]) {
        for drift in self.deltas.drift(missions) {
            match drift {
                DeltaDrift::ScoringMismatch {
                    mission_id,
                    authored,
                    classified,
                } => tracing::warn!(
                    target: "catalog::reference",
                    mission = %mission_id,
                    %authored,
                    %classified,
                    "round_deltas.drift=scoring_mismatch"
                ),
                DeltaDrift::UnknownMission { mission_id } => tracing::warn!(
                    target: "catalog::reference",
                    mission = %mission_id,
                    "round_deltas.drift=unknown_mission"
                ),
            }
        }
    }
}

pub fn faction_entry(faction: &Faction) -> FactionEntry {
    let note = notes::faction_note(&faction.traits);
    FactionEntry {
        id: faction.id.clone(),
        name: faction.name.clone(),
        stats: faction.base_stats.clone(),
        traits: faction.traits.clone(),
        roster_limit: faction.roster_limit,
        movement_mode: faction.movement_mode.clone(),
        notes: (!note.is_empty()).then(|| note.to_string()),
        requirements: FACTION_REQUIREMENTS.requirements_for(&faction.id),
    }
}

pub fn mission_entry(mission: &Mission, deltas: &RoundDeltaTable) -> MissionEntry {
    MissionEntry {
        id: mission.id.clone(),
        name: mission.name.clone(),
        control_zones: mission.control_zones.clone(),
        round_limit: mission.round_limit,
        max_extra_rounds: mission.max_extra_rounds,
        scoring_summary: scoring::scoring_summary(&mission.scoring_rules),
        per_round_deltas: deltas.deltas_for(&mission.id),
        requirements: MISSION_REQUIREMENTS.requirements_for(&mission.id),
    }
}

fn rule_card_entry(card: &RuleCard, table: &RequirementTable) -> RuleCardEntry {
    RuleCardEntry {
        id: card.id.clone(),
        name: card.name.clone(),
        effect: card.effect.clone(),
        requirements: table.requirements_for(&card.id),
    }
}

/// Writes the document pretty-printed through a sibling temp file renamed over
/// `path`, so readers see either the old file or the complete new one.
pub fn write_reference(path: &Path, reference: &UiReference) -> Result<(), ReferenceBuildError> {
    let write_error = |source: io::Error| ReferenceBuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut json = serde_json::to_string_pretty(reference)?;
    json.push('\n');

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_error)?;

    let mut staged = NamedTempFile::new_in(parent).map_err(write_error)?;
    staged.write_all(json.as_bytes()).map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;
    staged
        .persist(path)
        .map_err(|err| write_error(err.error))?;
    Ok(())
}

/// Loads sources under `root`, builds the reference stamped with the current
/// time and writes it to the configured output path.
pub fn build_and_write(root: &Path, config: &CatalogConfig) -> Result<PathBuf, ReferenceBuildError> {
    let sources = ReferenceSources::load(root, config)?;
    let reference = ReferenceBuilder::new(config).build(&sources, Utc::now());
    let output = config.reference_output_path(root);
    write_reference(&output, &reference)?;
    tracing::info!(
        target: "catalog::reference",
        path = %output.display(),
        factions = reference.factions.len(),
        missions = reference.missions.len(),
        "reference.written"
    );
    Ok(output)
}
