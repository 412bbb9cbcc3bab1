//! Data contracts for the rules catalogue.
//!
//! Raw fixture records (`Faction`, `Mission`, `RuleCard`) are what the JSON
//! fixtures hold; `UiReference` and its entry types are the normalized document
//! derived from them for the documentation glossary panels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Literal prefix carried by every content hash in the fixtures.
pub const HASH_PREFIX: &str = "sha256:";

pub fn is_content_hash(value: &str) -> bool {
    value.starts_with(HASH_PREFIX)
}

/// A unit's move stat: either a fixed distance or dice notation such as `"d6"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoveStat {
    Fixed(u32),
    Dice(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(rename = "move")]
    pub movement: MoveStat,
    pub range: u32,
    pub aq: i32,
    pub defense: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Faction {
    pub id: String,
    pub name: String,
    pub base_stats: BaseStats,
    #[serde(default)]
    pub traits: Vec<String>,
    pub roster_limit: u32,
    pub movement_mode: String,
    pub version: String,
}

/// `points` is kept untyped: its shape selects the scoring summary, and an
/// unexpected shape must still load.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub points: Value,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mission {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub control_zones: Vec<Value>,
    #[serde(default)]
    pub scoring_rules: ScoringRules,
    pub round_limit: u32,
    #[serde(default)]
    pub max_extra_rounds: u32,
    #[serde(default)]
    pub unique_per_campaign: bool,
    pub version: String,
}

/// Shared shape of commander traits, battle events and advantages.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleCard {
    pub id: String,
    pub name: String,
    pub effect: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiReference {
    pub version: String,
    pub generated_at: String,
    pub factions: Vec<FactionEntry>,
    pub actions: Vec<ActionEntry>,
    pub missions: Vec<MissionEntry>,
    pub optional_rules: OptionalRulesReference,
    #[serde(default)]
    pub glossary: Vec<GlossaryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionEntry {
    pub id: String,
    pub name: String,
    pub stats: BaseStats,
    pub traits: Vec<String>,
    pub roster_limit: u32,
    pub movement_mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionEntry {
    pub id: String,
    pub name: String,
    pub control_zones: Vec<Value>,
    pub round_limit: u32,
    pub max_extra_rounds: u32,
    pub scoring_summary: String,
    pub per_round_deltas: Vec<String>,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCardEntry {
    pub id: String,
    pub name: String,
    pub effect: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalRulesReference {
    pub commander_traits: Vec<RuleCardEntry>,
    pub battle_events: Vec<RuleCardEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub id: String,
    pub title: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
}
