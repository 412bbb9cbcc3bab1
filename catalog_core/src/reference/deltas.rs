//! Authored per-round scoring deltas, keyed by mission id.
//!
//! The rows are hand-written text and are not derived from `scoring_rules`, so
//! each row records the scoring shape it was written against and
//! [`RoundDeltaTable::drift`] reports rows that no longer line up.

use catalog_schema::Mission;
use serde::Deserialize;

use super::scoring::{ScoringKind, ScoringShape};

pub const BUILTIN_ROUND_DELTAS: &str = include_str!("../data/round_deltas.json");

#[derive(Debug, Clone, Deserialize)]
pub struct RoundDeltaRow {
    pub mission_id: String,
    pub scoring: ScoringKind,
    pub deltas: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoundDeltaTable {
    pub rows: Vec<RoundDeltaRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeltaDrift {
    ScoringMismatch {
        mission_id: String,
        authored: ScoringKind,
        classified: ScoringKind,
    },
    UnknownMission {
        mission_id: String,
    },
}

impl RoundDeltaTable {
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_ROUND_DELTAS).expect("builtin round delta table should parse")
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn row(&self, mission_id: &str) -> Option<&RoundDeltaRow> {
        self.rows.iter().find(|row| row.mission_id == mission_id)
    }

    /// Deltas for a mission; missions without a row get an empty list.
    pub fn deltas_for(&self, mission_id: &str) -> Vec<String> {
        self.row(mission_id)
            .map(|row| row.deltas.clone())
            .unwrap_or_default()
    }

    pub fn drift(&self, missions: &[Mission]) -> Vec<DeltaDrift> {
        self.rows
            .iter()
            .filter_map(|row| {
                let Some(mission) = missions.iter().find(|m| m.id == row.mission_id) else {
                    return Some(DeltaDrift::UnknownMission {
                        mission_id: row.mission_id.clone(),
                    });
                };
                let classified = ScoringShape::classify(&mission.scoring_rules.points).kind();
                (classified != row.scoring).then(|| DeltaDrift::ScoringMismatch {
                    mission_id: row.mission_id.clone(),
                    authored: row.scoring,
                    classified,
                })
            })
            .collect()
    }
}
