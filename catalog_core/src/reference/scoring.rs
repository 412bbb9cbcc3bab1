//! Scoring summary text synthesised from a mission's `scoring_rules.points`.

use std::fmt;

use catalog_schema::ScoringRules;
use serde::Deserialize;
use serde_json::{Number, Value};

pub const KILLS_SUMMARY: &str =
    "Score points for each enemy unit taken Down; the player with the most points wins.";
pub const DENY_SUMMARY: &str =
    "Score for each control zone kept clear of enemy units at the end of every round.";
pub const ZONE_PRESENCE_SUMMARY: &str =
    "Score for each of your units inside a control zone at the end of every round.";

/// Discriminant of [`ScoringShape`], also used to tag authored delta rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringKind {
    Kills,
    Control,
    Deny,
    ZonePresence,
    Unrecognized,
}

impl ScoringKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringKind::Kills => "kills",
            ScoringKind::Control => "control",
            ScoringKind::Deny => "deny",
            ScoringKind::ZonePresence => "zone_presence",
            ScoringKind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ScoringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScoringShape {
    Kills,
    Control {
        points: Number,
        nearest_opponent_bonus: Option<Number>,
    },
    Deny,
    ZonePresence,
    Unrecognized,
}

impl ScoringShape {
    /// First match wins: `kill`, numeric `control`, `deny`, `zone_presence`.
    /// Anything other than an object is unrecognized.
    pub fn classify(points: &Value) -> Self {
        let Some(points) = points.as_object() else {
            return ScoringShape::Unrecognized;
        };
        if points.contains_key("kill") {
            return ScoringShape::Kills;
        }
        if let Some(Value::Number(control)) = points.get("control") {
            let nearest_opponent_bonus = match points.get("nearest_opponent_bonus") {
                Some(Value::Number(bonus)) => Some(bonus.clone()),
                _ => None,
            };
            return ScoringShape::Control {
                points: control.clone(),
                nearest_opponent_bonus,
            };
        }
        if points.contains_key("deny") {
            return ScoringShape::Deny;
        }
        if points.contains_key("zone_presence") {
            return ScoringShape::ZonePresence;
        }
        ScoringShape::Unrecognized
    }

    pub fn kind(&self) -> ScoringKind {
        match self {
            ScoringShape::Kills => ScoringKind::Kills,
            ScoringShape::Control { .. } => ScoringKind::Control,
            ScoringShape::Deny => ScoringKind::Deny,
            ScoringShape::ZonePresence => ScoringKind::ZonePresence,
            ScoringShape::Unrecognized => ScoringKind::Unrecognized,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            ScoringShape::Kills => KILLS_SUMMARY.to_string(),
            ScoringShape::Control {
                points,
                nearest_opponent_bonus,
            } => {
                let mut text =
                    format!("Score {points} VP for each control zone held at the end of every round");
                if let Some(bonus) = nearest_opponent_bonus {
                    text.push_str(&format!(
                        ", plus {bonus} VP for holding the zone nearest the opponent"
                    ));
                }
                text.push('.');
                text
            }
            ScoringShape::Deny => DENY_SUMMARY.to_string(),
            ScoringShape::ZonePresence => ZONE_PRESENCE_SUMMARY.to_string(),
            ScoringShape::Unrecognized => String::new(),
        }
    }
}

pub fn scoring_summary(rules: &ScoringRules) -> String {
    ScoringShape::classify(&rules.points).summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kills_take_priority() {
        let shape = ScoringShape::classify(&json!({"kill": 1, "control": 2}));
        assert_eq!(shape, ScoringShape::Kills);
        assert_eq!(shape.summary(), KILLS_SUMMARY);
    }

    #[test]
    fn control_embeds_values() {
        let shape = ScoringShape::classify(&json!({
            "control": 1,
            "nearest_opponent_bonus": 2
        }));
        assert_eq!(
            shape.summary(),
            "Score 1 VP for each control zone held at the end of every round, plus 2 VP for holding the zone nearest the opponent."
        );

        let plain = ScoringShape::classify(&json!({"control": 2}));
        assert_eq!(
            plain.summary(),
            "Score 2 VP for each control zone held at the end of every round."
        );
    }

    #[test]
    fn non_numeric_control_falls_through() {
        let shape = ScoringShape::classify(&json!({"control": "per zone", "deny": 1}));
        assert_eq!(shape, ScoringShape::Deny);
    }

    #[test]
    fn presence_and_unknown() {
        assert_eq!(
            ScoringShape::classify(&json!({"zone_presence": 1})).summary(),
            ZONE_PRESENCE_SUMMARY
        );
        assert_eq!(
            ScoringShape::classify(&json!({"objectives": 3})).summary(),
            ""
        );
        assert_eq!(ScoringShape::classify(&json!({})).kind(), ScoringKind::Unrecognized);
    }

    #[test]
    fn non_object_points_are_unrecognized() {
        for points in [json!("zone presence"), Value::Null, json!(["kill"]), json!(3)] {
            let shape = ScoringShape::classify(&points);
            assert_eq!(shape, ScoringShape::Unrecognized, "points {points}");
            assert_eq!(shape.summary(), "");
        }
    }

    #[test]
    fn summary_is_stable_across_calls() {
        let rules = ScoringRules {
            points: json!({"control": 1.5, "nearest_opponent_bonus": 1}),
            ..ScoringRules::default()
        };
        let first = scoring_summary(&rules);
        assert_eq!(first, scoring_summary(&rules));
        assert!(first.contains("1.5 VP"));
    }
}
