//! Cross-reference requirement ids attached to emitted entries.

/// Extra ids for one entry, selected by id equality.
pub struct RequirementRule {
    pub entry_id: &'static str,
    pub extra: &'static [&'static str],
}

pub struct RequirementTable {
    pub base: &'static [&'static str],
    pub rules: &'static [RequirementRule],
}

impl RequirementTable {
    /// Base ids followed by the extras of every matching rule, in table order.
    pub fn requirements_for(&self, entry_id: &str) -> Vec<String> {
        let extras = self
            .rules
            .iter()
            .filter(|rule| rule.entry_id == entry_id)
            .flat_map(|rule| rule.extra.iter());
        self.base
            .iter()
            .chain(extras)
            .map(|id| id.to_string())
            .collect()
    }
}

pub const FACTION_REQUIREMENTS: RequirementTable = RequirementTable {
    base: &["GR-005", "GR-007"],
    rules: &[
        RequirementRule {
            entry_id: "azure_blades",
            extra: &["GR-008"],
        },
        RequirementRule {
            entry_id: "grey_cloaks",
            extra: &["GR-009"],
        },
        RequirementRule {
            entry_id: "solar_wardens",
            extra: &["GR-010", "GR-011"],
        },
    ],
};

pub const MISSION_REQUIREMENTS: RequirementTable = RequirementTable {
    base: &["GR-033"],
    rules: &[],
};

pub const COMMANDER_TRAIT_REQUIREMENTS: RequirementTable = RequirementTable {
    base: &["GR-041"],
    rules: &[RequirementRule {
        entry_id: "stealth",
        extra: &["DA-020"],
    }],
};

pub const BATTLE_EVENT_REQUIREMENTS: RequirementTable = RequirementTable {
    base: &["GR-042"],
    rules: &[RequirementRule {
        entry_id: "revive",
        extra: &["DA-019"],
    }],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_requirement_id;

    #[test]
    fn solar_wardens_get_two_extras_in_order() {
        assert_eq!(
            FACTION_REQUIREMENTS.requirements_for("solar_wardens"),
            vec!["GR-005", "GR-007", "GR-010", "GR-011"]
        );
    }

    #[test]
    fn unlisted_entries_get_base_only() {
        assert_eq!(
            FACTION_REQUIREMENTS.requirements_for("verdant_eye"),
            vec!["GR-005", "GR-007"]
        );
        assert_eq!(
            COMMANDER_TRAIT_REQUIREMENTS.requirements_for("sniper"),
            vec!["GR-041"]
        );
    }

    #[test]
    fn optional_rule_extras() {
        assert_eq!(
            COMMANDER_TRAIT_REQUIREMENTS.requirements_for("stealth"),
            vec!["GR-041", "DA-020"]
        );
        assert_eq!(
            BATTLE_EVENT_REQUIREMENTS.requirements_for("revive"),
            vec!["GR-042", "DA-019"]
        );
    }

    #[test]
    fn every_table_id_is_well_formed() {
        for table in [
            &FACTION_REQUIREMENTS,
            &MISSION_REQUIREMENTS,
            &COMMANDER_TRAIT_REQUIREMENTS,
            &BATTLE_EVENT_REQUIREMENTS,
        ] {
            let ids = table
                .base
                .iter()
                .chain(table.rules.iter().flat_map(|rule| rule.extra.iter()));
            for id in ids {
                assert!(is_requirement_id(id), "{id}");
            }
        }
    }
}
