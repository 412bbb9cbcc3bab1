//! Trait-derived faction notes.

pub const MELEE_BONUS_NOTE: &str = "Melee AQ +2";
pub const REROLL_NOTE: &str = "Reroll ranged/melee one die";
pub const DEADLY_ROUNDS_NOTE: &str = "Deadly Rounds on natural 11/12";

struct TraitNoteRule {
    trait_id: &'static str,
    note: &'static str,
}

/// Evaluated in order; the first rule whose trait the faction carries wins.
const TRAIT_NOTE_RULES: &[TraitNoteRule] = &[
    TraitNoteRule {
        trait_id: "azure_melee_aq_bonus",
        note: MELEE_BONUS_NOTE,
    },
    TraitNoteRule {
        trait_id: "grey_reroll_one_die",
        note: REROLL_NOTE,
    },
    TraitNoteRule {
        trait_id: "solar_deadly_rounds",
        note: DEADLY_ROUNDS_NOTE,
    },
];

/// Note text for a faction's trait list; empty when no rule matches.
pub fn faction_note(traits: &[String]) -> &'static str {
    TRAIT_NOTE_RULES
        .iter()
        .find(|rule| traits.iter().any(|owned| owned == rule.trait_id))
        .map(|rule| rule.note)
        .unwrap_or("")
}
