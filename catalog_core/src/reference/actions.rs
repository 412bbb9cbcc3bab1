use catalog_schema::ActionEntry;

struct ActionRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
}

const ACTIONS: &[ActionRow] = &[
    ActionRow {
        id: "move",
        name: "Move",
        description: "Move up to Move stat",
        requirements: &["GR-017", "GR-018"],
    },
    ActionRow {
        id: "attack",
        name: "Attack",
        description: "Half move then Shoot",
        requirements: &["GR-019", "GR-022"],
    },
    ActionRow {
        id: "melee",
        name: "Melee",
        description: "Adjacent melee roll",
        requirements: &["GR-019", "GR-027"],
    },
    ActionRow {
        id: "first_aid",
        name: "First Aid",
        description: "Half move then aid adjacent Down unit",
        requirements: &["GR-020", "GR-029"],
    },
    ActionRow {
        id: "hold",
        name: "Hold Position",
        description: "Do nothing",
        requirements: &["GR-021"],
    },
];

/// Unit actions listed in the reference; authored here rather than in a fixture.
pub fn action_entries() -> Vec<ActionEntry> {
    ACTIONS
        .iter()
        .map(|row| ActionEntry {
            id: row.id.to_string(),
            name: row.name.to_string(),
            description: row.description.to_string(),
            requirements: row.requirements.iter().map(|id| id.to_string()).collect(),
        })
        .collect()
}
