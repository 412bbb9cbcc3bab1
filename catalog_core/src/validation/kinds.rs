//! Per-kind structural rules. Each function appends to the caller's
//! [`Violations`] and never stops early.

use serde_json::{Number, Value};

use super::report::{json_type_name, FieldKind, Problem, Violations};
use super::rules::{
    check_entry, check_unique_ids, field_path, for_each_record, index_path, optional_array,
    optional_object, require, require_all, require_false, require_hash, require_integer,
    require_non_negative_integer, require_positive_integer, require_string_items,
};

const OPTIONAL_RULE_FLAGS: [&str; 3] = ["commander", "events", "campaign"];

fn require_root_object(out: &mut Violations, data: &Value, location: &str) -> bool {
    if data.is_object() {
        return true;
    }
    out.push(
        location,
        Problem::WrongType {
            expected: FieldKind::Object,
            found: json_type_name(data),
        },
    );
    false
}

pub(crate) fn command(out: &mut Violations, cmd: &Value, location: &str) {
    require_all(
        out,
        cmd,
        location,
        &[
            ("id", FieldKind::String),
            ("sequence", FieldKind::Number),
            ("type", FieldKind::String),
            ("rng_offset_before", FieldKind::Number),
        ],
    );
    require_hash(out, cmd, location, "state_hash_after");
}

pub(crate) fn command_log(out: &mut Violations, log: &Value, location: &str) {
    let entries = match log.get("entries") {
        Some(Value::Array(entries)) if entries.is_empty() => {
            out.push(field_path(location, "entries"), Problem::EmptyCollection);
            None
        }
        Some(Value::Array(entries)) => Some(entries),
        Some(other) => {
            out.push(
                field_path(location, "entries"),
                Problem::WrongType {
                    expected: FieldKind::Array,
                    found: json_type_name(other),
                },
            );
            None
        }
        None => {
            out.push(
                field_path(location, "entries"),
                Problem::Missing {
                    expected: FieldKind::Array,
                },
            );
            None
        }
    };
    require_hash(out, log, location, "checksum");

    let Some(entries) = entries else {
        return;
    };
    let entries_path = field_path(location, "entries");
    let mut previous: Option<&Number> = None;
    for (index, entry) in entries.iter().enumerate() {
        let path = index_path(&entries_path, index);
        if !entry.is_object() {
            out.push(
                path,
                Problem::WrongType {
                    expected: FieldKind::Object,
                    found: json_type_name(entry),
                },
            );
            continue;
        }
        command(out, entry, &path);

        let Some(Value::Number(current)) = entry.get("sequence") else {
            continue;
        };
        if let Some(prev) = previous {
            if !sequence_increases(prev, current) {
                out.push(
                    field_path(&path, "sequence"),
                    Problem::SequenceNotIncreasing {
                        previous: prev.clone(),
                        current: current.clone(),
                    },
                );
            }
        }
        previous = Some(current);
    }
}

fn sequence_increases(previous: &Number, current: &Number) -> bool {
    match (previous.as_f64(), current.as_f64()) {
        (Some(prev), Some(cur)) => cur > prev,
        _ => false,
    }
}

pub(crate) fn commands(out: &mut Violations, data: &Value, location: &str) {
    for_each_record(out, data, location, command);
}

pub(crate) fn save_match(out: &mut Violations, data: &Value, location: &str) {
    if !require_root_object(out, data, location) {
        return;
    }
    if let Some(game) = require(out, data, location, "match", FieldKind::Object) {
        let match_path = field_path(location, "match");
        require_hash(out, game, &match_path, "state_hash");
        if let Some(rng) = require(out, game, &match_path, "rng", FieldKind::Object) {
            require(
                out,
                rng,
                &field_path(&match_path, "rng"),
                "seed",
                FieldKind::Present,
            );
        }
        if let Some(log) = require(out, game, &match_path, "command_log", FieldKind::Object) {
            command_log(out, log, &field_path(&match_path, "command_log"));
        }
    }
    if let Some(meta) = require(out, data, location, "meta", FieldKind::Object) {
        require_hash(out, meta, &field_path(location, "meta"), "checksum");
    }
}

pub(crate) fn command_log_fixture(out: &mut Violations, data: &Value, location: &str) {
    if require_root_object(out, data, location) {
        command_log(out, data, location);
    }
}

pub(crate) fn match_state(out: &mut Violations, data: &Value, location: &str) {
    if !require_root_object(out, data, location) {
        return;
    }
    require_hash(out, data, location, "state_hash");
    if let Some(rules) = require(out, data, location, "optional_rules", FieldKind::Object) {
        let rules_path = field_path(location, "optional_rules");
        for flag in OPTIONAL_RULE_FLAGS {
            require(out, rules, &rules_path, flag, FieldKind::Boolean);
        }
    }
}

pub(crate) fn optional_rules_config(out: &mut Violations, data: &Value, location: &str) {
    if !require_root_object(out, data, location) {
        return;
    }
    for flag in OPTIONAL_RULE_FLAGS {
        require_false(out, data, location, flag);
    }
    require(out, data, location, "version", FieldKind::String);
}

pub(crate) fn factions(out: &mut Violations, data: &Value, location: &str) {
    for_each_record(out, data, location, |out, faction, path| {
        require_all(
            out,
            faction,
            path,
            &[
                ("id", FieldKind::String),
                ("name", FieldKind::String),
                ("traits", FieldKind::Array),
                ("roster_limit", FieldKind::Number),
                ("movement_mode", FieldKind::String),
                ("version", FieldKind::String),
            ],
        );
        if let Some(stats) = require(out, faction, path, "base_stats", FieldKind::Object) {
            let stats_path = field_path(path, "base_stats");
            require_all(
                out,
                stats,
                &stats_path,
                &[
                    ("move", FieldKind::NumberOrDice),
                    ("range", FieldKind::Number),
                    ("aq", FieldKind::Number),
                    ("defense", FieldKind::Number),
                ],
            );
            require_positive_integer(out, stats, &stats_path, "move");
            require_non_negative_integer(out, stats, &stats_path, "range");
            require_integer(out, stats, &stats_path, "aq");
            require_non_negative_integer(out, stats, &stats_path, "defense");
        }
        require_string_items(out, faction, path, "traits");
        require_positive_integer(out, faction, path, "roster_limit");
    });
    check_unique_ids(out, data, location);
}

pub(crate) fn missions(out: &mut Violations, data: &Value, location: &str) {
    for_each_record(out, data, location, |out, mission, path| {
        require_all(
            out,
            mission,
            path,
            &[
                ("id", FieldKind::String),
                ("name", FieldKind::String),
                ("control_zones", FieldKind::Array),
                ("scoring_rules", FieldKind::Object),
                ("round_limit", FieldKind::Number),
                ("max_extra_rounds", FieldKind::Number),
                ("unique_per_campaign", FieldKind::Boolean),
                ("version", FieldKind::String),
            ],
        );
        require_positive_integer(out, mission, path, "round_limit");
        require_non_negative_integer(out, mission, path, "max_extra_rounds");
        if let Some(rules) = mission.get("scoring_rules").filter(|rules| rules.is_object()) {
            optional_object(out, rules, &field_path(path, "scoring_rules"), "points");
        }
    });
    check_unique_ids(out, data, location);
}

pub(crate) fn terrain_templates(out: &mut Violations, data: &Value, location: &str) {
    for_each_record(out, data, location, |out, template, path| {
        require_all(
            out,
            template,
            path,
            &[
                ("id", FieldKind::String),
                ("name", FieldKind::String),
                ("blocks_los", FieldKind::Boolean),
                ("provides_cover", FieldKind::Boolean),
                ("impassable", FieldKind::Boolean),
                ("placement_weight", FieldKind::Number),
                ("version", FieldKind::String),
            ],
        );
        if let Some(range) = require(out, template, path, "size_range", FieldKind::Object) {
            let range_path = field_path(path, "size_range");
            let min = require(out, range, &range_path, "min", FieldKind::Number);
            let max = require(out, range, &range_path, "max", FieldKind::Number);
            if let (Some(Value::Number(min)), Some(Value::Number(max))) = (min, max) {
                if min.as_f64() > max.as_f64() {
                    out.push(
                        range_path,
                        Problem::InvertedRange {
                            min: min.clone(),
                            max: max.clone(),
                        },
                    );
                }
            }
        }
    });
    check_unique_ids(out, data, location);
}

/// Commander traits, battle events and advantages share one card shape.
pub(crate) fn rule_cards(out: &mut Violations, data: &Value, location: &str) {
    for_each_record(out, data, location, |out, card, path| {
        require_all(
            out,
            card,
            path,
            &[
                ("id", FieldKind::String),
                ("name", FieldKind::String),
                ("effect", FieldKind::String),
                ("version", FieldKind::String),
            ],
        );
    });
    check_unique_ids(out, data, location);
}

pub(crate) fn rng_seed(out: &mut Violations, data: &Value, location: &str) {
    if !require_root_object(out, data, location) {
        return;
    }
    require_all(
        out,
        data,
        location,
        &[
            ("seed", FieldKind::Number),
            ("algorithm", FieldKind::String),
            ("version", FieldKind::String),
        ],
    );
}

fn entry_list(out: &mut Violations, container: &Value, location: &str, field: &str) {
    if let Some(Value::Array(entries)) = require(out, container, location, field, FieldKind::Array)
    {
        let base = field_path(location, field);
        for (index, entry) in entries.iter().enumerate() {
            check_entry(out, entry, &index_path(&base, index));
        }
    }
}

pub(crate) fn ui_reference(out: &mut Violations, data: &Value, location: &str) {
    if !require_root_object(out, data, location) {
        return;
    }
    require_all(
        out,
        data,
        location,
        &[
            ("version", FieldKind::String),
            ("generated_at", FieldKind::String),
        ],
    );
    for list in ["factions", "actions", "missions"] {
        entry_list(out, data, location, list);
    }
    if let Some(rules) = require(out, data, location, "optional_rules", FieldKind::Object) {
        let rules_path = field_path(location, "optional_rules");
        entry_list(out, rules, &rules_path, "commander_traits");
        entry_list(out, rules, &rules_path, "battle_events");
    }
    if let Some(glossary) = optional_array(out, data, location, "glossary") {
        let base = field_path(location, "glossary");
        for (index, entry) in glossary.iter().enumerate() {
            check_entry(out, entry, &index_path(&base, index));
        }
    }
}
