//! Field-level checks shared by every fixture kind.

use std::collections::HashMap;

use catalog_schema::is_content_hash;
use serde_json::{Map as JsonMap, Number, Value};

use super::report::{json_type_name, FieldKind, Problem, Violations};

pub(crate) fn field_path(location: &str, field: &str) -> String {
    format!("{location}.{field}")
}

pub(crate) fn index_path(location: &str, index: usize) -> String {
    format!("{location}[{index}]")
}

/// Checks presence and primitive type; returns the value only when it conforms.
pub(crate) fn require<'v>(
    out: &mut Violations,
    record: &'v Value,
    location: &str,
    field: &str,
    kind: FieldKind,
) -> Option<&'v Value> {
    match record.get(field) {
        None => {
            out.push(
                field_path(location, field),
                Problem::Missing { expected: kind },
            );
            None
        }
        Some(value) if kind.accepts(value) => Some(value),
        Some(value) => {
            out.push(
                field_path(location, field),
                Problem::WrongType {
                    expected: kind,
                    found: json_type_name(value),
                },
            );
            None
        }
    }
}

pub(crate) fn require_all(
    out: &mut Violations,
    record: &Value,
    location: &str,
    fields: &[(&str, FieldKind)],
) {
    for (field, kind) in fields {
        require(out, record, location, field, *kind);
    }
}

/// A content hash field: one violation whether it is absent, non-string or unprefixed.
pub(crate) fn require_hash(out: &mut Violations, record: &Value, location: &str, field: &str) {
    let ok = record
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(is_content_hash);
    if !ok {
        out.push(field_path(location, field), Problem::MissingHashPrefix);
    }
}

/// Default-safety check: the flag must exist and be exactly `false`.
pub(crate) fn require_false(out: &mut Violations, record: &Value, location: &str, field: &str) {
    if let Some(flag) = require(out, record, location, field, FieldKind::Boolean) {
        if flag.as_bool() != Some(false) {
            out.push(field_path(location, field), Problem::NotDefaultFalse);
        }
    }
}

/// Present-implies-typed: absence is fine, any present value must be an array.
pub(crate) fn optional_array<'v>(
    out: &mut Violations,
    record: &'v Value,
    location: &str,
    field: &str,
) -> Option<&'v Vec<Value>> {
    match record.get(field) {
        None => None,
        Some(Value::Array(items)) => Some(items),
        Some(other) => {
            out.push(
                field_path(location, field),
                Problem::ArrayWhenPresent {
                    found: json_type_name(other),
                },
            );
            None
        }
    }
}

/// Present-implies-object, the object counterpart of [`optional_array`].
pub(crate) fn optional_object<'v>(
    out: &mut Violations,
    record: &'v Value,
    location: &str,
    field: &str,
) -> Option<&'v JsonMap<String, Value>> {
    match record.get(field) {
        None => None,
        Some(Value::Object(map)) => Some(map),
        Some(other) => {
            out.push(
                field_path(location, field),
                Problem::ObjectWhenPresent {
                    found: json_type_name(other),
                },
            );
            None
        }
    }
}

// Integer checks only look at numbers; type problems are left to `require`.
// Bounds match the typed records the reference builder reads.

pub(crate) fn require_positive_integer(
    out: &mut Violations,
    record: &Value,
    location: &str,
    field: &str,
) {
    check_number(out, record, location, field, |number| {
        match number.as_u64().map(u32::try_from) {
            Some(Ok(value)) if value > 0 => Ok(()),
            _ => Err(Problem::NotPositiveInteger {
                found: number.clone(),
            }),
        }
    });
}

pub(crate) fn require_non_negative_integer(
    out: &mut Violations,
    record: &Value,
    location: &str,
    field: &str,
) {
    check_number(out, record, location, field, |number| {
        match number.as_u64().map(u32::try_from) {
            Some(Ok(_)) => Ok(()),
            _ => Err(Problem::NotNonNegativeInteger {
                found: number.clone(),
            }),
        }
    });
}

/// Signed; negative modifiers are allowed.
pub(crate) fn require_integer(out: &mut Violations, record: &Value, location: &str, field: &str) {
    check_number(out, record, location, field, |number| {
        match number.as_i64().map(i32::try_from) {
            Some(Ok(_)) => Ok(()),
            _ => Err(Problem::NotInteger {
                found: number.clone(),
            }),
        }
    });
}

fn check_number<F>(out: &mut Violations, record: &Value, location: &str, field: &str, check: F)
where
    F: FnOnce(&Number) -> Result<(), Problem>,
{
    if let Some(Value::Number(number)) = record.get(field) {
        if let Err(problem) = check(number) {
            out.push(field_path(location, field), problem);
        }
    }
}

/// Every element of an array field must be a string.
pub(crate) fn require_string_items(
    out: &mut Violations,
    record: &Value,
    location: &str,
    field: &str,
) {
    let Some(Value::Array(items)) = record.get(field) else {
        return;
    };
    let base = field_path(location, field);
    for (index, item) in items.iter().enumerate() {
        if !item.is_string() {
            out.push(
                index_path(&base, index),
                Problem::WrongType {
                    expected: FieldKind::String,
                    found: json_type_name(item),
                },
            );
        }
    }
}

/// Iterates a list-shaped fixture, reporting a non-array root or non-object
/// elements and handing every object record to `check`.
pub(crate) fn for_each_record<F>(out: &mut Violations, data: &Value, location: &str, mut check: F)
where
    F: FnMut(&mut Violations, &Value, &str),
{
    let Some(records) = data.as_array() else {
        out.push(
            location,
            Problem::WrongType {
                expected: FieldKind::Array,
                found: json_type_name(data),
            },
        );
        return;
    };
    for (index, record) in records.iter().enumerate() {
        let path = index_path(location, index);
        if !record.is_object() {
            out.push(
                path,
                Problem::WrongType {
                    expected: FieldKind::Object,
                    found: json_type_name(record),
                },
            );
            continue;
        }
        check(out, record, &path);
    }
}

/// Reports every repeat of a string `id` after its first occurrence.
pub(crate) fn check_unique_ids(out: &mut Violations, data: &Value, location: &str) {
    let Some(records) = data.as_array() else {
        return;
    };
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        let Some(id) = record.get("id").and_then(Value::as_str) else {
            continue;
        };
        if let Some(first_index) = first_seen.get(id) {
            out.push(
                field_path(&index_path(location, index), "id"),
                Problem::DuplicateId {
                    id: id.to_string(),
                    first_index: *first_index,
                },
            );
        } else {
            first_seen.insert(id, index);
        }
    }
}

/// `PREFIX-NNN`: uppercase ASCII letters, a dash, exactly three digits.
pub fn is_requirement_id(token: &str) -> bool {
    let Some((prefix, digits)) = token.split_once('-') else {
        return false;
    };
    !prefix.is_empty()
        && prefix.bytes().all(|b| b.is_ascii_uppercase())
        && digits.len() == 3
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Shared rule for catalogue entries in the UI reference document.
pub(crate) fn check_entry(out: &mut Violations, entry: &Value, location: &str) {
    if !entry.is_object() {
        out.push(
            location,
            Problem::WrongType {
                expected: FieldKind::Object,
                found: json_type_name(entry),
            },
        );
        return;
    }
    require(out, entry, location, "id", FieldKind::String);
    let has_label = ["name", "title"]
        .iter()
        .any(|field| entry.get(*field).is_some_and(Value::is_string));
    if !has_label {
        out.push(field_path(location, "name"), Problem::MissingNameOrTitle);
    }
    if let Some(requirements) = optional_array(out, entry, location, "requirements") {
        let base = field_path(location, "requirements");
        for (index, token) in requirements.iter().enumerate() {
            let well_formed = token.as_str().is_some_and(is_requirement_id);
            if !well_formed {
                out.push(
                    index_path(&base, index),
                    Problem::MalformedRequirement {
                        token: token.to_string(),
                    },
                );
            }
        }
    }
    optional_array(out, entry, location, "per_round_deltas");
}
