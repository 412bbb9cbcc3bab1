//! Fixture validator: structural conformance checks over every registered
//! fixture, accumulating all violations in one pass.

mod kinds;
mod report;
mod rules;

use std::path::PathBuf;

use rayon::prelude::*;
use serde_json::Value;

use crate::catalog_config::{CatalogConfig, FixtureKind, FixtureRegistration};
use crate::fixtures;

pub use report::{
    json_type_name, FieldKind, Problem, ValidationReport, Violation, Violations, FAIL_MARKER,
    PASS_MARKER,
};
pub use rules::is_requirement_id;

/// Applies the rules for `kind` to already-parsed fixture content.
///
/// `name` is the logical fixture name; it prefixes every reported location.
pub fn validate_value(kind: FixtureKind, name: &str, data: &Value) -> Vec<Violation> {
    let mut out = Violations::new(name);
    match kind {
        FixtureKind::SaveMatch => kinds::save_match(&mut out, data, name),
        FixtureKind::CommandLog => kinds::command_log_fixture(&mut out, data, name),
        FixtureKind::MatchState => kinds::match_state(&mut out, data, name),
        FixtureKind::Commands => kinds::commands(&mut out, data, name),
        FixtureKind::OptionalRulesConfig => kinds::optional_rules_config(&mut out, data, name),
        FixtureKind::Factions => kinds::factions(&mut out, data, name),
        FixtureKind::Missions => kinds::missions(&mut out, data, name),
        FixtureKind::TerrainTemplates => kinds::terrain_templates(&mut out, data, name),
        FixtureKind::CommanderTraits | FixtureKind::BattleEvents | FixtureKind::Advantages => {
            kinds::rule_cards(&mut out, data, name)
        }
        FixtureKind::RngSeed => kinds::rng_seed(&mut out, data, name),
        FixtureKind::UiReference => kinds::ui_reference(&mut out, data, name),
    }
    out.into_vec()
}

/// Reads and checks a whole fixture set rooted at one directory.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    root: PathBuf,
    config: &'a CatalogConfig,
}

impl<'a> Validator<'a> {
    pub fn new(root: impl Into<PathBuf>, config: &'a CatalogConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Checks every registered fixture. Fixtures are independent, so they are
    /// read and checked in parallel; results keep registration order.
    pub fn run(&self) -> ValidationReport {
        let per_fixture: Vec<Vec<Violation>> = self
            .config
            .fixtures
            .par_iter()
            .map(|registration| self.check_fixture(registration))
            .collect();
        let violations: Vec<Violation> = per_fixture.into_iter().flatten().collect();

        tracing::info!(
            target: "catalog::validate",
            root = %self.root.display(),
            fixtures = self.config.fixtures.len(),
            violations = violations.len(),
            "validation.completed"
        );
        ValidationReport::new(self.config.fixtures.len(), violations)
    }

    pub fn check_fixture(&self, registration: &FixtureRegistration) -> Vec<Violation> {
        let path = registration.resolve(&self.root);
        let violations = match fixtures::read_json(&path) {
            Ok(data) => validate_value(registration.kind, &registration.name, &data),
            Err(err) => {
                tracing::warn!(
                    target: "catalog::validate",
                    fixture = %registration.name,
                    error = %err,
                    "fixture.unreadable"
                );
                vec![Violation {
                    fixture: registration.name.clone(),
                    location: registration.path.display().to_string(),
                    problem: Problem::Unreadable {
                        message: err.to_string(),
                    },
                }]
            }
        };
        tracing::debug!(
            target: "catalog::validate",
            fixture = %registration.name,
            kind = %registration.kind,
            violations = violations.len(),
            "fixture.checked"
        );
        violations
    }
}
