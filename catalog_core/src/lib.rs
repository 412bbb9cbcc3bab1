//! Fixture validation and UI reference generation for the rules catalogue.
//!
//! Two one-shot batch jobs share this crate: [`validation::Validator`] checks
//! every registered fixture and collects all structural defects in one pass,
//! and [`reference::build_and_write`] derives the normalized UI reference
//! document that the validator then checks like any other fixture.

pub mod catalog_config;
pub mod fixtures;
pub mod logging;
pub mod reference;
pub mod validation;

use std::path::{Path, PathBuf};

pub use catalog_config::{CatalogConfig, CatalogConfigError, FixtureKind, FixtureRegistration};
pub use fixtures::FixtureReadError;
pub use reference::{
    build_and_write, write_reference, ReferenceBuildError, ReferenceBuilder, ReferenceSources,
};
pub use validation::{
    validate_value, Problem, ValidationReport, Validator, Violation, FAIL_MARKER, PASS_MARKER,
};

/// Workspace root the fixture paths in the builtin config are relative to.
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
