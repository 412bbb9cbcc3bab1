use std::io;
use std::process::ExitCode;

use catalog_core::logging::init_tracing;
use catalog_core::{project_root, CatalogConfig, Validator};

fn main() -> ExitCode {
    init_tracing();

    let config = CatalogConfig::builtin();
    let root = project_root();
    let report = Validator::new(&root, &config).run();

    if let Err(err) = report.write_to(&mut io::stdout().lock(), &mut io::stderr().lock()) {
        tracing::error!(target: "catalog::validate", error = %err, "report.write_failed");
        return ExitCode::FAILURE;
    }

    if report.is_pass() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
