use std::env;
use std::error::Error;
use std::process::Command;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("data") => {
            build_reference()?;
            validate_fixtures()
        }
        Some("build-reference") => build_reference(),
        Some("validate") => validate_fixtures(),
        Some("help") | None => {
            print_usage();
            Ok(())
        }
        Some(cmd) => {
            eprintln!("Unknown xtask '{cmd}'.");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: cargo xtask data");
    eprintln!("       cargo xtask build-reference");
    eprintln!("       cargo xtask validate");
    eprintln!("       cargo xtask help");
}

fn run_catalog_bin(bin: &str) -> Result<(), Box<dyn Error>> {
    let status = Command::new("cargo")
        .args(["run", "--quiet", "-p", "catalog_core", "--bin", bin])
        .status()?;

    if !status.success() {
        return Err(format!("{bin} failed").into());
    }
    Ok(())
}

fn build_reference() -> Result<(), Box<dyn Error>> {
    run_catalog_bin("build_ui_reference")
}

fn validate_fixtures() -> Result<(), Box<dyn Error>> {
    run_catalog_bin("schema_validate")
}
