use catalog_core::{project_root, CatalogConfig, Validator};

#[test]
fn repository_fixtures_pass_validation() {
    let config = CatalogConfig::builtin();
    let report = Validator::new(project_root(), &config).run();
    assert!(report.is_pass(), "unexpected violations:\n{}", report.render());
    assert_eq!(report.fixtures_checked(), config.fixtures.len());
}
