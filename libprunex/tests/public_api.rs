use libprunex::{Credentials, Prunex, PrunexBuilder, RetentionPlan, SortStrategy};

#[test]
fn test_builder_requires_registry_url() {
    let result = PrunexBuilder::new().build();
    assert!(result.is_err());
}

#[test]
fn test_builder_minimal() {
    let prunex = Prunex::builder()
        .registry_url("http://localhost:5000")
        .build()
        .unwrap();
    assert_eq!(prunex.registry_url(), "http://localhost:5000");
}

#[test]
fn test_builder_with_credentials() {
    let prunex = Prunex::builder()
        .registry_url("http://localhost:5000")
        .with_credentials(Credentials::basic("admin", "secret"))
        .build();
    assert!(prunex.is_ok());
}

#[test]
fn test_connect_normalizes_url() {
    let prunex = Prunex::connect("localhost:5000///");
    // connect() keeps the caller's URL string; normalization happens in the
    // client, so any reasonable spelling is accepted.
    assert!(prunex.is_ok());
}

#[test]
fn test_core_types_are_usable_without_a_registry() {
    // The ordering and planning core is pure and available standalone.
    let mut tags = vec!["v10".to_string(), "latest".to_string(), "v2".to_string()];
    libprunex::sort::sort_tags(&mut tags, SortStrategy::from("default"));
    assert_eq!(tags, vec!["latest", "v2", "v10"]);

    let plan = RetentionPlan::plan(&tags, 1);
    assert!(plan.sufficient);
    assert_eq!(plan.to_delete, vec!["latest", "v2"]);
}
