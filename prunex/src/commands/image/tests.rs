use super::*;
use libprunex::{RetentionPlan, SortStrategy};

#[test]
fn test_delete_report_line_dry_run() {
    let line = delete_report_line("myapp", "v1.0.0", true);
    assert_eq!(line, "myapp:v1.0.0 image would be deleted (dry run)");
}

#[test]
fn test_delete_report_line_live() {
    let line = delete_report_line("myapp", "v1.0.0", false);
    assert_eq!(line, "myapp:v1.0.0 image will be deleted ...");
}

#[test]
fn test_build_prunex_missing_config_is_error() {
    // Point the config lookup at a path that cannot exist.
    unsafe {
        std::env::set_var("PRUNEX_CONFIG", "/nonexistent/prunex/config.toml");
    }
    let result = build_prunex();
    unsafe {
        std::env::remove_var("PRUNEX_CONFIG");
    }
    assert!(result.is_err());
    let msg = result.unwrap_err();
    assert!(msg.contains("prunex configure"), "unexpected error: {msg}");
}

const MANIFEST_BODY: &str = r#"{
  "schemaVersion": 2,
  "mediaType": "application/vnd.docker.distribution.manifest.v2+json",
  "config": {
    "mediaType": "application/vnd.docker.container.image.v1+json",
    "size": 1469,
    "digest": "sha256:8cb8f4b4a7f57e354b75b4cb1e5ce8c9b0261e62e8e412b063ff06d6c04a0f22"
  },
  "layers": []
}"#;

#[test]
fn test_shortfall_line_reports_available_count() {
    assert_eq!(handlers::shortfall_line(2), "Only 2 images are available");
}

#[tokio::test]
async fn test_prune_by_keep_shortfall_deletes_nothing() {
    let mut server = mockito::Server::new_async().await;
    let tags = server
        .mock("GET", "/v2/myapp/tags/list")
        .with_status(200)
        .with_body(r#"{"name":"myapp","tags":["v1","v2"]}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let prunex = Prunex::connect(&server.url()).unwrap();
    handlers::prune_by_keep(&prunex, "myapp", 5, SortStrategy::Default, false).await;

    tags.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_execute_plan_dry_run_issues_no_registry_calls() {
    let mut server = mockito::Server::new_async().await;
    // Nothing may be resolved or deleted under dry-run.
    let resolve = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let prunex = Prunex::connect(&server.url()).unwrap();
    let plan = RetentionPlan {
        to_delete: vec!["v1".to_string(), "v2".to_string(), "v3".to_string()],
        sufficient: true,
    };

    handlers::execute_plan(&prunex, "myapp", &plan, 2, true).await;

    resolve.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_execute_plan_deletes_each_planned_tag() {
    let mut server = mockito::Server::new_async().await;
    let digest = "sha256:feedface";

    let mut mocks = Vec::new();
    for tag in ["v1", "v2"] {
        let resolve = server
            .mock("GET", format!("/v2/myapp/manifests/{}", tag).as_str())
            .with_status(200)
            .with_header("Docker-Content-Digest", digest)
            .with_body(MANIFEST_BODY)
            .create_async()
            .await;
        mocks.push(resolve);
    }
    let delete = server
        .mock("DELETE", format!("/v2/myapp/manifests/{}", digest).as_str())
        .with_status(202)
        .expect(2)
        .create_async()
        .await;

    let prunex = Prunex::connect(&server.url()).unwrap();
    let plan = RetentionPlan {
        to_delete: vec!["v1".to_string(), "v2".to_string()],
        sufficient: true,
    };

    handlers::execute_plan(&prunex, "myapp", &plan, 3, false).await;

    for mock in mocks {
        mock.assert_async().await;
    }
    delete.assert_async().await;
}
