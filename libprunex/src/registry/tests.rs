use super::*;
use crate::client::Client;

const MANIFEST_BODY: &str = r#"{
  "schemaVersion": 2,
  "mediaType": "application/vnd.docker.distribution.manifest.v2+json",
  "config": {
    "mediaType": "application/vnd.docker.container.image.v1+json",
    "size": 1469,
    "digest": "sha256:8cb8f4b4a7f57e354b75b4cb1e5ce8c9b0261e62e8e412b063ff06d6c04a0f22"
  },
  "layers": [
    {
      "mediaType": "application/vnd.docker.image.rootfs.diff.tar.gzip",
      "size": 3408729,
      "digest": "sha256:4abcf20661432fb2d719b4568d94db3b6cf9b44bf2a3e1c2c6d0c89fd9e6e0b2"
    }
  ]
}"#;

#[test]
fn test_registry_new() {
    let client = Client::new("http://localhost:5000", None).unwrap();
    let _registry = Registry::new(client);
}

#[tokio::test]
async fn test_list_images() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v2/_catalog")
        .with_status(200)
        .with_body(r#"{"repositories":["acme/widget","acme/gadget"]}"#)
        .create_async()
        .await;

    let registry = Registry::new(Client::new(&server.url(), None).unwrap());
    let images = registry.list_images().await.unwrap();

    assert_eq!(images, vec!["acme/widget", "acme/gadget"]);
}

#[tokio::test]
async fn test_list_tags_returns_unsorted_registry_order() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v2/acme/widget/tags/list")
        .with_status(200)
        .with_body(r#"{"name":"acme/widget","tags":["v3","v1","v2"]}"#)
        .create_async()
        .await;

    let registry = Registry::new(Client::new(&server.url(), None).unwrap());
    let tags = registry.list_tags("acme/widget").await.unwrap();

    // The registry's order is preserved; sorting is the caller's call.
    assert_eq!(tags, vec!["v3", "v1", "v2"]);
}

#[tokio::test]
async fn test_image_manifest_parses_schema2() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v2/alpine/manifests/latest")
        .with_status(200)
        .with_header("Docker-Content-Digest", "sha256:feedface")
        .with_body(MANIFEST_BODY)
        .create_async()
        .await;

    let registry = Registry::new(Client::new(&server.url(), None).unwrap());
    let manifest = registry.image_manifest("alpine", "latest").await.unwrap();

    assert_eq!(manifest.layers().len(), 1);
    assert_eq!(manifest.config().size(), 1469);
}

#[tokio::test]
async fn test_image_manifest_rejects_garbage() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v2/alpine/manifests/latest")
        .with_status(200)
        .with_header("Docker-Content-Digest", "sha256:feedface")
        .with_body("not json at all")
        .create_async()
        .await;

    let registry = Registry::new(Client::new(&server.url(), None).unwrap());
    let result = registry.image_manifest("alpine", "latest").await;

    assert!(matches!(result.unwrap_err(), PrunexError::Validation { .. }));
}

#[tokio::test]
async fn test_delete_by_tag_resolves_digest_then_deletes() {
    let mut server = mockito::Server::new_async().await;
    let resolve = server
        .mock("GET", "/v2/alpine/manifests/v1")
        .with_status(200)
        .with_header("Docker-Content-Digest", "sha256:feedface")
        .with_body(MANIFEST_BODY)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/v2/alpine/manifests/sha256:feedface")
        .with_status(202)
        .create_async()
        .await;

    let registry = Registry::new(Client::new(&server.url(), None).unwrap());
    registry.delete_by_tag("alpine", "v1").await.unwrap();

    resolve.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_delete_by_tag_unknown_tag() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v2/alpine/manifests/nope")
        .with_status(404)
        .with_body("manifest unknown")
        .create_async()
        .await;

    let registry = Registry::new(Client::new(&server.url(), None).unwrap());
    let result = registry.delete_by_tag("alpine", "nope").await;

    assert!(matches!(result.unwrap_err(), PrunexError::NotFound { .. }));
}
