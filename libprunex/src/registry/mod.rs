//! Registry operations.
//!
//! High-level operations against one registry: listing images, listing tags,
//! fetching manifests for display, and deleting a tag. This is the
//! collaborator the CLI orchestrates; ordering and retention decisions live
//! in [`crate::sort`] and [`crate::retention`], not here.

use crate::client::Client;
use crate::error::{PrunexError, Result};
use oci_spec::image::ImageManifest;

#[cfg(test)]
mod tests;

/// High-level registry client.
#[derive(Debug)]
pub struct Registry {
    /// HTTP client for registry communication (carries the credentials).
    client: Client,
}

impl Registry {
    /// Creates a new `Registry` around a configured client.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::client::Client;
    /// use libprunex::registry::Registry;
    ///
    /// let client = Client::new("http://localhost:5000", None).unwrap();
    /// let registry = Registry::new(client);
    /// ```
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists all image repositories in the registry (catalog operation).
    pub async fn list_images(&self) -> Result<Vec<String>> {
        self.client.fetch_catalog().await
    }

    /// Lists all tags for a specific image.
    ///
    /// Tags come back in whatever order the registry stores them; callers
    /// that need a ranking apply [`crate::sort::sort_tags`] themselves.
    pub async fn list_tags(&self, image: &str) -> Result<Vec<String>> {
        self.client.fetch_tags(image).await
    }

    /// Retrieves the manifest for an (image, tag) pair.
    ///
    /// Accepts Docker schema-2 and single-platform OCI manifests; anything
    /// else (e.g. a multi-platform index) is a validation error, since there
    /// is no per-layer information to display for those.
    pub async fn image_manifest(&self, image: &str, tag: &str) -> Result<ImageManifest> {
        let (bytes, _digest) = self.client.fetch_manifest(image, tag).await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            PrunexError::validation_with_source(
                format!("Failed to parse manifest for {}:{}", image, tag),
                e,
            )
        })
    }

    /// Deletes an image tag.
    ///
    /// The Docker Registry v2 API only deletes manifests by digest, so this
    /// first resolves the tag to its `Docker-Content-Digest` and then issues
    /// the DELETE against that digest. A single fire-and-forget call pair; no
    /// retries.
    ///
    /// Note that deleting a digest removes every tag pointing at the same
    /// manifest, which is the registry's semantics, not ours.
    pub async fn delete_by_tag(&self, image: &str, tag: &str) -> Result<()> {
        let (_bytes, digest) = self.client.fetch_manifest(image, tag).await?;
        self.client.delete_manifest(image, &digest).await
    }

    /// Checks that the registry is reachable and speaks the v2 API.
    pub async fn check_version(&self) -> Result<()> {
        self.client.check_version().await.map(|_| ())
    }
}
