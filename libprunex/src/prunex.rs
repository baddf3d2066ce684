//! High-level API for the prunex library.
//!
//! This module ties the client, registry, sorting, and retention modules
//! together behind one entry point. It is what the CLI (and any other
//! embedder) talks to.
//!
//! # Examples
//!
//! ```no_run
//! use libprunex::{Prunex, SortStrategy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let prunex = Prunex::connect("http://localhost:5000")?;
//!
//!     for image in prunex.list_images().await? {
//!         println!("{}", image);
//!     }
//!
//!     let tags = prunex.sorted_tags("acme/widget", SortStrategy::Semver).await?;
//!     let plan = prunex.retention_plan("acme/widget", 5, SortStrategy::Semver).await?;
//!     println!("{} tags, {} beyond retention", tags.len(), plan.to_delete.len());
//!
//!     Ok(())
//! }
//! ```

use crate::auth::Credentials;
use crate::client::{Client, ClientConfig};
use crate::error::{PrunexError, Result};
use crate::registry::Registry;
use crate::retention::RetentionPlan;
use crate::sort::{SortStrategy, sort_tags};
use oci_spec::image::ImageManifest;

/// High-level interface for registry tag inspection and pruning.
///
/// # Examples
///
/// ```no_run
/// use libprunex::{Credentials, Prunex};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let prunex = Prunex::builder()
///         .registry_url("https://nexus.example.com")
///         .with_credentials(Credentials::basic("admin", "secret"))
///         .build()?;
///
///     prunex.check().await?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Prunex {
    /// The underlying registry collaborator.
    registry: Registry,
    /// Registry URL for reference.
    registry_url: String,
}

impl Prunex {
    /// Connects to a registry anonymously with default settings.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libprunex::Prunex;
    ///
    /// let prunex = Prunex::connect("http://localhost:5000").unwrap();
    /// ```
    pub fn connect(registry_url: &str) -> Result<Self> {
        Self::builder().registry_url(registry_url).build()
    }

    /// Creates a builder for advanced configuration.
    pub fn builder() -> PrunexBuilder {
        PrunexBuilder::new()
    }

    /// Verifies that the registry is reachable and speaks the v2 API.
    pub async fn check(&self) -> Result<()> {
        self.registry.check_version().await
    }

    /// Lists all image repositories in the registry.
    pub async fn list_images(&self) -> Result<Vec<String>> {
        self.registry.list_images().await
    }

    /// Lists tags for an image in the registry's native order.
    pub async fn list_tags(&self, image: &str) -> Result<Vec<String>> {
        self.registry.list_tags(image).await
    }

    /// Lists tags for an image, sorted ascending (oldest first) under the
    /// given strategy.
    pub async fn sorted_tags(&self, image: &str, strategy: SortStrategy) -> Result<Vec<String>> {
        let mut tags = self.registry.list_tags(image).await?;
        sort_tags(&mut tags, strategy);
        Ok(tags)
    }

    /// Fetches the manifest for an (image, tag) pair.
    pub async fn image_manifest(&self, image: &str, tag: &str) -> Result<ImageManifest> {
        self.registry.image_manifest(image, tag).await
    }

    /// Deletes a single tag (resolving it to a manifest digest first).
    pub async fn delete_tag(&self, image: &str, tag: &str) -> Result<()> {
        self.registry.delete_by_tag(image, tag).await
    }

    /// Computes the retention plan for an image: fetch tags, sort them
    /// ascending under `strategy`, and select everything beyond the
    /// `keep` newest for deletion.
    ///
    /// The plan is only a decision; executing it (or reporting it for a
    /// dry-run) stays with the caller, who deletes via
    /// [`Prunex::delete_tag`] in the plan's order.
    pub async fn retention_plan(
        &self,
        image: &str,
        keep: usize,
        strategy: SortStrategy,
    ) -> Result<RetentionPlan> {
        let tags = self.sorted_tags(image, strategy).await?;
        Ok(RetentionPlan::plan(&tags, keep))
    }

    /// Returns the registry URL.
    pub fn registry_url(&self) -> &str {
        &self.registry_url
    }
}

/// Builder for creating a `Prunex` instance with custom configuration.
///
/// # Examples
///
/// ```no_run
/// use libprunex::{Credentials, Prunex};
///
/// let prunex = Prunex::builder()
///     .registry_url("http://localhost:5000")
///     .with_credentials(Credentials::basic("admin", "secret"))
///     .build()
///     .unwrap();
/// ```
pub struct PrunexBuilder {
    registry_url: Option<String>,
    credentials: Option<Credentials>,
    client_config: Option<ClientConfig>,
}

impl PrunexBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            registry_url: None,
            credentials: None,
            client_config: None,
        }
    }

    /// Sets the registry URL.
    pub fn registry_url(mut self, url: &str) -> Self {
        self.registry_url = Some(url.to_string());
        self
    }

    /// Sets credentials for authenticated requests.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Overrides the HTTP client configuration (timeouts, pooling).
    pub fn with_client_config(mut self, config: ClientConfig) -> Self {
        self.client_config = Some(config);
        self
    }

    /// Builds the `Prunex` instance.
    pub fn build(self) -> Result<Prunex> {
        let registry_url = self
            .registry_url
            .ok_or_else(|| PrunexError::validation("Registry URL is required"))?;

        let client = Client::with_config(
            &registry_url,
            self.credentials,
            self.client_config.unwrap_or_default(),
        )?;

        Ok(Prunex {
            registry: Registry::new(client),
            registry_url,
        })
    }
}

impl Default for PrunexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
