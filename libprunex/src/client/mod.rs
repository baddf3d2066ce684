//! HTTP client for Docker Registry v2 communication.
//!
//! A thin client built on reqwest for talking to a Nexus-hosted Docker
//! registry endpoint. Credentials are injected at construction time; every
//! request that goes out carries the same Authorization header (or none for
//! anonymous access).

use crate::auth::Credentials;
use crate::error::{PrunexError, Result};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;


/// Response from the catalog API endpoint.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    /// List of image repository names
    repositories: Vec<String>,
}

/// Response from the tags list API endpoint.
#[derive(Debug, Deserialize)]
struct TagsResponse {
    /// Repository name
    name: String,
    /// List of tag names
    tags: Vec<String>,
}

/// Version information returned by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryVersion {
    /// The Docker-Distribution-API-Version header value, if present.
    /// Typically "registry/2.0".
    pub api_version: Option<String>,
}

/// Configuration for the HTTP client.
///
/// # Examples
///
/// ```
/// use libprunex::client::ClientConfig;
///
/// let config = ClientConfig::new().with_timeout(60);
/// assert_eq!(config.timeout_seconds, 60);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
    /// Maximum idle connections per host (default: 10)
    pub max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            max_idle_per_host: 10,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the maximum idle connections per host.
    pub fn with_max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }
}

/// Accept header covering both OCI and Docker schema-2 manifest types.
const MANIFEST_ACCEPT: &str = "application/vnd.oci.image.manifest.v1+json, \
     application/vnd.docker.distribution.manifest.v2+json";

/// HTTP client for the registry API.
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP client
    http_client: ReqwestClient,
    /// Base registry URL (e.g., "https://nexus.example.com")
    registry_url: String,
    /// Credentials applied to every request
    credentials: Option<Credentials>,
}

impl Client {
    /// Creates a new client for the specified registry URL with default
    /// configuration.
    ///
    /// Credentials are passed in explicitly; the client never reads them from
    /// the environment or a config file on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::client::Client;
    ///
    /// let client = Client::new("http://localhost:5000", None).unwrap();
    /// assert_eq!(client.registry_url(), "http://localhost:5000");
    /// ```
    pub fn new(registry_url: &str, credentials: Option<Credentials>) -> Result<Self> {
        Self::with_config(registry_url, credentials, ClientConfig::default())
    }

    /// Creates a new client with custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::client::{Client, ClientConfig};
    ///
    /// let config = ClientConfig::new().with_timeout(60);
    /// let client = Client::with_config("http://localhost:5000", None, config).unwrap();
    /// ```
    pub fn with_config(
        registry_url: &str,
        credentials: Option<Credentials>,
        config: ClientConfig,
    ) -> Result<Self> {
        let normalized_url = Self::normalize_url(registry_url)?;

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| PrunexError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            http_client,
            registry_url: normalized_url,
            credentials,
        })
    }

    /// Normalizes a registry URL: default scheme, no trailing slashes.
    fn normalize_url(url: &str) -> Result<String> {
        let url = url.trim();

        if url.is_empty() {
            return Err(PrunexError::validation("Registry URL cannot be empty"));
        }

        let url = if !url.starts_with("http://") && !url.starts_with("https://") {
            format!("http://{}", url)
        } else {
            url.to_string()
        };

        let url = url.trim_end_matches('/');

        Ok(url.to_string())
    }

    /// Returns the base registry URL.
    pub fn registry_url(&self) -> &str {
        &self.registry_url
    }

    /// Builds a request with the Authorization header applied if credentials
    /// were provided.
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self.http_client.request(method, url);
        match self.credentials.as_ref().and_then(|c| c.to_header_value()) {
            Some(header) => request.header("Authorization", header),
            None => request,
        }
    }

    /// Checks that the registry answers the `/v2/` version endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is unreachable or the configured
    /// credentials are rejected.
    pub async fn check_version(&self) -> Result<RegistryVersion> {
        let url = format!("{}/v2/", self.registry_url);

        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(|e| Self::translate_reqwest_error(e, &self.registry_url))?;

        // Extract version information from headers before consuming response
        let api_version = response
            .headers()
            .get("Docker-Distribution-API-Version")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        Self::check_response_status(response).await?;

        Ok(RegistryVersion { api_version })
    }

    /// Fetches the catalog of image repositories.
    ///
    /// Performs a GET against `/v2/_catalog`, following `Link` pagination
    /// headers until all repository names have been collected.
    pub async fn fetch_catalog(&self) -> Result<Vec<String>> {
        self.fetch_catalog_paginated(None).await
    }

    /// Fetches the catalog with an optional per-page limit.
    pub async fn fetch_catalog_paginated(&self, limit: Option<usize>) -> Result<Vec<String>> {
        let mut all_repositories = Vec::new();
        let mut url = format!("{}/v2/_catalog", self.registry_url);

        if let Some(n) = limit {
            url.push_str(&format!("?n={}", n));
        }

        loop {
            let response = self
                .request(Method::GET, &url)
                .send()
                .await
                .map_err(|e| Self::translate_reqwest_error(e, &self.registry_url))?;

            // Extract Link header for pagination before consuming response
            let next_path = Self::extract_next_link(response.headers());

            let response = Self::check_response_status(response).await?;

            let catalog: CatalogResponse = response.json().await.map_err(|e| {
                PrunexError::validation_with_source("Failed to parse catalog response", e)
            })?;

            all_repositories.extend(catalog.repositories);

            if let Some(path) = next_path {
                url = format!("{}{}", self.registry_url, path);
            } else {
                break;
            }
        }

        Ok(all_repositories)
    }

    /// Fetches the list of tags for a repository.
    ///
    /// Performs a GET against `/v2/<name>/tags/list`, following `Link`
    /// pagination headers until all tags have been collected.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository does not exist or the response is
    /// malformed.
    pub async fn fetch_tags(&self, repository: &str) -> Result<Vec<String>> {
        self.fetch_tags_paginated(repository, None).await
    }

    /// Fetches the tag list with an optional per-page limit.
    pub async fn fetch_tags_paginated(
        &self,
        repository: &str,
        limit: Option<usize>,
    ) -> Result<Vec<String>> {
        let mut all_tags = Vec::new();
        let mut url = format!("{}/v2/{}/tags/list", self.registry_url, repository);

        if let Some(n) = limit {
            url.push_str(&format!("?n={}", n));
        }

        loop {
            let response = self
                .request(Method::GET, &url)
                .send()
                .await
                .map_err(|e| Self::translate_reqwest_error(e, &self.registry_url))?;

            let next_path = Self::extract_next_link(response.headers());

            let response = Self::check_response_status(response).await?;

            let tags_response: TagsResponse = response.json().await.map_err(|e| {
                PrunexError::validation_with_source("Failed to parse tags response", e)
            })?;

            // The registry echoes the repository name back; a mismatch means
            // we are talking to something confused.
            if tags_response.name != repository {
                return Err(PrunexError::validation(format!(
                    "Registry returned tags for '{}' but expected '{}'",
                    tags_response.name, repository
                )));
            }

            all_tags.extend(tags_response.tags);

            if let Some(path) = next_path {
                url = format!("{}{}", self.registry_url, path);
            } else {
                break;
            }
        }

        Ok(all_tags)
    }

    /// Fetches a manifest by tag or digest.
    ///
    /// Performs a GET against `/v2/<name>/manifests/<reference>` with Accept
    /// headers for OCI and Docker schema-2 manifests.
    ///
    /// # Returns
    ///
    /// A tuple of the raw manifest bytes and the `Docker-Content-Digest`
    /// header value, which is the digest deletions must target.
    pub async fn fetch_manifest(
        &self,
        repository: &str,
        reference: &str,
    ) -> Result<(Vec<u8>, String)> {
        let url = format!(
            "{}/v2/{}/manifests/{}",
            self.registry_url, repository, reference
        );

        let response = self
            .request(Method::GET, &url)
            .header("Accept", MANIFEST_ACCEPT)
            .send()
            .await
            .map_err(|e| Self::translate_reqwest_error(e, &self.registry_url))?;

        let response = Self::check_response_status(response).await?;

        let digest = response
            .headers()
            .get("Docker-Content-Digest")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                PrunexError::validation("Response missing Docker-Content-Digest header")
            })?;

        let manifest_bytes = response
            .bytes()
            .await
            .map_err(|e| PrunexError::network_with_source("Failed to read manifest response", e))?;

        Ok((manifest_bytes.to_vec(), digest))
    }

    /// Deletes a manifest by digest.
    ///
    /// Performs a DELETE against `/v2/<name>/manifests/<digest>`. The registry
    /// only accepts digests here, never tags; resolve the tag first with
    /// [`Client::fetch_manifest`].
    ///
    /// # Errors
    ///
    /// Returns an error if the digest is unknown, the credentials lack delete
    /// permission, or the registry has deletion disabled.
    pub async fn delete_manifest(&self, repository: &str, digest: &str) -> Result<()> {
        let url = format!(
            "{}/v2/{}/manifests/{}",
            self.registry_url, repository, digest
        );

        let response = self
            .request(Method::DELETE, &url)
            .send()
            .await
            .map_err(|e| Self::translate_reqwest_error(e, &self.registry_url))?;

        Self::check_response_status(response).await.map(|_| ())
    }

    /// Extracts the next page path from the Link header.
    ///
    /// Format: `Link: </v2/_catalog?n=100&last=repo99>; rel="next"`
    fn extract_next_link(headers: &reqwest::header::HeaderMap) -> Option<String> {
        let link_header = headers.get(reqwest::header::LINK)?;
        let link_str = link_header.to_str().ok()?;

        for link_part in link_str.split(',') {
            let link_part = link_part.trim();

            if link_part.contains("rel=\"next\"") || link_part.contains("rel='next'") {
                if let Some(start) = link_part.find('<')
                    && let Some(end) = link_part.find('>')
                {
                    // The path is relative and already starts with /v2/
                    let path = &link_part[start + 1..end];
                    return Some(path.to_string());
                }
            }
        }

        None
    }

    /// Translates a reqwest error into a PrunexError.
    fn translate_reqwest_error(error: reqwest::Error, registry_url: &str) -> PrunexError {
        if error.is_timeout() {
            PrunexError::network(format!("Request to {} timed out", registry_url))
        } else if error.is_connect() {
            PrunexError::network_with_source(
                format!("Failed to connect to registry at {}", registry_url),
                error,
            )
        } else if error.is_request() {
            PrunexError::network_with_source(
                format!("Failed to send request to {}", registry_url),
                error,
            )
        } else {
            PrunexError::network_with_source(
                format!("Network error communicating with {}", registry_url),
                error,
            )
        }
    }

    /// Checks the HTTP response status and translates failures to PrunexError.
    async fn check_response_status(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("(unable to read response body)"));

        match status {
            StatusCode::UNAUTHORIZED => Err(PrunexError::authentication(
                format!("Authentication required for {}: {}", url, error_body),
                Some(401),
            )),
            StatusCode::FORBIDDEN => Err(PrunexError::authentication(
                format!("Access forbidden for {}: {}", url, error_body),
                Some(403),
            )),
            StatusCode::NOT_FOUND => Err(PrunexError::not_found("endpoint", url.as_str())),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => Err(PrunexError::server(
                format!("Server error from {}: {}", url, error_body),
                status.as_u16(),
            )),
            _ => Err(PrunexError::network(format!(
                "HTTP {} from {}: {}",
                status.as_u16(),
                url,
                error_body
            ))),
        }
    }
}
