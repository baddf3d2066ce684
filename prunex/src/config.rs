use libprunex::{Credentials, PrunexError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use url::Url;

/// Registry credentials and location, as written by `prunex configure`.
///
/// Persisted as TOML. The TOML serializer escapes backslashes and quotes in
/// the password, so any string survives a round trip without hand-escaping.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Base URL of the Nexus host, without trailing slash
    pub host: String,
    /// Name of the hosted Docker repository on that Nexus instance
    pub repository: String,
    /// Username for Basic authentication (empty for anonymous access)
    #[serde(default)]
    pub username: String,
    /// Password for Basic authentication
    #[serde(default)]
    pub password: String,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &PathBuf) -> Result<Self, PrunexError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            PrunexError::config_with_source(
                format!(
                    "Failed to read config file {} (run 'prunex configure' first)",
                    path.display()
                ),
                Some(path.display().to_string()),
                e,
            )
        })?;

        toml::from_str(&contents).map_err(|e| {
            PrunexError::config_with_source(
                format!("Failed to parse config file {}", path.display()),
                Some(path.display().to_string()),
                e,
            )
        })
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &PathBuf) -> Result<(), PrunexError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PrunexError::config_with_source(
                    "Failed to create config directory".to_string(),
                    Some(path.display().to_string()),
                    e,
                )
            })?;
        }

        let toml_str = toml::to_string_pretty(self).map_err(|e| {
            PrunexError::config_with_source(
                "Failed to serialize config".to_string(),
                Some(path.display().to_string()),
                e,
            )
        })?;

        fs::write(path, toml_str).map_err(|e| {
            PrunexError::config_with_source(
                "Failed to write config file".to_string(),
                Some(path.display().to_string()),
                e,
            )
        })?;

        Ok(())
    }

    /// The effective registry URL the client should talk to.
    ///
    /// Nexus serves each hosted Docker repository under
    /// `<host>/repository/<name>`; with an empty repository name the host is
    /// assumed to be a direct registry endpoint (e.g. a connector port).
    pub fn registry_url(&self) -> String {
        if self.repository.is_empty() {
            self.host.clone()
        } else {
            format!("{}/repository/{}", self.host, self.repository)
        }
    }

    /// Credentials for the client, if a username was configured.
    pub fn credentials(&self) -> Option<Credentials> {
        if self.username.is_empty() {
            None
        } else {
            Some(Credentials::basic(&self.username, &self.password))
        }
    }
}

/// Get the config file path, respecting the PRUNEX_CONFIG environment variable.
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var("PRUNEX_CONFIG") {
        return PathBuf::from(config_path);
    }

    // Default to ~/.config/prunex/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("prunex").join("config.toml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.toml")
    }
}

/// Strip trailing slashes from a host URL.
///
/// Nexus rejects doubled slashes in API paths, so a host entered as
/// `https://nexus.example.com/` has to lose the trailing slash before URLs
/// are composed from it.
pub fn normalize_host(host: &str) -> String {
    host.trim().trim_end_matches('/').to_string()
}

/// Validate a host URL.
///
/// The URL must parse, use http or https, and carry a host. A missing scheme
/// defaults to https, since Nexus instances are normally TLS-fronted.
pub fn validate_host_url(host: &str) -> Result<String, String> {
    let url_to_parse = if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };

    let parsed =
        Url::parse(&url_to_parse).map_err(|e| format!("Invalid host URL '{}': {}", host, e))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                scheme
            ));
        }
    }

    if parsed.host_str().is_none() {
        return Err(format!("Invalid host URL '{}': missing host", host));
    }

    Ok(normalize_host(url_to_parse.as_str()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
