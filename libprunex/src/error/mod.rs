//! Error types for prunex.
//!
//! Registry failures (network, auth, missing images) are fatal for the
//! invocation that triggered them and carry enough context to be printed
//! verbatim at the CLI boundary. Semver parse problems during tag sorting are
//! deliberately *not* represented here: the sorter reports them as diagnostics
//! and keeps going.

use thiserror::Error;


/// Main error type for registry operations.
#[derive(Error, Debug)]
pub enum PrunexError {
    /// Network-related errors (connection, timeout, DNS)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Authentication and permission errors (401, 403)
    #[error("Authentication error (status: {status_code:?}): {message}")]
    Authentication {
        message: String,
        status_code: Option<u16>,
    },

    /// Resource not found errors (404): unknown image or tag
    #[error("{resource_type} not found: {name}")]
    NotFound { resource_type: String, name: String },

    /// Server errors (500, 502, 503, 504)
    #[error("Server error (status: {status_code}): {message}")]
    Server { message: String, status_code: u16 },

    /// Validation errors (malformed manifest, unexpected response body)
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (missing or unreadable credentials file)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for prunex operations.
pub type Result<T> = std::result::Result<T, PrunexError>;

impl PrunexError {
    /// Creates a new network error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::error::PrunexError;
    ///
    /// let err = PrunexError::network("connection refused");
    /// assert!(matches!(err, PrunexError::Network { .. }));
    /// ```
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error with a source error.
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new authentication error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::error::PrunexError;
    ///
    /// let err = PrunexError::authentication("invalid credentials", Some(401));
    /// assert!(matches!(err, PrunexError::Authentication { .. }));
    /// ```
    pub fn authentication<S: Into<String>>(message: S, status_code: Option<u16>) -> Self {
        Self::Authentication {
            message: message.into(),
            status_code,
        }
    }

    /// Creates a new not found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::error::PrunexError;
    ///
    /// let err = PrunexError::not_found("image", "acme/widget");
    /// assert!(matches!(err, PrunexError::NotFound { .. }));
    /// ```
    pub fn not_found<S: Into<String>>(resource_type: S, name: S) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Creates a new server error.
    pub fn server<S: Into<String>>(message: S, status_code: u16) -> Self {
        Self::Server {
            message: message.into(),
            status_code,
        }
    }

    /// Creates a new validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::error::PrunexError;
    ///
    /// let err = PrunexError::validation("manifest body is not valid JSON");
    /// assert!(matches!(err, PrunexError::Validation { .. }));
    /// ```
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new validation error with a source error.
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }
}
