//! Authentication handling for the registry client.
//!
//! Nexus-hosted Docker registries use HTTP Basic authentication. Credentials
//! are constructed explicitly by the caller (typically from the CLI
//! credentials file) and passed into the client; the library never reads
//! ambient state to find them.


/// Credentials for registry authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No authentication (anonymous access)
    Anonymous,

    /// HTTP Basic authentication with username and password
    Basic {
        /// Username for authentication
        username: String,
        /// Password for authentication
        password: String,
    },
}

impl Credentials {
    /// Creates anonymous credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::auth::Credentials;
    ///
    /// let creds = Credentials::anonymous();
    /// assert!(creds.to_header_value().is_none());
    /// ```
    pub fn anonymous() -> Self {
        Self::Anonymous
    }

    /// Creates Basic authentication credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::auth::Credentials;
    ///
    /// let creds = Credentials::basic("admin", "secret");
    /// ```
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the Authorization header value for these credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::auth::Credentials;
    ///
    /// let creds = Credentials::basic("user", "pass");
    /// let header = creds.to_header_value().unwrap();
    /// assert!(header.starts_with("Basic "));
    /// ```
    pub fn to_header_value(&self) -> Option<String> {
        match self {
            Self::Anonymous => None,
            Self::Basic { username, password } => {
                use base64::{Engine as _, engine::general_purpose};
                let credentials = format!("{}:{}", username, password);
                let encoded = general_purpose::STANDARD.encode(credentials);
                Some(format!("Basic {}", encoded))
            }
        }
    }
}
