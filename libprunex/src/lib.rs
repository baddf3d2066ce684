//! Prunex - Registry Tag Retention Library
//!
//! Prunex provides the building blocks for pruning Docker image tags held in
//! a private registry (typically a Nexus-hosted Docker endpoint): listing
//! images and tags, inspecting manifests, ranking tags by a pluggable
//! strategy, and planning keep-N retention deletions.
//!
//! # Quick Start
//!
//! ```no_run
//! use libprunex::{Prunex, SortStrategy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let prunex = Prunex::connect("http://localhost:5000")?;
//!
//!     // Everything older than the five newest tags, by semver order
//!     let plan = prunex
//!         .retention_plan("acme/widget", 5, SortStrategy::Semver)
//!         .await?;
//!
//!     for tag in &plan.to_delete {
//!         prunex.delete_tag("acme/widget", tag).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`Prunex`] / [`PrunexBuilder`] - high-level entry point
//! - [`SortStrategy`] - tag ranking strategy (numeric-extraction or semver)
//! - [`RetentionPlan`] - keep-N deletion plan over an ordered tag list
//! - [`Credentials`] - registry authentication
//!
//! The lower-level modules ([`client`], [`registry`], [`sort`], [`retention`])
//! are public for embedders that need fine-grained control.

#![warn(clippy::all)]

/// Returns the libprunex crate version.
///
/// # Examples
///
/// ```
/// let version = libprunex::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API (main entry point)
mod prunex;
pub use prunex::{Prunex, PrunexBuilder};

// Re-export commonly used types for convenience
pub use auth::Credentials;
pub use error::{PrunexError, Result};
pub use retention::RetentionPlan;
pub use sort::SortStrategy;

pub mod auth;
pub mod client;
pub mod error;
pub mod registry;
pub mod retention;
pub mod sort;
