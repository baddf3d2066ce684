//! Tag ordering strategies.
//!
//! Tags carry no timestamps in the registry API, so retention works off the
//! tag names themselves. Two orderings are supported:
//!
//! - **Default**: extract the first run of decimal digits from each tag and
//!   compare numerically. Suits build-number schemes like `build-17` or `v42`.
//!   Tags without digits rank as 0, including `latest`.
//! - **Semver**: parse tags as semantic versions, with `latest` pinned as the
//!   greatest element no matter what. Unparsable tags rank as `0.0.0` after a
//!   stderr diagnostic; sorting never aborts on bad input.
//!
//! The strategy is resolved once into a comparator function; nothing
//! re-inspects strategy names inside the comparison loop.

use semver::Version;
use std::cmp::Ordering;

#[cfg(test)]
mod tests;

/// The tag `latest` is conventionally the newest push and is pinned as the
/// maximum element by the semver strategy.
const LATEST: &str = "latest";

/// How tags should be ranked, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// Numeric-extraction comparison (first digit run in the tag).
    #[default]
    Default,
    /// Semantic-version comparison with `latest` pinned greatest.
    Semver,
}

impl From<&str> for SortStrategy {
    /// Maps a policy name onto a strategy. Only `"semver"` selects the semver
    /// comparator; every other value silently falls back to the default, so
    /// a typo in `--sort` never aborts a command.
    fn from(s: &str) -> Self {
        match s {
            "semver" => SortStrategy::Semver,
            _ => SortStrategy::Default,
        }
    }
}

impl SortStrategy {
    /// Returns the comparator function for this strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::sort::SortStrategy;
    /// use std::cmp::Ordering;
    ///
    /// let cmp = SortStrategy::Default.comparator();
    /// assert_eq!(cmp("v2", "v10"), Ordering::Less);
    /// ```
    pub fn comparator(&self) -> fn(&str, &str) -> Ordering {
        match self {
            SortStrategy::Default => compare_numeric,
            SortStrategy::Semver => compare_semver,
        }
    }
}

/// Extracts the first contiguous run of decimal digits from a tag and parses
/// it as an integer. Tags without digits yield 0.
///
/// # Examples
///
/// ```
/// use libprunex::sort::extract_number;
///
/// assert_eq!(extract_number("build-42"), 42);
/// assert_eq!(extract_number("v10.3"), 10);
/// assert_eq!(extract_number("latest"), 0);
/// ```
pub fn extract_number(tag: &str) -> u64 {
    let digits: String = tag
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    // A digit run too long for u64 still has to rank above everything sane.
    match digits.parse::<u64>() {
        Ok(n) => n,
        Err(_) if digits.is_empty() => 0,
        Err(_) => u64::MAX,
    }
}

/// Compares two tags by their extracted numbers.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    extract_number(a).cmp(&extract_number(b))
}

/// Compares two tags as semantic versions, `latest` pinned greatest.
fn compare_semver(a: &str, b: &str) -> Ordering {
    match (a == LATEST, b == LATEST) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => parse_version(a).cmp(&parse_version(b)),
    }
}

/// Parses a tag as a semantic version, tolerating a leading `v`/`V` as is
/// common for registry tags. Unparsable tags rank as 0.0.0 after a stderr
/// diagnostic; a bad tag must not abort the whole sort.
fn parse_version(tag: &str) -> Version {
    let stripped = tag.strip_prefix(['v', 'V']).unwrap_or(tag);
    match Version::parse(stripped) {
        Ok(version) => version,
        Err(e) => {
            eprintln!("Error parsing version '{}': {}", tag, e);
            Version::new(0, 0, 0)
        }
    }
}

/// Sorts tags in place, ascending (oldest first) under the given strategy.
///
/// The sort is stable, so repeated calls on the same input always produce the
/// same output and equal-ranked tags keep their incoming order. No
/// deduplication or filtering happens here.
///
/// # Examples
///
/// ```
/// use libprunex::sort::{SortStrategy, sort_tags};
///
/// let mut tags = vec!["v10".to_string(), "v2".to_string(), "v1".to_string()];
/// sort_tags(&mut tags, SortStrategy::Default);
/// assert_eq!(tags, vec!["v1", "v2", "v10"]);
/// ```
pub fn sort_tags(tags: &mut [String], strategy: SortStrategy) {
    let compare = strategy.comparator();
    tags.sort_by(|a, b| compare(a, b));
}
