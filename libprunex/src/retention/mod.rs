//! Retention planning.
//!
//! Turns an ordered tag list plus a keep-count into a concrete deletion plan.
//! The planner is pure: it never talks to the registry and never re-sorts its
//! input. Callers are responsible for ordering the tags ascending (oldest
//! first, see [`crate::sort`]) and for executing or merely reporting the plan.


/// The outcome of evaluating a keep-N retention policy against a tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPlan {
    /// Tags eligible for deletion, oldest first.
    pub to_delete: Vec<String>,
    /// Whether enough tags exist to honor the keep-count at all. When false,
    /// `to_delete` is empty and the caller should report the shortfall
    /// instead of deleting anything.
    pub sufficient: bool,
}

impl RetentionPlan {
    /// Computes the deletion plan for an ordered tag list.
    ///
    /// `ordered_tags` must be ascending, oldest first. With `n` tags and a
    /// keep-count `k`:
    ///
    /// - `n >= k`: the plan selects the first `n - k` tags (the oldest ones)
    ///   and is marked sufficient. Exactly `k` tags survive.
    /// - `n < k`: nothing is selected and the plan is marked insufficient.
    ///
    /// # Examples
    ///
    /// ```
    /// use libprunex::retention::RetentionPlan;
    ///
    /// let tags: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    /// let plan = RetentionPlan::plan(&tags, 2);
    /// assert!(plan.sufficient);
    /// assert_eq!(plan.to_delete, vec!["a", "b"]);
    /// ```
    pub fn plan(ordered_tags: &[String], keep: usize) -> Self {
        if ordered_tags.len() < keep {
            return Self {
                to_delete: Vec::new(),
                sufficient: false,
            };
        }

        Self {
            to_delete: ordered_tags[..ordered_tags.len() - keep].to_vec(),
            sufficient: true,
        }
    }

    /// Returns true when the plan selects nothing, either because the
    /// keep-count already covers every tag or because too few tags exist.
    pub fn is_empty(&self) -> bool {
        self.to_delete.is_empty()
    }
}
