//! Run configuration.

use std::time::Duration;

use crate::criteria::Criteria;

/// Configuration for one scan-and-follow run.
///
/// Built once at startup and passed by reference through the pipeline;
/// there is no ambient global state.
#[derive(Debug, Clone)]
pub struct FollowConfig {
    /// Organization whose roster is scanned.
    pub organization: String,

    /// Number of listing pages to walk. The member listing is not
    /// auto-sized; this is a fixed upper bound with room for growth,
    /// and pages past the end of the roster simply come back empty.
    pub pages: u32,

    /// Profile bar a member must clear to be followed.
    pub criteria: Criteria,

    /// Wait inserted after each follow request before its concurrency
    /// slot frees up. Caps the effective follow rate independently of
    /// the concurrency limit.
    pub follow_delay: Duration,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            organization: "lighthouse-labs".to_string(),
            pages: 60,
            criteria: Criteria::default(),
            follow_delay: Duration::from_millis(1000),
        }
    }
}

impl FollowConfig {
    /// Create a config for an organization with default criteria.
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            ..Default::default()
        }
    }

    /// Set the page bound.
    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = pages;
        self
    }

    /// Set the inclusion criteria.
    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Set the post-follow throttle delay.
    pub fn with_follow_delay(mut self, delay: Duration) -> Self {
        self.follow_delay = delay;
        self
    }
}
