//! Profile-completeness criteria.

use github_client::UserProfile;

/// Minimum bar a member profile must clear to be followed.
///
/// All checks are conjunctive. Thresholds are deliberately low: most
/// organization members have made zero effort on their profile, so the
/// point is to filter out completely empty accounts, not to rank.
#[derive(Debug, Clone)]
pub struct Criteria {
    /// Minimum number of public repositories.
    pub min_public_repos: u32,

    /// Minimum number of accounts the member must be following.
    pub min_following_users: u32,

    /// Require a non-empty location.
    pub require_location: bool,

    /// Require a non-empty display name.
    pub require_name: bool,

    /// Require a non-empty bio. Off by default; very few profiles set one.
    pub require_bio: bool,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            min_public_repos: 3,
            min_following_users: 5,
            require_location: true,
            require_name: true,
            require_bio: false,
        }
    }
}

impl Criteria {
    /// Decide whether a profile clears the bar.
    ///
    /// A missing field behaves like an empty one: unset counters read as
    /// zero and unset text fields fail their non-empty check. Never panics.
    pub fn is_qualified(&self, profile: &UserProfile) -> bool {
        profile.public_repos >= self.min_public_repos
            && profile.following >= self.min_following_users
            && (!self.require_location || non_empty(&profile.location))
            && (!self.require_name || non_empty(&profile.name))
            && (!self.require_bio || non_empty(&profile.bio))
    }
}

fn non_empty(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}
