use serde::Deserialize;

/// One entry from an organization member listing.
///
/// The listing endpoint returns full user summaries; only the login is
/// needed downstream, everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberSummary {
    pub login: String,
    pub id: Option<i64>,
}

/// A user profile as returned by `GET /users/{login}`.
///
/// Every field defaults when missing or null, so a sparse profile
/// deserializes instead of failing. An unset counter reads as zero and an
/// unset text field reads as `None`; both fail profile-completeness checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}
