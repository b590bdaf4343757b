//! API seam between the pipeline and the GitHub client.
//!
//! The pipeline only ever talks to this trait, so tests can swap in a
//! mock (see [`crate::testing::MockGithub`]) without touching the network.

use async_trait::async_trait;
use github_client::{GithubClient, GithubError, MemberSummary, UserProfile};

/// The three GitHub operations the pipeline needs.
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// List one page of an organization's members.
    async fn org_members(&self, org: &str, page: u32) -> Result<Vec<MemberSummary>, GithubError>;

    /// Fetch a single user profile.
    async fn user(&self, login: &str) -> Result<UserProfile, GithubError>;

    /// Follow a user as the authenticated account.
    async fn follow(&self, login: &str) -> Result<(), GithubError>;
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn org_members(&self, org: &str, page: u32) -> Result<Vec<MemberSummary>, GithubError> {
        GithubClient::org_members(self, org, page).await
    }

    async fn user(&self, login: &str) -> Result<UserProfile, GithubError> {
        GithubClient::user(self, login).await
    }

    async fn follow(&self, login: &str) -> Result<(), GithubError> {
        GithubClient::follow(self, login).await
    }
}
