//! Testing utilities including a mock GitHub API.
//!
//! Useful for exercising the pipeline without making real network calls.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use github_client::{GithubError, MemberSummary, UserProfile};

use crate::api::GithubApi;

/// Record of a call made to the mock API, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    OrgMembers { org: String, page: u32 },
    User { login: String },
    Follow { login: String },
}

/// A mock GitHub API with configurable rosters, profiles, and injected
/// failures. Tracks every call for assertions.
#[derive(Default)]
pub struct MockGithub {
    pages: RwLock<HashMap<u32, Vec<String>>>,
    profiles: RwLock<HashMap<String, UserProfile>>,
    broken_pages: RwLock<HashSet<u32>>,
    broken_profiles: RwLock<HashSet<String>>,
    broken_follows: RwLock<HashSet<String>>,
    calls: RwLock<Vec<MockCall>>,
}

impl MockGithub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put logins on a listing page.
    pub fn with_page(self, page: u32, logins: &[&str]) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(page, logins.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Add a profile for a login.
    pub fn with_profile(self, profile: UserProfile) -> Self {
        self.profiles
            .write()
            .unwrap()
            .insert(profile.login.clone(), profile);
        self
    }

    /// Make a listing page answer with a server error.
    pub fn with_broken_page(self, page: u32) -> Self {
        self.broken_pages.write().unwrap().insert(page);
        self
    }

    /// Make a profile fetch answer with a server error.
    pub fn with_broken_profile(self, login: &str) -> Self {
        self.broken_profiles.write().unwrap().insert(login.to_string());
        self
    }

    /// Make a follow request answer with a server error.
    pub fn with_broken_follow(self, login: &str) -> Self {
        self.broken_follows.write().unwrap().insert(login.to_string());
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    /// Logins of every follow call, in order.
    pub fn follows(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::Follow { login } => Some(login),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: MockCall) {
        self.calls.write().unwrap().push(call);
    }
}

#[async_trait]
impl GithubApi for MockGithub {
    async fn org_members(&self, org: &str, page: u32) -> Result<Vec<MemberSummary>, GithubError> {
        self.record(MockCall::OrgMembers {
            org: org.to_string(),
            page,
        });

        if self.broken_pages.read().unwrap().contains(&page) {
            return Err(server_error(format!("/orgs/{org}/members?page={page}")));
        }

        let logins = self
            .pages
            .read()
            .unwrap()
            .get(&page)
            .cloned()
            .unwrap_or_default();
        Ok(logins
            .into_iter()
            .map(|login| MemberSummary { login, id: None })
            .collect())
    }

    async fn user(&self, login: &str) -> Result<UserProfile, GithubError> {
        self.record(MockCall::User {
            login: login.to_string(),
        });

        if self.broken_profiles.read().unwrap().contains(login) {
            return Err(server_error(format!("/users/{login}")));
        }

        self.profiles
            .read()
            .unwrap()
            .get(login)
            .cloned()
            .ok_or_else(|| GithubError::Status {
                status: 404,
                url: format!("/users/{login}"),
                body: String::new(),
            })
    }

    async fn follow(&self, login: &str) -> Result<(), GithubError> {
        self.record(MockCall::Follow {
            login: login.to_string(),
        });

        if self.broken_follows.read().unwrap().contains(login) {
            return Err(server_error(format!("/user/following/{login}")));
        }
        Ok(())
    }
}

fn server_error(url: String) -> GithubError {
    GithubError::Status {
        status: 500,
        url,
        body: String::new(),
    }
}

/// A profile that clears the default criteria.
pub fn qualifying_profile(login: &str) -> UserProfile {
    UserProfile {
        login: login.to_string(),
        public_repos: 10,
        following: 10,
        location: Some("Minneapolis".to_string()),
        name: Some(login.to_uppercase()),
        bio: None,
    }
}

/// A profile that fails the default criteria (no location).
pub fn bare_profile(login: &str) -> UserProfile {
    UserProfile {
        login: login.to_string(),
        public_repos: 10,
        following: 10,
        location: None,
        name: Some(login.to_uppercase()),
        bio: None,
    }
}
