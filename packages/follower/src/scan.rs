//! Membership scan: paginate the roster, fetch profiles, keep qualifiers.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::api::GithubApi;
use crate::config::FollowConfig;
use crate::criteria::Criteria;
use crate::limit::for_each_limit;

/// Listing pages fetched at once.
const PAGE_CONCURRENCY: usize = 5;

/// Profile lookups in flight per page.
const PROFILE_CONCURRENCY: usize = 50;

/// Walk every listing page of the organization and return the logins whose
/// profiles clear the configured criteria.
///
/// Pages fan out at [`PAGE_CONCURRENCY`]; within each page, profile lookups
/// fan out at [`PROFILE_CONCURRENCY`]. A failed page listing counts as an
/// empty page and a failed profile fetch counts as not qualified — nothing
/// short of the whole roster being walked ends the scan.
pub async fn scan(api: Arc<dyn GithubApi>, config: &FollowConfig) -> Vec<String> {
    let qualified = Arc::new(Mutex::new(Vec::new()));
    let org = Arc::new(config.organization.clone());
    let criteria = Arc::new(config.criteria.clone());
    let pages: Vec<u32> = (0..config.pages).collect();

    info!(
        organization = %org,
        pages = pages.len(),
        "scanning organization roster"
    );

    let accumulator = Arc::clone(&qualified);
    for_each_limit(pages, PAGE_CONCURRENCY, move |page| {
        let api = Arc::clone(&api);
        let org = Arc::clone(&org);
        let criteria = Arc::clone(&criteria);
        let qualified = Arc::clone(&accumulator);
        async move {
            scan_page(api, &org, &criteria, qualified, page).await;
        }
    })
    .await;

    let mut list = qualified.lock().unwrap();
    std::mem::take(&mut *list)
}

async fn scan_page(
    api: Arc<dyn GithubApi>,
    org: &str,
    criteria: &Criteria,
    qualified: Arc<Mutex<Vec<String>>>,
    page: u32,
) {
    let members = match api.org_members(org, page).await {
        Ok(members) => members,
        Err(e) => {
            warn!(page, error = %e, "failed to list members page, skipping");
            return;
        }
    };

    info!(page, members = members.len(), "processing page");

    let logins: Vec<String> = members.into_iter().map(|m| m.login).collect();
    let criteria = criteria.clone();

    for_each_limit(logins, PROFILE_CONCURRENCY, move |login| {
        let api = Arc::clone(&api);
        let criteria = criteria.clone();
        let qualified = Arc::clone(&qualified);
        async move {
            match api.user(&login).await {
                Ok(profile) if criteria.is_qualified(&profile) => {
                    info!(login = %login, "including");
                    qualified.lock().unwrap().push(login);
                }
                Ok(_) => {
                    debug!(login = %login, "excluding");
                }
                Err(e) => {
                    warn!(login = %login, error = %e, "profile fetch failed, excluding");
                }
            }
        }
    })
    .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{bare_profile, qualifying_profile, MockGithub};

    fn config(pages: u32) -> FollowConfig {
        FollowConfig::new("acme").with_pages(pages)
    }

    #[tokio::test]
    async fn collects_qualifying_members_across_pages() {
        let mock = MockGithub::new()
            .with_page(0, &["alice", "bob"])
            .with_page(1, &["carol", "dave"])
            .with_profile(qualifying_profile("alice"))
            .with_profile(qualifying_profile("bob"))
            .with_profile(qualifying_profile("carol"))
            .with_profile(bare_profile("dave"));

        let qualified = scan(Arc::new(mock), &config(2)).await;

        let mut got = qualified;
        got.sort();
        assert_eq!(got, ["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn broken_page_counts_as_empty() {
        let mock = MockGithub::new()
            .with_page(0, &["alice"])
            .with_broken_page(1)
            .with_profile(qualifying_profile("alice"));

        let qualified = scan(Arc::new(mock), &config(2)).await;
        assert_eq!(qualified, ["alice"]);
    }

    #[tokio::test]
    async fn broken_profile_counts_as_not_qualified() {
        let mock = MockGithub::new()
            .with_page(0, &["alice", "bob"])
            .with_profile(qualifying_profile("alice"))
            .with_broken_profile("bob");

        let qualified = scan(Arc::new(mock), &config(1)).await;
        assert_eq!(qualified, ["alice"]);
    }

    #[tokio::test]
    async fn empty_roster_yields_empty_list() {
        let mock = MockGithub::new();
        let qualified = scan(Arc::new(mock), &config(3)).await;
        assert!(qualified.is_empty());
    }

    #[tokio::test]
    async fn every_page_in_the_bound_is_requested() {
        let mock = Arc::new(MockGithub::new().with_page(0, &[]));
        let api: Arc<dyn GithubApi> = mock.clone();
        scan(api, &config(4)).await;

        let mut pages: Vec<u32> = mock
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                crate::testing::MockCall::OrgMembers { page, .. } => Some(page),
                _ => None,
            })
            .collect();
        pages.sort_unstable();
        assert_eq!(pages, [0, 1, 2, 3]);
    }
}
