//! Follow phase: fan out follow requests over the qualified list.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::api::GithubApi;
use crate::limit::for_each_limit;

/// Follow requests in flight at once. The real cap on request rate is the
/// per-item throttle delay, not this limit.
const FOLLOW_CONCURRENCY: usize = 200;

/// Outcome counts for the follow phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowReport {
    pub attempted: usize,
    pub followed: usize,
    pub failed: usize,
}

/// Issue a follow request for every login, at most [`FOLLOW_CONCURRENCY`]
/// in flight, holding each slot for `delay` after its request completes.
///
/// Failures are logged and tallied, never fatal; the report comes back
/// only after every item's delayed completion has fired.
pub async fn dispatch(
    api: Arc<dyn GithubApi>,
    logins: Vec<String>,
    delay: Duration,
) -> FollowReport {
    let attempted = logins.len();
    let followed = Arc::new(AtomicUsize::new(0));

    info!(members = attempted, "starting to follow qualified members");

    let tally = Arc::clone(&followed);
    for_each_limit(logins, FOLLOW_CONCURRENCY, move |login| {
        let api = Arc::clone(&api);
        let tally = Arc::clone(&tally);
        async move {
            match api.follow(&login).await {
                Ok(()) => {
                    info!(login = %login, "followed");
                    tally.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => {
                    warn!(login = %login, error = %e, "follow failed");
                }
            }
            // Hold the slot so the effective request rate stays capped.
            tokio::time::sleep(delay).await;
        }
    })
    .await;

    let followed = followed.load(Ordering::Relaxed);
    FollowReport {
        attempted,
        followed,
        failed: attempted - followed,
    }
}
