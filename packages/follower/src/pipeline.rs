//! Pipeline orchestration: scan fully, then follow.

use std::sync::Arc;

use tracing::info;

use crate::api::GithubApi;
use crate::config::FollowConfig;
use crate::follow::{dispatch, FollowReport};
use crate::scan::scan;

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Logins that cleared the criteria, in scan-completion order.
    pub qualified: Vec<String>,

    /// Follow-phase outcome counts.
    pub report: FollowReport,
}

/// Run the whole pipeline: the scan completes over every page before the
/// first follow request goes out, and the two phases never interleave.
pub async fn run(api: Arc<dyn GithubApi>, config: &FollowConfig) -> RunSummary {
    let qualified = scan(Arc::clone(&api), config).await;
    info!(qualified = qualified.len(), "scan complete, starting follow phase");

    let report = dispatch(api, qualified.clone(), config.follow_delay).await;
    info!(
        followed = report.followed,
        failed = report.failed,
        "follow phase complete"
    );

    RunSummary { qualified, report }
}
