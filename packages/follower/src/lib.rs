//! Organization roster scan-and-follow pipeline.
//!
//! A one-shot batch job in three stages:
//!
//! 1. Paginate through an organization's member listing (fixed page bound).
//! 2. Fan out profile lookups, bounded by a concurrency cap, keeping the
//!    members whose profiles clear a minimal completeness bar.
//! 3. Fan out follow requests over the qualified list, bounded by its own
//!    cap and throttled by a fixed per-item delay.
//!
//! The scan always completes before the first follow request goes out.
//! Per-item network failures are logged and contained; nothing short of a
//! malformed invocation stops a run.
//!
//! # Modules
//!
//! - [`api`] - The `GithubApi` trait seam over the REST client
//! - [`config`] - Run configuration and criteria thresholds
//! - [`criteria`] - Profile-completeness predicate
//! - [`limit`] - Concurrency-limited fan-out primitive
//! - [`scan`] - Membership scan phase
//! - [`follow`] - Follow dispatch phase
//! - [`pipeline`] - Phase orchestration
//! - [`testing`] - Mock API for tests

pub mod api;
pub mod config;
pub mod criteria;
pub mod follow;
pub mod limit;
pub mod pipeline;
pub mod scan;
pub mod testing;

pub use api::GithubApi;
pub use config::FollowConfig;
pub use criteria::Criteria;
pub use follow::{dispatch, FollowReport};
pub use limit::for_each_limit;
pub use pipeline::{run, RunSummary};
pub use scan::scan;
