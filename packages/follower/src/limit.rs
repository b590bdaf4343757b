//! Concurrency-limited fan-out.
//!
//! A semaphore-gated task group: the structured replacement for
//! callback-chained `eachLimit`-style batching. Items are dispatched in
//! input order, at most `limit` run at once, and the call returns only
//! once every item has finished.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Run `op` over every item with at most `limit` operations in flight.
///
/// Each item acquires a semaphore permit before its task is spawned, so
/// dispatch follows input order and the in-flight count never exceeds
/// `limit`. Completion order is unconstrained. Returns after all items
/// have completed; an empty input returns immediately.
///
/// `op` is expected to contain its own failures (log and return) — the
/// fan-out itself never fails and never skips or repeats an item.
pub async fn for_each_limit<T, F, Fut>(items: Vec<T>, limit: usize, op: F)
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    // A zero limit would never dispatch anything.
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));
    let op = Arc::new(op);
    let mut tasks = JoinSet::new();

    for item in items {
        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .expect("semaphore is never closed");
        let op = Arc::clone(&op);
        tasks.spawn(async move {
            op(item).await;
            drop(permit);
        });
    }

    while tasks.join_next().await.is_some() {}
}
