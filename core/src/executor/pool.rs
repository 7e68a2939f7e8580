use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio::sync::Semaphore;

use crate::classify::KeywordClassifier;
use crate::config::ScanConfig;
use crate::fetch::PageFetcher;
use crate::record::{MatchResult, TaskRecord};

use super::progress::ProgressMonitor;

#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Maximum number of records in flight. Clamped to `1..=Semaphore::MAX_PERMITS`.
    pub concurrency: usize,
    /// Held after each record, before the slot is handed to the next one.
    pub task_delay: Duration,
    pub progress: bool,
}

impl PoolOptions {
    pub fn from_config(cfg: &ScanConfig) -> Self {
        Self {
            concurrency: cfg.concurrency,
            task_delay: cfg.task_delay(),
            progress: cfg.progress,
        }
    }
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self::from_config(&ScanConfig::default())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub completed: usize,
    pub failed: usize,
}

/// Fetch and classify every record, at most `opts.concurrency` at a time.
///
/// Each unit gets exclusive `&mut` access to its own record, so no locking is
/// needed. Returns only after every record has reached a terminal state.
///
/// # Arguments
///
/// * `records` - Records to process; each one is completed exactly once
/// * `fetcher` - Shared page fetcher
/// * `classifier` - Keyword test applied to successfully fetched pages
/// * `opts` - Concurrency limit, per-task delay and progress display
pub async fn process<F>(
    records: &mut [TaskRecord],
    fetcher: &F,
    classifier: &KeywordClassifier,
    opts: &PoolOptions,
) -> PoolStats
where
    F: PageFetcher + ?Sized,
{
    let total = records.len();
    let limit = opts.concurrency.clamp(1, Semaphore::MAX_PERMITS);
    let task_delay = opts.task_delay;

    tracing::info!(
        target: "sitescan.pool",
        total,
        concurrency = limit,
        delay_ms = task_delay.as_millis() as u64,
        "processing records"
    );

    let sem = Semaphore::new(limit);
    let started = AtomicUsize::new(0);
    let progress = ProgressMonitor::new(total, opts.progress);

    let sem = &sem;
    let started = &started;
    let mut futs: FuturesUnordered<_> = FuturesUnordered::new();

    for record in records.iter_mut() {
        futs.push(async move {
            let _permit = match sem.acquire().await {
                Ok(permit) => permit,
                Err(_) => {
                    record.record_error("worker pool closed before the record was processed");
                    return false;
                }
            };

            let seq = started.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::info!(
                target: "sitescan.pool",
                "[{}/{}] scanning {}",
                seq,
                total,
                record.url()
            );

            let ok = process_record(record, fetcher, classifier, seq, total).await;

            // The slot stays taken for the delay; this is what paces requests.
            if !task_delay.is_zero() {
                tokio::time::sleep(task_delay).await;
            }
            ok
        });
    }

    let mut stats = PoolStats::default();
    while let Some(ok) = futs.next().await {
        stats.completed += 1;
        if !ok {
            stats.failed += 1;
        }
        progress.record_done(ok);
    }
    progress.finish(stats.failed);

    tracing::info!(
        target: "sitescan.pool",
        completed = stats.completed,
        failed = stats.failed,
        "all records processed"
    );
    stats
}

async fn process_record<F>(
    record: &mut TaskRecord,
    fetcher: &F,
    classifier: &KeywordClassifier,
    seq: usize,
    total: usize,
) -> bool
where
    F: PageFetcher + ?Sized,
{
    match fetcher.fetch(record.url()).await {
        Ok(html) => {
            let result = MatchResult::from(classifier.matches(&html));
            match result {
                MatchResult::Match => tracing::info!(
                    target: "sitescan.pool",
                    "[{}/{}] keyword match: {}",
                    seq,
                    total,
                    record.url()
                ),
                MatchResult::NoMatch => tracing::info!(
                    target: "sitescan.pool",
                    "[{}/{}] no keyword: {}",
                    seq,
                    total,
                    record.url()
                ),
            }
            record.record_match(result);
            true
        }
        Err(err) => {
            tracing::warn!(
                target: "sitescan.pool",
                url = %record.url(),
                row = record.position() + 1,
                kind = %err.kind(),
                "fetch failed: {}",
                err
            );
            record.record_error(err.to_string());
            false
        }
    }
}
