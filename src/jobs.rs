use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::{debug, info};

use crate::client::types::CrawlSnapshot;
use crate::client::FirecrawlApi;
use crate::error::Error;

/// Identifies a submitted crawl job on the remote side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobHandle {
    pub id: String,
    pub submitted_at: DateTime<Utc>,
}

impl JobHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
    TimedOut,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Failed | JobStatus::TimedOut
        )
    }

    /// Maps the status vocabulary reported by the remote service. Unrecognized
    /// non-terminal strings count as `Running` so a vocabulary change keeps the
    /// poller waiting instead of failing the job.
    pub fn from_remote(status: &str) -> Self {
        match status {
            "completed" => JobStatus::Completed,
            "failed" | "cancelled" => JobStatus::Failed,
            "waiting" | "queued" | "pending" => JobStatus::Pending,
            _ => JobStatus::Running,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PollSettings {
    pub interval: Duration,
    pub max_wait: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_wait: Duration::from_secs(300),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub status: JobStatus,
    pub snapshot: CrawlSnapshot,
}

/// Polls the job's status endpoint until it reaches a terminal state or the
/// local deadline elapses. Polls are sequential, separated by the configured
/// interval; on timeout the remote job is left running and the last observed
/// snapshot is returned.
pub async fn wait_until_terminal(
    api: &dyn FirecrawlApi,
    handle: &JobHandle,
    settings: &PollSettings,
) -> Result<CrawlOutcome, Error> {
    let started = Instant::now();
    loop {
        let snapshot = api.crawl_status(&handle.id).await?;
        debug!(
            job_id = %handle.id,
            status = ?snapshot.status,
            completed = snapshot.completed,
            total = snapshot.total,
            "crawl poll"
        );

        if snapshot.status.is_terminal() {
            info!(job_id = %handle.id, status = ?snapshot.status, "crawl job finished");
            return Ok(CrawlOutcome {
                status: snapshot.status,
                snapshot,
            });
        }

        tokio::time::sleep(settings.interval).await;

        if started.elapsed() >= settings.max_wait {
            info!(job_id = %handle.id, "crawl job wait deadline reached");
            return Ok(CrawlOutcome {
                status: JobStatus::TimedOut,
                snapshot,
            });
        }
    }
}
