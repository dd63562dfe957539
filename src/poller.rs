use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use tracing::{debug, error, info};

use crate::dashboard::Dashboard;
use crate::rclone_client::{RcloneClient, Snapshot};
use crate::types::MonitorError;

/// Anything able to produce one stats snapshot per poll cycle.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<Snapshot, MonitorError>;
}

#[async_trait]
impl StatsSource for RcloneClient {
    async fn fetch_snapshot(&self) -> Result<Snapshot, MonitorError> {
        RcloneClient::fetch_snapshot(self).await
    }
}

/// Drives the dashboard from a [`StatsSource`] on a fixed delay.
pub struct Poller<S> {
    source: S,
    dashboard: Dashboard,
    interval: Duration,
}

impl<S: StatsSource> Poller<S> {
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            source,
            dashboard: Dashboard::new(),
            interval,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run a single cycle. Returns whether the snapshot was applied.
    pub async fn poll_once(&mut self) -> bool {
        self.dashboard.begin_update();
        self.refresh().await
    }

    /// Poll until `shutdown` resolves, rendering after every state change.
    ///
    /// The delay starts once a cycle has finished, so cycles never overlap,
    /// and a failed cycle is retried on the next tick like any other.
    pub async fn run<F, Fut>(&mut self, mut on_update: F, shutdown: Fut)
    where
        F: FnMut(&Dashboard),
        Fut: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping poller");
                    break;
                }
                _ = self.cycle(&mut on_update) => {}
            }
        }
    }

    async fn cycle<F>(&mut self, on_update: &mut F)
    where
        F: FnMut(&Dashboard),
    {
        self.dashboard.begin_update();
        on_update(&self.dashboard);

        self.refresh().await;
        on_update(&self.dashboard);

        tokio::time::sleep(self.interval).await;
    }

    async fn refresh(&mut self) -> bool {
        match self.source.fetch_snapshot().await {
            Ok(snapshot) => {
                let report = self.dashboard.apply(&snapshot, Local::now());
                debug!(
                    removed = report.removed.len(),
                    changed = report.changed.len(),
                    added = report.added.len(),
                    "Applied snapshot"
                );
                true
            }
            Err(err) => {
                error!(error = %err, "Poll cycle failed");
                self.dashboard.fail(&err);
                false
            }
        }
    }
}
