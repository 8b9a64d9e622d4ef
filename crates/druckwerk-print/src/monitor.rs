// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Job monitor: polls a host job handle until it reaches a terminal state.
//
// The print host offers no blocking wait, only the three terminal flags on
// the handle, so the monitor samples them on a background task. By default
// polling is unbounded — the host never imposes a deadline — but a bounded
// deadline can be configured, which maps expiry to a failed outcome.

use std::time::Duration;

use tracing::{debug, error, warn};

use druckwerk_bridge::traits::JobHandle;
use druckwerk_core::config::ProcessorConfig;
use druckwerk_core::types::PrintOutcome;

/// Polls a submitted job to its terminal outcome.
pub struct JobMonitor {
    poll_interval: Duration,
    deadline: Option<Duration>,
}

impl JobMonitor {
    pub fn new(config: &ProcessorConfig) -> Self {
        Self {
            poll_interval: config.poll_interval,
            deadline: config.poll_deadline,
        }
    }

    /// Resolve the terminal outcome of a submitted job.
    ///
    /// A missing handle means the host rejected the submission, which is a
    /// failed outcome. Terminal flags are checked cancelled → completed →
    /// failed, matching the host's own precedence.
    pub async fn await_outcome(&self, handle: Option<Box<dyn JobHandle>>) -> PrintOutcome {
        let Some(handle) = handle else {
            error!("print host returned no job handle");
            return PrintOutcome::Failed;
        };

        let started = tokio::time::Instant::now();
        loop {
            if handle.is_cancelled() {
                debug!("job reached cancelled state");
                return PrintOutcome::Cancelled;
            }
            if handle.is_completed() {
                debug!("job reached completed state");
                return PrintOutcome::Completed;
            }
            if handle.is_failed() {
                debug!("job reached failed state");
                return PrintOutcome::Failed;
            }

            if let Some(deadline) = self.deadline {
                if started.elapsed() >= deadline {
                    warn!(?deadline, "job did not reach a terminal state in time");
                    return PrintOutcome::Failed;
                }
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
