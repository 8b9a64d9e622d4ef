// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Processor configuration.

use std::time::Duration;

/// Tuning knobs for the print request processor.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Cadence at which the job monitor samples the host's job handle.
    pub poll_interval: Duration,
    /// Upper bound on how long the monitor will poll before giving up and
    /// reporting the job as failed. `None` polls indefinitely, matching the
    /// host platform's own lack of a deadline.
    pub poll_deadline: Option<Duration>,
    /// Size of the transfer buffer used when streaming document bytes into
    /// the host's sink.
    pub copy_buffer_len: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            poll_deadline: None,
            copy_buffer_len: 1024,
        }
    }
}
