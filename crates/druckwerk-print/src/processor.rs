// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Print request processor: orchestrates one print invocation end to end.
//
// normalize → submit (on the host's UI dispatch context, inside
// `PrintHost::submit`) → observe (job monitor on a background task) →
// report. Invocations are stateless and independent of one another.

use std::sync::Arc;

use tracing::{error, info, instrument};

use druckwerk_bridge::traits::{ContentAccess, PrintHost};
use druckwerk_content::ContentResolver;
use druckwerk_core::config::ProcessorConfig;
use druckwerk_core::types::{CheckResult, PrintOutcome, PrintRequest};

use crate::adapter::StreamAdapter;
use crate::monitor::JobMonitor;
use crate::options;

/// MIME tags accepted by the `types` query. Fixed list; the bridge does not
/// probe the host for formats.
pub const SUPPORTED_CONTENT_TYPES: [&str; 6] = [
    "application/pdf",
    "text/html",
    "text/plain",
    "image/png",
    "image/jpeg",
    "image/gif",
];

/// The print request processor.
///
/// Holds the platform seams (print host, content access) and the processor
/// configuration; one instance serves any number of concurrent invocations.
pub struct PrintProcessor {
    host: Arc<dyn PrintHost>,
    content: Arc<dyn ContentAccess>,
    config: ProcessorConfig,
}

impl PrintProcessor {
    pub fn new(host: Arc<dyn PrintHost>, content: Arc<dyn ContentAccess>) -> Self {
        Self::with_config(host, content, ProcessorConfig::default())
    }

    pub fn with_config(
        host: Arc<dyn PrintHost>,
        content: Arc<dyn ContentAccess>,
        config: ProcessorConfig,
    ) -> Self {
        Self {
            host,
            content,
            config,
        }
    }

    /// Capability probe: whether the host offers a print service. The
    /// printer list is always empty — enumeration is not implemented.
    pub async fn check(&self) -> CheckResult {
        let host = Arc::clone(&self.host);
        // Kept off the gateway context as a courtesy; the probe itself is
        // cheap but host calls should never run on the invocation thread.
        let avail = tokio::task::spawn_blocking(move || host.is_available())
            .await
            .unwrap_or(false);
        CheckResult {
            avail,
            printers: Vec::new(),
        }
    }

    /// The fixed list of accepted content MIME tags.
    pub fn supported_types(&self) -> &'static [&'static str] {
        &SUPPORTED_CONTENT_TYPES
    }

    /// Run one print invocation to its terminal outcome.
    ///
    /// Errors never escape: a malformed request, a host rejection, or a
    /// submission failure all resolve to [`PrintOutcome::Failed`] with a log
    /// entry, matching the gateway's result contract.
    #[instrument(skip_all, fields(job_name = %request.name))]
    pub async fn print(&self, request: PrintRequest) -> PrintOutcome {
        let normalized = options::normalize(&request, self.host.supports_duplex());

        if normalized
            .content
            .as_deref()
            .map_or(true, |c| c.is_empty())
        {
            error!("print request carries no content reference");
            return PrintOutcome::Failed;
        }

        let adapter = StreamAdapter::new(
            normalized.job_name.clone(),
            normalized.content.clone(),
            ContentResolver::new(Arc::clone(&self.content)),
            self.config.copy_buffer_len,
        );

        info!(
            copies = normalized.copies,
            printer = normalized.printer.as_deref().unwrap_or("<default>"),
            "submitting print job"
        );

        // `PrintHost::submit` marshals onto the platform UI context and may
        // block until the host accepts; keep it off the async executor.
        let host = Arc::clone(&self.host);
        let job_name = normalized.job_name.clone();
        let attributes = normalized.attributes.clone();
        let submitted = tokio::task::spawn_blocking(move || {
            host.submit(&job_name, Box::new(adapter), &attributes)
        })
        .await;

        let handle = match submitted {
            Ok(Ok(handle)) => handle,
            Ok(Err(e)) => {
                error!(error = %e, "print host rejected submission");
                return PrintOutcome::Failed;
            }
            Err(e) => {
                error!(error = %e, "submission task failed");
                return PrintOutcome::Failed;
            }
        };

        let outcome = JobMonitor::new(&self.config).await_outcome(handle).await;
        info!(%outcome, "print job reached terminal state");
        outcome
    }
}
