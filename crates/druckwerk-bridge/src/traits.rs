// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the print host and content access.
//
// The host owns the job queue, the print UI, and the rendering pipeline.
// Druckwerk only submits a document adapter and watches the returned handle.

use std::io::{Read, Write};

use druckwerk_core::error::Result;
use druckwerk_core::types::{DocumentInfo, PageRange, PrintAttributes};

/// Read-only view of a submitted print job.
///
/// The handle is owned by the print host; the three observable states are
/// mutually exclusive and all false while the job is queued or running.
pub trait JobHandle: Send + Sync {
    fn is_cancelled(&self) -> bool;
    fn is_completed(&self) -> bool;
    fn is_failed(&self) -> bool;
}

/// Cancellation flag raised by the print host during layout or write.
pub trait CancellationSignal: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Terminal callbacks of the layout phase.
///
/// The adapter must invoke exactly one of these per `on_layout` call.
pub trait LayoutCallback {
    fn on_layout_finished(&mut self, info: DocumentInfo, changed: bool);
    fn on_layout_cancelled(&mut self);
    fn on_layout_failed(&mut self, message: &str);
}

/// Terminal callbacks of the write phase.
///
/// The adapter must invoke exactly one of these per `on_write` call.
pub trait WriteCallback {
    fn on_write_finished(&mut self, ranges: &[PageRange]);
    fn on_write_cancelled(&mut self);
    fn on_write_failed(&mut self, message: &str);
}

/// The two-phase document-adapter protocol the print host drives.
///
/// Both operations run on a host-chosen thread and may block on I/O. The
/// sink passed to `on_write` is only valid for the duration of that call.
pub trait DocumentAdapter: Send {
    /// Layout phase: report a document descriptor, or cancellation/failure.
    fn on_layout(
        &mut self,
        old_attributes: Option<&PrintAttributes>,
        new_attributes: &PrintAttributes,
        signal: &dyn CancellationSignal,
        callback: &mut dyn LayoutCallback,
    );

    /// Write phase: stream document bytes into the host's sink for the
    /// requested page ranges.
    fn on_write(
        &mut self,
        pages: &[PageRange],
        sink: &mut dyn Write,
        signal: &dyn CancellationSignal,
        callback: &mut dyn WriteCallback,
    );
}

/// The OS print framework, reduced to the surface Druckwerk consumes.
pub trait PrintHost: Send + Sync {
    /// Whether a print service exists on this platform.
    fn is_available(&self) -> bool;

    /// Whether the host's attribute set supports duplex. Hosts that predate
    /// duplex support cause the caller's duplex choice to be dropped.
    fn supports_duplex(&self) -> bool;

    /// Submit a job to the host.
    ///
    /// Implementations must marshal the submission onto the platform's UI
    /// dispatch context; the print manager rejects calls from other threads.
    /// Returns `Ok(None)` when the host refused the submission.
    fn submit(
        &self,
        job_name: &str,
        adapter: Box<dyn DocumentAdapter>,
        attributes: &PrintAttributes,
    ) -> Result<Option<Box<dyn JobHandle>>>;
}

/// Byte sources only the platform can open: packaged assets, content-provider
/// URIs, and mediated file opens under sandboxed storage.
pub trait ContentAccess: Send + Sync {
    /// Open a resource from the application's packaged asset tree.
    fn open_asset(&self, path: &str) -> Result<Box<dyn Read + Send>>;

    /// Open a `content://` URI through the platform's content resolver.
    fn open_content_uri(&self, uri: &str) -> Result<Box<dyn Read + Send>>;

    /// Open a `file://` URI through the platform resolver. Used as the
    /// fallback when a direct filesystem open is denied by sandboxing.
    fn open_file_uri(&self, uri: &str) -> Result<Box<dyn Read + Send>>;
}
