// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared test doubles: a scripted print host that drives the adapter
// protocol in-process, recording callbacks, and countdown job handles.

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use druckwerk_bridge::traits::{
    CancellationSignal, DocumentAdapter, JobHandle, LayoutCallback, PrintHost, WriteCallback,
};
use druckwerk_core::error::Result;
use druckwerk_core::types::{DocumentInfo, PageRange, PrintAttributes};

/// Observable job states a scripted handle can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Running,
    Completed,
    Cancelled,
    Failed,
}

/// Fixed cancellation signal.
pub struct ScriptedSignal {
    cancelled: bool,
}

impl ScriptedSignal {
    pub fn live() -> Self {
        Self { cancelled: false }
    }

    pub fn cancelled() -> Self {
        Self { cancelled: true }
    }
}

impl CancellationSignal for ScriptedSignal {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Layout callback recording which terminal was invoked and how often.
#[derive(Default)]
pub struct RecordingLayout {
    pub finished: Option<(DocumentInfo, bool)>,
    pub cancelled: bool,
    pub failed: Option<String>,
    pub calls: usize,
}

impl LayoutCallback for RecordingLayout {
    fn on_layout_finished(&mut self, info: DocumentInfo, changed: bool) {
        self.calls += 1;
        self.finished = Some((info, changed));
    }

    fn on_layout_cancelled(&mut self) {
        self.calls += 1;
        self.cancelled = true;
    }

    fn on_layout_failed(&mut self, message: &str) {
        self.calls += 1;
        self.failed = Some(message.to_string());
    }
}

/// Write callback recording which terminal was invoked and how often.
#[derive(Default)]
pub struct RecordingWrite {
    pub finished: Option<Vec<PageRange>>,
    pub cancelled: bool,
    pub failed: Option<String>,
    pub calls: usize,
}

impl WriteCallback for RecordingWrite {
    fn on_write_finished(&mut self, ranges: &[PageRange]) {
        self.calls += 1;
        self.finished = Some(ranges.to_vec());
    }

    fn on_write_cancelled(&mut self) {
        self.calls += 1;
        self.cancelled = true;
    }

    fn on_write_failed(&mut self, message: &str) {
        self.calls += 1;
        self.failed = Some(message.to_string());
    }
}

/// Job handle that stays non-terminal for a fixed number of polls, then
/// reports the scripted terminal state. `terminal == None` never resolves.
pub struct CountdownHandle {
    remaining: AtomicU32,
    terminal: Option<JobState>,
}

impl CountdownHandle {
    pub fn terminal_after(polls: u32, terminal: JobState) -> Self {
        Self {
            remaining: AtomicU32::new(polls),
            terminal: Some(terminal),
        }
    }

    pub fn never_terminal() -> Self {
        Self {
            remaining: AtomicU32::new(0),
            terminal: None,
        }
    }

    fn is_terminal(&self) -> bool {
        self.terminal.is_some() && self.remaining.load(Ordering::SeqCst) == 0
    }
}

impl JobHandle for CountdownHandle {
    // The monitor checks cancelled first each poll, so the countdown ticks
    // here exactly once per cycle.
    fn is_cancelled(&self) -> bool {
        let left = self.remaining.load(Ordering::SeqCst);
        if left > 0 {
            self.remaining.store(left - 1, Ordering::SeqCst);
            return false;
        }
        self.terminal == Some(JobState::Cancelled)
    }

    fn is_completed(&self) -> bool {
        self.is_terminal() && self.terminal == Some(JobState::Completed)
    }

    fn is_failed(&self) -> bool {
        self.is_terminal() && self.terminal == Some(JobState::Failed)
    }
}

/// Handle backed by shared mutable state, for host-driven scenarios.
pub struct ScriptedHandle {
    state: Arc<Mutex<JobState>>,
}

impl JobHandle for ScriptedHandle {
    fn is_cancelled(&self) -> bool {
        *self.state.lock().expect("lock") == JobState::Cancelled
    }

    fn is_completed(&self) -> bool {
        *self.state.lock().expect("lock") == JobState::Completed
    }

    fn is_failed(&self) -> bool {
        *self.state.lock().expect("lock") == JobState::Failed
    }
}

/// In-process print host that drives the full adapter protocol on submit:
/// one layout pass, then one write pass into a captured sink. The job
/// handle's terminal state mirrors the write result unless forced.
pub struct MockHost {
    state: Arc<Mutex<JobState>>,
    forced_terminal: Option<JobState>,
    reject: bool,
    cancel_write: bool,
    submissions: AtomicUsize,
    captured: Mutex<Vec<u8>>,
    job_name: Mutex<Option<String>>,
    attributes: Mutex<Option<PrintAttributes>>,
    write_error: Mutex<Option<String>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(JobState::Running)),
            forced_terminal: None,
            reject: false,
            cancel_write: false,
            submissions: AtomicUsize::new(0),
            captured: Mutex::new(Vec::new()),
            job_name: Mutex::new(None),
            attributes: Mutex::new(None),
            write_error: Mutex::new(None),
        }
    }

    /// Refuse every submission (host returns no handle).
    pub fn reject_submission(mut self) -> Self {
        self.reject = true;
        self
    }

    /// Raise the cancellation signal before the write phase.
    pub fn cancel_before_write(mut self) -> Self {
        self.cancel_write = true;
        self
    }

    /// Force the job handle to this terminal state regardless of the
    /// write result.
    pub fn force_terminal(mut self, state: JobState) -> Self {
        self.forced_terminal = Some(state);
        self
    }

    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    pub fn captured_bytes(&self) -> Vec<u8> {
        self.captured.lock().expect("lock").clone()
    }

    pub fn submitted_job_name(&self) -> Option<String> {
        self.job_name.lock().expect("lock").clone()
    }

    pub fn submitted_attributes(&self) -> Option<PrintAttributes> {
        self.attributes.lock().expect("lock").clone()
    }

    pub fn last_write_error(&self) -> Option<String> {
        self.write_error.lock().expect("lock").clone()
    }
}

impl PrintHost for MockHost {
    fn is_available(&self) -> bool {
        true
    }

    fn supports_duplex(&self) -> bool {
        true
    }

    fn submit(
        &self,
        job_name: &str,
        mut adapter: Box<dyn DocumentAdapter>,
        attributes: &PrintAttributes,
    ) -> Result<Option<Box<dyn JobHandle>>> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        *self.job_name.lock().expect("lock") = Some(job_name.to_string());
        *self.attributes.lock().expect("lock") = Some(attributes.clone());

        if self.reject {
            return Ok(None);
        }

        let mut layout = RecordingLayout::default();
        adapter.on_layout(None, attributes, &ScriptedSignal::live(), &mut layout);

        let write_signal = if self.cancel_write {
            ScriptedSignal::cancelled()
        } else {
            ScriptedSignal::live()
        };
        let mut sink = Vec::new();
        let mut write = RecordingWrite::default();
        adapter.on_write(&[PageRange::ALL_PAGES], &mut sink, &write_signal, &mut write);

        *self.captured.lock().expect("lock") = sink;
        *self.write_error.lock().expect("lock") = write.failed.clone();

        let terminal = self.forced_terminal.unwrap_or(if write.cancelled {
            JobState::Cancelled
        } else if write.failed.is_some() {
            JobState::Failed
        } else {
            JobState::Completed
        });
        *self.state.lock().expect("lock") = terminal;

        Ok(Some(Box::new(ScriptedHandle {
            state: Arc::clone(&self.state),
        })))
    }
}
