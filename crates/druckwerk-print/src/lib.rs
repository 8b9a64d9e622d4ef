// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Druckwerk Print — the print request processor. Normalizes the caller's
// options record, streams the resolved content through the host's
// document-adapter protocol, and tracks the submitted job to a terminal
// outcome. The invocation gateway in `gateway` is the entry surface the
// JavaScript shim talks to.

pub mod adapter;
pub mod gateway;
pub mod monitor;
pub mod options;
pub mod processor;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::StreamAdapter;
pub use monitor::JobMonitor;
pub use options::{normalize, NormalizedRequest};
pub use processor::{PrintProcessor, SUPPORTED_CONTENT_TYPES};
