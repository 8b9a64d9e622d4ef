// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Druckwerk Content — classification of caller-supplied content references
// and resolution of each reference into a readable byte source.

pub mod reference;
pub mod resolver;

pub use reference::ContentReference;
pub use resolver::ContentResolver;
