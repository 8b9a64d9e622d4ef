// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Druckwerk — Native platform bridge abstractions.
//
// This crate defines the traits through which the print pipeline talks to
// the operating system: the print host (job submission and the two-phase
// document-adapter protocol) and platform content access (assets,
// content-provider URIs, mediated file opens).
//
// Native iOS/Android backends implement these traits over their respective
// SDKs and hand the implementations to the processor; desktop and CI builds
// get the stub, which reports printing as unavailable.

pub mod stub;
pub mod traits;

use std::sync::Arc;

/// Print host for the current platform.
///
/// Desktop/CI builds receive the stub host. Mobile backends construct their
/// own [`traits::PrintHost`] and inject it into the processor directly, so
/// this function is the fallback, not the only wiring point.
pub fn platform_host() -> Arc<dyn traits::PrintHost> {
    Arc::new(stub::StubHost)
}

/// Platform content access for the current platform.
pub fn platform_content() -> Arc<dyn traits::ContentAccess> {
    Arc::new(stub::StubContent)
}
