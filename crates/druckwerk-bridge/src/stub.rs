// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native print APIs are unavailable.
//
// The stub host reports printing as unavailable and refuses submissions;
// the stub content access refuses every platform-mediated open.

use std::io::Read;

use druckwerk_core::error::{DruckwerkError, Result};
use druckwerk_core::types::PrintAttributes;

use crate::traits::{ContentAccess, DocumentAdapter, JobHandle, PrintHost};

/// No-op print host returned on non-mobile platforms.
pub struct StubHost;

impl PrintHost for StubHost {
    fn is_available(&self) -> bool {
        false
    }

    fn supports_duplex(&self) -> bool {
        false
    }

    fn submit(
        &self,
        _job_name: &str,
        _adapter: Box<dyn DocumentAdapter>,
        _attributes: &PrintAttributes,
    ) -> Result<Option<Box<dyn JobHandle>>> {
        tracing::warn!("PrintHost::submit called on stub host");
        Err(DruckwerkError::PlatformUnavailable)
    }
}

/// No-op content access returned on non-mobile platforms.
pub struct StubContent;

impl ContentAccess for StubContent {
    fn open_asset(&self, _path: &str) -> Result<Box<dyn Read + Send>> {
        tracing::warn!("ContentAccess::open_asset called on stub bridge");
        Err(DruckwerkError::PlatformUnavailable)
    }

    fn open_content_uri(&self, _uri: &str) -> Result<Box<dyn Read + Send>> {
        tracing::warn!("ContentAccess::open_content_uri called on stub bridge");
        Err(DruckwerkError::PlatformUnavailable)
    }

    fn open_file_uri(&self, _uri: &str) -> Result<Box<dyn Read + Send>> {
        Err(DruckwerkError::PlatformUnavailable)
    }
}
