// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Byte-source resolution for classified content references.
//
// Every resolvable variant opens into a readable-once byte stream. Streams
// are plain `Read` implementors; dropping one releases the underlying
// descriptor, so callers get close-on-every-exit for free.

use std::fs::File;
use std::io::{Cursor, Read};
use std::sync::Arc;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use tracing::{debug, warn};

use druckwerk_bridge::traits::ContentAccess;
use druckwerk_core::error::{DruckwerkError, Result};

use crate::reference::ContentReference;

/// Standard-alphabet engine that tolerates missing padding, matching the
/// lenient decoder callers are used to on the host platform.
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Opens a classified content reference into a byte source.
#[derive(Clone)]
pub struct ContentResolver {
    /// Platform-mediated opens: assets, content-provider URIs, and the
    /// sandboxed-storage fallback.
    content: Arc<dyn ContentAccess>,
}

impl ContentResolver {
    pub fn new(content: Arc<dyn ContentAccess>) -> Self {
        Self { content }
    }

    /// Open a readable-once byte source for the given reference.
    ///
    /// The returned stream must be read to EOF or dropped; either releases
    /// the underlying resource.
    pub fn open(&self, reference: &ContentReference) -> Result<Box<dyn Read + Send>> {
        match reference {
            ContentReference::DataUri(raw) => {
                let bytes = decode_data_uri(raw)?;
                debug!(len = bytes.len(), "decoded data URI payload");
                Ok(Box::new(Cursor::new(bytes)))
            }
            ContentReference::PrefixedBase64(payload) => {
                let bytes = decode_prefixed_base64(payload)?;
                debug!(len = bytes.len(), "decoded base64: payload");
                Ok(Box::new(Cursor::new(bytes)))
            }
            ContentReference::AssetUrl(path) => {
                debug!(%path, "opening packaged asset");
                self.content.open_asset(path)
            }
            ContentReference::FileUrl(path) | ContentReference::PdfPath(path) => {
                self.open_path_with_fallback(path)
            }
            ContentReference::ContentProviderUrl(uri) => {
                debug!(%uri, "opening content-provider URI");
                self.content.open_content_uri(uri)
            }
            ContentReference::HttpUrl(url) => {
                debug!(%url, "fetching remote content");
                let response = ureq::get(url)
                    .call()
                    .map_err(|e| DruckwerkError::Transport(e.to_string()))?;
                Ok(Box::new(response.into_reader()))
            }
            ContentReference::Unsupported => Err(DruckwerkError::UnsupportedContent),
        }
    }

    /// Direct filesystem open, retried through the platform resolver with a
    /// synthesized `file://` URI. Sandboxed-storage regimes deny the direct
    /// open but allow the mediated one.
    fn open_path_with_fallback(&self, path: &str) -> Result<Box<dyn Read + Send>> {
        match File::open(path) {
            Ok(file) => {
                debug!(path, "opened file directly");
                Ok(Box::new(file))
            }
            Err(direct) => {
                let uri = format!("file://{path}");
                match self.content.open_file_uri(&uri) {
                    Ok(stream) => {
                        debug!(path, "opened file via platform resolver fallback");
                        Ok(stream)
                    }
                    Err(fallback) => {
                        warn!(path, %direct, %fallback, "both direct and mediated open failed");
                        Err(DruckwerkError::NotFound(format!("{path}: {direct}")))
                    }
                }
            }
        }
    }
}

/// Decode the payload of a `data:<mime>;base64,<payload>` URI.
///
/// The payload is everything after the first `,`; a URI without one is
/// malformed.
pub fn decode_data_uri(raw: &str) -> Result<Vec<u8>> {
    let comma = raw.find(',').ok_or(DruckwerkError::InvalidDataUri)?;
    decode_lenient(&raw[comma + 1..])
}

/// Decode a `base64:`-prefixed payload (prefix already stripped).
///
/// Callers may embed a `data:`-style prelude; everything up to and including
/// the first `,` is discarded before decoding.
pub fn decode_prefixed_base64(payload: &str) -> Result<Vec<u8>> {
    let payload = match payload.find(',') {
        Some(comma) => &payload[comma + 1..],
        None => payload,
    };
    decode_lenient(payload)
}

/// Lenient decode: whitespace is skipped, padding is optional. Malformed
/// input surfaces as an invalid-reference error.
fn decode_lenient(payload: &str) -> Result<Vec<u8>> {
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    BASE64_LENIENT
        .decode(compact.as_bytes())
        .map_err(|e| DruckwerkError::InvalidReference(format!("base64 decode: {e}")))
}
