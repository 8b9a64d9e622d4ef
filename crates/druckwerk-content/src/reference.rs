// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content-reference grammar.
//
// A reference string is classified into exactly one variant; classification
// precedence is first-match-wins in the order the variants are checked below.
// The asset sub-scheme must be tested before the generic file:// prefix.

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";
const BASE64_PREFIX: &str = "base64:";
const ASSET_PREFIX: &str = "file:///android_asset/";
const FILE_PREFIX: &str = "file://";
const CONTENT_PREFIX: &str = "content://";

/// A classified content reference.
///
/// Each variant carries the portion of the original string the resolver
/// needs: stripped paths for file-like variants, the full string where the
/// payload still has to be parsed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentReference {
    /// `data:<mime>;base64,<payload>` — the full URI, decoded lazily.
    DataUri(String),
    /// `base64:` payload with an optional `data:`-style prelude before a `,`.
    PrefixedBase64(String),
    /// Path into the application's packaged asset tree.
    AssetUrl(String),
    /// Filesystem path stripped of its `file://` prefix.
    FileUrl(String),
    /// Full `content://` URI, resolved by the platform.
    ContentProviderUrl(String),
    /// Full `http://` or `https://` URL.
    HttpUrl(String),
    /// Bare filesystem path ending in `.pdf`.
    PdfPath(String),
    /// No variant matched.
    Unsupported,
}

impl ContentReference {
    /// Classify a caller-supplied reference string.
    pub fn classify(reference: &str) -> Self {
        if reference.starts_with(DATA_PREFIX) && reference.contains(BASE64_MARKER) {
            Self::DataUri(reference.to_string())
        } else if let Some(payload) = reference.strip_prefix(BASE64_PREFIX) {
            Self::PrefixedBase64(payload.to_string())
        } else if let Some(asset) = reference.strip_prefix(ASSET_PREFIX) {
            Self::AssetUrl(asset.to_string())
        } else if let Some(path) = reference.strip_prefix(FILE_PREFIX) {
            Self::FileUrl(path.to_string())
        } else if reference.starts_with(CONTENT_PREFIX) {
            Self::ContentProviderUrl(reference.to_string())
        } else if reference.starts_with("http://") || reference.starts_with("https://") {
            Self::HttpUrl(reference.to_string())
        } else if reference.ends_with(".pdf") {
            Self::PdfPath(reference.to_string())
        } else {
            Self::Unsupported
        }
    }
}
