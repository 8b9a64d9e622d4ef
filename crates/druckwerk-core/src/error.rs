// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Druckwerk.
//
// Several variants carry the exact message delivered to the print host's
// write-failure callback, so their Display strings are part of the bridge
// contract and must not be reworded casually.

use thiserror::Error;

/// Top-level error type for all Druckwerk operations.
#[derive(Debug, Error)]
pub enum DruckwerkError {
    // -- Request / options errors --
    #[error("invalid print options: {0}")]
    InvalidOptions(String),

    #[error("No content to print")]
    NoContent,

    #[error("unknown action: {0}")]
    UnknownAction(String),

    // -- Content reference errors --
    #[error("Unsupported content type")]
    UnsupportedContent,

    #[error("Invalid base64 data URI")]
    InvalidDataUri,

    #[error("invalid content reference: {0}")]
    InvalidReference(String),

    #[error("content not found: {0}")]
    NotFound(String),

    #[error("transport error: {0}")]
    Transport(String),

    // -- I/O and serialization --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DruckwerkError>;
