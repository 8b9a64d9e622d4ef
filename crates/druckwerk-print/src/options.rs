// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Options normalizer: turns the caller's options record into a concrete
// attribute descriptor plus the job metadata the processor needs.
//
// Normalization never fails. Out-of-range values are clamped, unknown paper
// tags fall back to Letter, and an unsupported duplex request is dropped.

use druckwerk_core::types::{
    ColorMode, DuplexMode, Margins, MediaSize, Orientation, PaperSize, PrintAttributes,
    PrintRequest, Resolution,
};

/// A validated, defaulted view of one print invocation.
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    pub job_name: String,
    /// Always ≥ 1. Advisory — the host's print dialog owns the final count.
    pub copies: u32,
    /// The raw content reference; classified later, in the write phase.
    pub content: Option<String>,
    /// Advisory printer selector, not enforced by this bridge.
    pub printer: Option<String>,
    pub attributes: PrintAttributes,
}

/// Normalize an options record.
///
/// `supports_duplex` reflects the host's attribute-set version; when false
/// the duplex decision is silently dropped (`duplex_mode` stays `None`).
pub fn normalize(request: &PrintRequest, supports_duplex: bool) -> NormalizedRequest {
    let paper = request
        .paper
        .as_deref()
        .map(PaperSize::from_tag)
        .unwrap_or(PaperSize::Letter);

    let orientation = if request.landscape {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    };

    let color_mode = if request.grayscale {
        ColorMode::Monochrome
    } else {
        ColorMode::Color
    };

    let duplex_mode = if supports_duplex {
        Some(if request.duplex {
            DuplexMode::LongEdge
        } else {
            DuplexMode::None
        })
    } else {
        None
    };

    NormalizedRequest {
        job_name: request.name.clone(),
        copies: u32::try_from(request.copies.max(1)).unwrap_or(u32::MAX),
        content: request.content.clone(),
        printer: request.printer.clone(),
        attributes: PrintAttributes {
            media_size: MediaSize {
                paper,
                orientation,
            },
            color_mode,
            duplex_mode,
            resolution: Resolution::DEFAULT,
            min_margins: Margins::NONE,
        },
    }
}
