// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Druckwerk print bridge.

use serde::{Deserialize, Serialize};

/// Standard paper sizes accepted from the caller's options record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    A6,
    Letter,
    Legal,
    Tabloid,
}

impl PaperSize {
    /// Resolve a caller-supplied paper tag, case-insensitively.
    ///
    /// Unknown tags fall back to `Letter`, matching the host platform's
    /// default media size. Missing tags are handled by the caller passing
    /// nothing and taking [`PaperSize::Letter`] directly.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "A3" => Self::A3,
            "A4" => Self::A4,
            "A5" => Self::A5,
            "A6" => Self::A6,
            "LETTER" => Self::Letter,
            "LEGAL" => Self::Legal,
            "TABLOID" => Self::Tabloid,
            _ => Self::Letter,
        }
    }

    /// Dimensions in millimetres (width, height), portrait orientation.
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A3 => (297, 420),
            Self::A4 => (210, 297),
            Self::A5 => (148, 210),
            Self::A6 => (105, 148),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Tabloid => (279, 432),
        }
    }
}

/// Page orientation carried on the media size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Color mode of the submitted job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    Color,
    Monochrome,
}

/// Duplex printing mode.
///
/// Only the modes the options record can express are modelled; short-edge
/// duplex is not reachable from the caller's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplexMode {
    None,
    LongEdge,
}

/// A paper size with its orientation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaSize {
    pub paper: PaperSize,
    pub orientation: Orientation,
}

/// Print resolution in dots per inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub id: &'static str,
    pub label: &'static str,
    pub horizontal_dpi: u32,
    pub vertical_dpi: u32,
}

impl Resolution {
    /// The fixed 300×300 dpi resolution every job is submitted with.
    pub const DEFAULT: Resolution = Resolution {
        id: "default",
        label: "Default",
        horizontal_dpi: 300,
        vertical_dpi: 300,
    };
}

/// Page margins in mils (thousandths of an inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub left_mils: u32,
    pub top_mils: u32,
    pub right_mils: u32,
    pub bottom_mils: u32,
}

impl Margins {
    /// Zero margins on all edges.
    pub const NONE: Margins = Margins {
        left_mils: 0,
        top_mils: 0,
        right_mils: 0,
        bottom_mils: 0,
    };
}

/// The attribute descriptor handed to the print host at submission.
///
/// `duplex_mode` is `None` when the host predates duplex support — the
/// caller's duplex choice is silently dropped in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintAttributes {
    pub media_size: MediaSize,
    pub color_mode: ColorMode,
    pub duplex_mode: Option<DuplexMode>,
    pub resolution: Resolution,
    pub min_margins: Margins,
}

/// The options record delivered by the invocation gateway.
///
/// Every field is optional on the wire; unrecognized fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrintRequest {
    /// Content reference: file path, base64 payload, asset, URL, or
    /// content-provider URI. Required for a print operation.
    pub content: Option<String>,
    /// Job display name shown in the host's print queue.
    pub name: String,
    /// Advisory printer selector — carried but not enforced here.
    pub printer: Option<String>,
    pub duplex: bool,
    pub landscape: bool,
    pub grayscale: bool,
    /// Number of copies; values below 1 are clamped to 1.
    pub copies: i64,
    /// Paper-size tag, case-insensitive (A3/A4/A5/A6/LETTER/LEGAL/TABLOID).
    pub paper: Option<String>,
}

impl Default for PrintRequest {
    fn default() -> Self {
        Self {
            content: None,
            name: "Print Job".into(),
            printer: None,
            duplex: false,
            landscape: false,
            grayscale: false,
            copies: 1,
            paper: None,
        }
    }
}

/// Terminal disposition of a print request, delivered to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintOutcome {
    Completed,
    Cancelled,
    Failed,
}

impl PrintOutcome {
    /// The wire string handed back through the invocation gateway.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PrintOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous range of pages requested by the print host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    /// Sentinel meaning "the entire document" — the only range this bridge
    /// ever reports finished.
    pub const ALL_PAGES: PageRange = PageRange {
        start: 0,
        end: u32::MAX,
    };
}

/// Content classification reported to the host during layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentContentType {
    Document,
    Photo,
    Unknown,
}

/// Document descriptor reported from the layout phase.
///
/// The bridge never parses the payload, so `page_count` is always `None`
/// (page count unknown).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub name: String,
    pub content_type: DocumentContentType,
    pub page_count: Option<u32>,
}

/// Result object of the `check` capability probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub avail: bool,
    /// Printer enumeration is not implemented on this platform; the list is
    /// always empty.
    pub printers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_tag_is_case_insensitive() {
        assert_eq!(PaperSize::from_tag("a4"), PaperSize::A4);
        assert_eq!(PaperSize::from_tag("A4"), PaperSize::A4);
        assert_eq!(PaperSize::from_tag("tAbLoId"), PaperSize::Tabloid);
    }

    #[test]
    fn unknown_paper_tag_falls_back_to_letter() {
        assert_eq!(PaperSize::from_tag("B5"), PaperSize::Letter);
        assert_eq!(PaperSize::from_tag(""), PaperSize::Letter);
    }

    #[test]
    fn request_defaults_match_schema() {
        let request: PrintRequest = serde_json::from_str("{}").expect("parse empty record");
        assert_eq!(request.name, "Print Job");
        assert_eq!(request.copies, 1);
        assert!(!request.duplex);
        assert!(!request.landscape);
        assert!(!request.grayscale);
        assert!(request.content.is_none());
        assert!(request.paper.is_none());
    }

    #[test]
    fn unrecognized_fields_are_ignored() {
        let request: PrintRequest =
            serde_json::from_str(r#"{"content":"a.pdf","bogus":42,"margin":true}"#)
                .expect("parse record with extras");
        assert_eq!(request.content.as_deref(), Some("a.pdf"));
    }

    #[test]
    fn outcome_wire_strings() {
        assert_eq!(PrintOutcome::Completed.as_str(), "completed");
        assert_eq!(PrintOutcome::Cancelled.as_str(), "cancelled");
        assert_eq!(PrintOutcome::Failed.as_str(), "failed");
    }
}
