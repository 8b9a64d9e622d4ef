// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Invocation gateway: the action surface the JavaScript shim calls into.
//
// Three named actions, matched case-insensitively: `check`, `types`, and
// `print`. Caller-side errors (unknown action, malformed options record)
// are returned as structured errors without invoking the print pipeline;
// pipeline problems are absorbed into the `"failed"` outcome instead.

use serde_json::Value;
use tracing::{debug, instrument};
use uuid::Uuid;

use druckwerk_core::error::{DruckwerkError, Result};
use druckwerk_core::types::PrintRequest;

use crate::processor::{PrintProcessor, SUPPORTED_CONTENT_TYPES};

/// Execute one gateway action and produce its result object.
///
/// `args` is the optional single-object argument of the invocation; `check`
/// accepts and ignores it, `types` takes none, `print` parses it as the
/// options record (absent means all defaults, which then fails on the
/// missing content reference).
#[instrument(skip(processor, args), fields(request_id = %Uuid::new_v4()))]
pub async fn execute(
    processor: &PrintProcessor,
    action: &str,
    args: Option<&Value>,
) -> Result<Value> {
    match action.to_ascii_lowercase().as_str() {
        "check" => {
            let result = processor.check().await;
            debug!(avail = result.avail, "capability check served");
            Ok(serde_json::to_value(result)?)
        }
        "types" => Ok(serde_json::json!(SUPPORTED_CONTENT_TYPES)),
        "print" => {
            let request: PrintRequest = match args {
                Some(value) => serde_json::from_value(value.clone())
                    .map_err(|e| DruckwerkError::InvalidOptions(e.to_string()))?,
                None => PrintRequest::default(),
            };
            let outcome = processor.print(request).await;
            Ok(Value::String(outcome.as_str().to_string()))
        }
        _ => Err(DruckwerkError::UnknownAction(action.to_string())),
    }
}
