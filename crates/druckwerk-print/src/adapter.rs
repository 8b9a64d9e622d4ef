// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Streaming document adapter.
//
// The print host drives this through the two-phase layout/write protocol.
// Layout never inspects the payload (page count stays unknown); write
// classifies the content reference once and pumps the resolved byte source
// into the host's sink. Every error is converted to `on_write_failed` at
// this boundary — nothing propagates past the host.

use std::io::{ErrorKind, Read, Write};

use tracing::{debug, error};

use druckwerk_bridge::traits::{
    CancellationSignal, DocumentAdapter, LayoutCallback, WriteCallback,
};
use druckwerk_content::{resolver, ContentReference, ContentResolver};
use druckwerk_core::error::{DruckwerkError, Result};
use druckwerk_core::types::{DocumentContentType, DocumentInfo, PageRange, PrintAttributes};

/// Document adapter streaming a resolved content reference into the host.
pub struct StreamAdapter {
    job_name: String,
    /// Raw content reference from the options record, if any.
    content: Option<String>,
    resolver: ContentResolver,
    /// Transfer buffer size for the streamed path.
    buffer_len: usize,
}

impl StreamAdapter {
    pub fn new(
        job_name: String,
        content: Option<String>,
        resolver: ContentResolver,
        buffer_len: usize,
    ) -> Self {
        Self {
            job_name,
            content,
            resolver,
            buffer_len,
        }
    }

    /// Resolve and copy the document bytes into the sink.
    ///
    /// Data URIs take the decoded-bytes path (the payload is already in
    /// memory after decoding); every other variant streams through a
    /// fixed-size buffer until EOF. Both paths flush before returning.
    fn write_document(&self, reference: &ContentReference, sink: &mut dyn Write) -> Result<()> {
        if let ContentReference::DataUri(raw) = reference {
            let bytes = resolver::decode_data_uri(raw)?;
            sink.write_all(&bytes)?;
            sink.flush()?;
            debug!(len = bytes.len(), "wrote decoded data URI to sink");
            return Ok(());
        }

        let mut source = self.resolver.open(reference)?;
        let mut buffer = vec![0u8; self.buffer_len];
        let mut total = 0usize;
        loop {
            let read = match source.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(DruckwerkError::Io(e)),
            };
            sink.write_all(&buffer[..read])?;
            total += read;
        }
        sink.flush()?;
        debug!(total, "streamed document to sink");
        Ok(())
    }
}

impl DocumentAdapter for StreamAdapter {
    fn on_layout(
        &mut self,
        _old_attributes: Option<&PrintAttributes>,
        _new_attributes: &PrintAttributes,
        signal: &dyn CancellationSignal,
        callback: &mut dyn LayoutCallback,
    ) {
        if signal.is_cancelled() {
            debug!("layout cancelled by host signal");
            callback.on_layout_cancelled();
            return;
        }

        let info = DocumentInfo {
            name: self.job_name.clone(),
            content_type: DocumentContentType::Document,
            // The payload is never parsed here, so the page count stays
            // unknown and the host re-requests content on every layout.
            page_count: None,
        };
        callback.on_layout_finished(info, true);
    }

    fn on_write(
        &mut self,
        _pages: &[PageRange],
        sink: &mut dyn Write,
        signal: &dyn CancellationSignal,
        callback: &mut dyn WriteCallback,
    ) {
        if signal.is_cancelled() {
            debug!("write cancelled by host signal");
            callback.on_write_cancelled();
            return;
        }

        let Some(content) = self.content.as_deref() else {
            error!("write phase reached with no content reference");
            callback.on_write_failed(&DruckwerkError::NoContent.to_string());
            return;
        };

        // Requested page ranges are ignored: the whole document is always
        // emitted and ALL_PAGES reported finished.
        let reference = ContentReference::classify(content);
        match self.write_document(&reference, sink) {
            Ok(()) => callback.on_write_finished(&[PageRange::ALL_PAGES]),
            Err(e) => {
                error!(error = %e, "document write failed");
                callback.on_write_failed(&e.to_string());
            }
        }
    }
}
