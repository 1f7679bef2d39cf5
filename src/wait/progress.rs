//! Progress markers
//!
//! Dots written while a wait is in progress. The closing newline is
//! written from `Drop`, so it appears once on every exit path, including
//! early returns, panics, and a dropped future.

use std::io::Write;

/// Writes `.` markers and a single closing newline
pub(crate) struct ProgressMarks<'a, W: Write> {
    sink: &'a mut W,
    emitted: u32,
}

impl<'a, W: Write> ProgressMarks<'a, W> {
    pub(crate) fn new(sink: &'a mut W) -> Self {
        Self { sink, emitted: 0 }
    }

    /// Write one marker.
    ///
    /// Progress output is best effort; a failing sink does not fail the wait.
    pub(crate) fn mark(&mut self) {
        let _ = self.sink.write_all(b".");
        let _ = self.sink.flush();
        self.emitted += 1;
    }

    pub(crate) fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl<W: Write> Drop for ProgressMarks<'_, W> {
    fn drop(&mut self) {
        if self.emitted > 0 {
            let _ = self.sink.write_all(b"\n");
            let _ = self.sink.flush();
        }
    }
}
