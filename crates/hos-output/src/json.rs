//! JSON output: the planner response as consumed by the web client.

use std::io::Write;

use serde::Serialize;

use crate::OutputResult;

/// Serializes plans (or any serializable response) to an `io::Write`, one
/// document per call, each followed by a newline.
pub struct JsonWriter<W: Write> {
    out:    W,
    pretty: bool,
}

impl<W: Write> JsonWriter<W> {
    /// Compact output.
    pub fn new(out: W) -> Self {
        Self { out, pretty: false }
    }

    /// Indented output.
    pub fn pretty(out: W) -> Self {
        Self { out, pretty: true }
    }

    /// Write one document, e.g. a `TripPlan` or a batch of them.
    pub fn write<T: Serialize + ?Sized>(&mut self, value: &T) -> OutputResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, value)?;
        } else {
            serde_json::to_writer(&mut self.out, value)?;
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
