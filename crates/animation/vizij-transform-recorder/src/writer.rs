//! Asset writer seam: where finished clips leave the recorder.
//!
//! File placement and the target engine's asset format live with the host; the
//! writers here cover in-memory capture and a stable JSON schema.

use std::io::Write;

use crate::encode::RecordedClip;
use crate::error::WriteError;

/// Persists a finished clip in whatever format the host animation system needs.
pub trait ClipWriter {
    type Error;

    fn write_clip(&mut self, clip: &RecordedClip) -> Result<(), Self::Error>;
}

/// Keeps every written clip in memory.
#[derive(Default, Debug)]
pub struct MemoryClipWriter {
    pub clips: Vec<RecordedClip>,
}

impl MemoryClipWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipWriter for MemoryClipWriter {
    type Error = std::convert::Infallible;

    fn write_clip(&mut self, clip: &RecordedClip) -> Result<(), Self::Error> {
        self.clips.push(clip.clone());
        Ok(())
    }
}

/// Writes each clip as pretty-printed JSON followed by a newline.
#[derive(Debug)]
pub struct JsonClipWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonClipWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipWriter for JsonClipWriter<W> {
    type Error = WriteError;

    fn write_clip(&mut self, clip: &RecordedClip) -> Result<(), WriteError> {
        serde_json::to_writer_pretty(&mut self.out, clip)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Export a clip as serde_json::Value (stable schema for FFI/serialization).
pub fn export_clip_json(clip: &RecordedClip) -> serde_json::Value {
    serde_json::to_value(clip).unwrap_or(serde_json::Value::Null)
}
