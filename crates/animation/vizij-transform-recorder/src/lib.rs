//! Vizij Transform Recorder (engine-agnostic)
//!
//! Samples the position, rotation and scale of a single node at a fixed interval
//! while a host loop ticks, then bakes the samples into per-axis keyframe curves.
//!
//! - [`RecordingSession`] owns the recording state and is driven by `tick`.
//! - [`encode()`] turns a recorded [`SampleSequence`] into linear-time curves.
//! - [`ClipWriter`] is the seam for persisting the finished [`RecordedClip`].

pub mod config;
pub mod encode;
pub mod error;
pub mod sample;
pub mod session;
pub mod source;
pub mod wrap;
pub mod writer;

// Re-exports for consumers (adapters)
pub use config::{ChannelProperties, RecorderConfig, MAX_PREALLOC};
pub use encode::{encode, encode_channels, encode_values, AxisCurves, Curve, CurveKey, RecordedClip};
pub use error::{RecorderError, WriteError};
pub use sample::{Sample, SampleKind, SampleSequence, Vec3};
pub use session::RecordingSession;
pub use source::{TransformSnapshot, TransformSource};
pub use wrap::{wrap_min_diff, wrap_pi};
pub use writer::{export_clip_json, ClipWriter, JsonClipWriter, MemoryClipWriter};
