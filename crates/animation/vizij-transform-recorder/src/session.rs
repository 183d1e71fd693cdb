//! Recording session: threshold-based sampling of a transform driven by host ticks.

use log::{debug, info, trace};

use crate::config::RecorderConfig;
use crate::encode::{encode_channels, RecordedClip};
use crate::error::RecorderError;
use crate::sample::{SampleKind, SampleSequence, Vec3};
use crate::source::TransformSource;
use crate::wrap::{wrap_min_diff, wrap_pi};

/// Owned recording state for a single node.
///
/// Created when recording starts, fed once per host frame through [`tick`](Self::tick),
/// and consumed by [`finish`](Self::finish). Sub-interval time left in the
/// accumulator when recording stops is discarded.
#[derive(Clone, Debug)]
pub struct RecordingSession {
    cfg: RecorderConfig,
    position: SampleSequence,
    rotation: SampleSequence,
    scale: SampleSequence,
    /// Seconds accumulated since the last capture (minus one interval per capture).
    accumulated: f32,
    paused: bool,
}

impl RecordingSession {
    /// Start a session. Fails with [`RecorderError::InvalidConfiguration`] when the
    /// interval is not a finite number greater than zero.
    pub fn new(cfg: RecorderConfig) -> Result<Self, RecorderError> {
        cfg.validate()?;
        debug!(
            "recording '{}' started: interval={}s record_scale={}",
            cfg.clip_name, cfg.interval, cfg.record_scale
        );
        let cap = cfg.preallocation();
        let scale_cap = if cfg.record_scale { cap } else { 0 };
        Ok(Self {
            position: SampleSequence::with_capacity(SampleKind::Position, cap),
            rotation: SampleSequence::with_capacity(SampleKind::Rotation, cap),
            scale: SampleSequence::with_capacity(SampleKind::Scale, scale_cap),
            accumulated: 0.0,
            paused: false,
            cfg,
        })
    }

    /// Advance the session by `elapsed` seconds. Captures at most one sample, when the
    /// accumulated time reaches the interval, and returns whether it did.
    ///
    /// Inputs are not validated; non-finite values are recorded as given. The
    /// accumulator is `f32`, so a cadence that sums to a whole number of intervals
    /// only lands exactly on each threshold when the deltas are representable
    /// (e.g. 0.125); decimal deltas such as 0.02 can fall one sample short.
    pub fn tick(
        &mut self,
        elapsed: f32,
        position: Vec3,
        rotation_degrees: Vec3,
        scale: Vec3,
    ) -> bool {
        if self.paused {
            return false;
        }
        self.accumulated += elapsed;
        if self.accumulated < self.cfg.interval {
            return false;
        }
        self.accumulated -= self.cfg.interval;
        self.capture(position, rotation_degrees, scale);
        true
    }

    /// [`tick`](Self::tick) reading the current transform from `source`.
    pub fn tick_source<S: TransformSource + ?Sized>(&mut self, elapsed: f32, source: &S) -> bool {
        if self.paused {
            return false;
        }
        self.tick(
            elapsed,
            source.position(),
            source.rotation_degrees(),
            source.scale(),
        )
    }

    fn capture(&mut self, position: Vec3, rotation_degrees: Vec3, scale: Vec3) {
        let [rx, ry, rz] = rotation_degrees;
        // Y is unwrapped against the previous capture so yaw tracks stay continuous;
        // X and Z are wrapped independently per sample.
        let y = match self.rotation.last() {
            Some(prev) => wrap_min_diff(prev[1], ry),
            None => wrap_pi(ry),
        };
        self.position.push(position);
        self.rotation.push([wrap_pi(rx), y, wrap_pi(rz)]);
        if self.cfg.record_scale {
            self.scale.push(scale);
        }
        trace!(
            "recording '{}': captured key {}",
            self.cfg.clip_name,
            self.position.len() - 1
        );
    }

    /// Stop capturing without discarding accumulated time.
    pub fn pause(&mut self) {
        if !self.paused {
            debug!("recording '{}' paused", self.cfg.clip_name);
        }
        self.paused = true;
    }

    /// Continue capturing from the accumulator value left at pause time.
    pub fn resume(&mut self) {
        if self.paused {
            debug!("recording '{}' resumed", self.cfg.clip_name);
        }
        self.paused = false;
    }

    /// False while paused.
    #[inline]
    pub fn is_recording(&self) -> bool {
        !self.paused
    }

    /// Number of keyframes captured so far.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.position.len()
    }

    /// Recorded length in seconds (`sample_count * interval`).
    pub fn duration(&self) -> f32 {
        self.sample_count() as f32 * self.cfg.interval
    }

    /// Seconds between captured keyframes.
    #[inline]
    pub fn interval(&self) -> f32 {
        self.cfg.interval
    }

    /// Whether scale samples are captured.
    #[inline]
    pub fn records_scale(&self) -> bool {
        self.cfg.record_scale
    }

    /// Seconds carried toward the next capture.
    #[inline]
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Configuration the session was started with.
    pub fn config(&self) -> &RecorderConfig {
        &self.cfg
    }

    /// Captured positions, verbatim.
    pub fn position(&self) -> &SampleSequence {
        &self.position
    }

    /// Captured rotations in degrees, after wrapping.
    pub fn rotation(&self) -> &SampleSequence {
        &self.rotation
    }

    /// Captured scales; empty unless scale recording is enabled.
    pub fn scale(&self) -> &SampleSequence {
        &self.scale
    }

    /// Consume the session and bake every recorded sequence into named curves.
    pub fn finish(self) -> RecordedClip {
        let interval = self.cfg.interval;
        let props = &self.cfg.properties;
        let mut curves = Vec::with_capacity(9);
        curves.extend(encode_channels(&props.position, &self.position, interval));
        curves.extend(encode_channels(&props.rotation, &self.rotation, interval));
        if self.cfg.record_scale {
            curves.extend(encode_channels(&props.scale, &self.scale, interval));
        }

        let key_count = self.sample_count();
        let duration = self.duration();
        info!(
            "recording '{}' finished: {} keyframes, {}s",
            self.cfg.clip_name, key_count, duration
        );
        RecordedClip {
            name: self.cfg.clip_name,
            interval,
            key_count,
            duration,
            curves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_keeps_remainder() {
        let mut s = RecordingSession::new(RecorderConfig::default()).expect("session");
        assert!(!s.tick(0.25, [0.0; 3], [0.0; 3], [1.0; 3]));
        assert!(s.tick(0.5, [0.0; 3], [0.0; 3], [1.0; 3]));
        assert_eq!(s.accumulated(), 0.25);
        assert_eq!(s.sample_count(), 1);
    }

    #[test]
    fn one_capture_per_tick_even_for_long_frames() {
        let mut s = RecordingSession::new(RecorderConfig::default()).expect("session");
        assert!(s.tick(2.0, [0.0; 3], [0.0; 3], [1.0; 3]));
        assert_eq!(s.sample_count(), 1);
        assert_eq!(s.accumulated(), 1.5);
        // Leftover time drains one interval per tick.
        assert!(s.tick(0.0, [0.0; 3], [0.0; 3], [1.0; 3]));
        assert_eq!(s.accumulated(), 1.0);
    }
}
