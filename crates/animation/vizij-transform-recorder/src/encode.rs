//! Curve encoding: turn recorded sample sequences into per-axis keyframe curves.
//!
//! Model:
//! - Every sample becomes exactly one key; no smoothing or key reduction.
//! - Key `i` sits at `i * interval` seconds, so keys are evenly spaced.
//! - Interpolation between keys is left to whatever plays the curves back.

use serde::{Deserialize, Serialize};

use crate::sample::{SampleSequence, Vec3};

/// A single keyframe on a scalar channel.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CurveKey {
    /// Seconds from the first captured sample.
    pub time: f32,
    pub value: f32,
}

/// Keys for one scalar channel, tagged with its channel name (e.g. `m_LocalPosition.x`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Curve {
    pub channel: String,
    pub keys: Vec<CurveKey>,
}

impl Curve {
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Unnamed x/y/z curves produced from one sample sequence.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AxisCurves {
    pub x: Vec<CurveKey>,
    pub y: Vec<CurveKey>,
    pub z: Vec<CurveKey>,
}

impl AxisCurves {
    /// Attach channel names `<property>.x`, `<property>.y`, `<property>.z`.
    pub fn into_named(self, property: &str) -> [Curve; 3] {
        [
            Curve {
                channel: format!("{property}.x"),
                keys: self.x,
            },
            Curve {
                channel: format!("{property}.y"),
                keys: self.y,
            },
            Curve {
                channel: format!("{property}.z"),
                keys: self.z,
            },
        ]
    }
}

/// Encode a recorded sequence into three per-axis curves.
pub fn encode(sequence: &SampleSequence, interval: f32) -> AxisCurves {
    encode_values(sequence.values(), interval)
}

/// Encode raw vectors; see [`encode`].
pub fn encode_values(values: &[Vec3], interval: f32) -> AxisCurves {
    let n = values.len();
    let mut curves = AxisCurves {
        x: Vec::with_capacity(n),
        y: Vec::with_capacity(n),
        z: Vec::with_capacity(n),
    };
    for (i, v) in values.iter().enumerate() {
        let time = interval * i as f32;
        curves.x.push(CurveKey { time, value: v[0] });
        curves.y.push(CurveKey { time, value: v[1] });
        curves.z.push(CurveKey { time, value: v[2] });
    }
    curves
}

/// Encode and name in one step.
pub fn encode_channels(property: &str, sequence: &SampleSequence, interval: f32) -> [Curve; 3] {
    encode(sequence, interval).into_named(property)
}

/// Finished recording, ready to hand to a [`ClipWriter`](crate::writer::ClipWriter).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecordedClip {
    pub name: String,
    /// Seconds between keys.
    pub interval: f32,
    /// Number of captured keyframes (per channel).
    pub key_count: usize,
    /// `key_count * interval` seconds.
    pub duration: f32,
    /// Position curves first, then rotation, then scale when it was recorded.
    pub curves: Vec<Curve>,
}

impl RecordedClip {
    pub fn curve(&self, channel: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.channel == channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleKind;

    #[test]
    fn named_channels_use_axis_suffixes() {
        let seq = SampleSequence::from_values(SampleKind::Scale, vec![[1.0, 1.0, 1.0]]);
        let names: Vec<String> = encode_channels("m_LocalScale", &seq, 0.5)
            .into_iter()
            .map(|c| c.channel)
            .collect();
        assert_eq!(
            names,
            vec!["m_LocalScale.x", "m_LocalScale.y", "m_LocalScale.z"]
        );
    }

    #[test]
    fn empty_sequence_yields_empty_curves() {
        let seq = SampleSequence::new(SampleKind::Position);
        let curves = encode(&seq, 0.5);
        assert!(curves.x.is_empty());
        assert!(curves.y.is_empty());
        assert!(curves.z.is_empty());
    }
}
