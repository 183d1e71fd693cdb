//! Session configuration for vizij-transform-recorder.

use serde::{Deserialize, Serialize};

use crate::error::RecorderError;
use crate::sample::SampleKind;

/// Upper bound on samples preallocated per sequence; larger hints are clamped.
pub const MAX_PREALLOC: usize = 1 << 16;

/// Property names used to build curve channel names (`<property>.x` etc.).
///
/// Defaults match the local-transform bindings of the editor the recorder was
/// first written for; adapters targeting other runtimes can override them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelProperties {
    pub position: String,
    pub rotation: String,
    pub scale: String,
}

impl Default for ChannelProperties {
    fn default() -> Self {
        Self {
            position: "m_LocalPosition".to_string(),
            rotation: "m_LocalEulerAnglesRaw".to_string(),
            scale: "m_LocalScale".to_string(),
        }
    }
}

impl ChannelProperties {
    pub fn for_kind(&self, kind: SampleKind) -> &str {
        match kind {
            SampleKind::Position => &self.position,
            SampleKind::Rotation => &self.rotation,
            SampleKind::Scale => &self.scale,
        }
    }
}

/// Configuration consumed when a recording session starts. Immutable for the
/// lifetime of the session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecorderConfig {
    /// Seconds between captured keyframes. Must be finite and > 0.
    pub interval: f32,
    /// Record scale alongside position and rotation (leave off for cameras).
    pub record_scale: bool,
    /// Name carried onto the finished clip for asset writers.
    pub clip_name: String,
    pub properties: ChannelProperties,
    /// Initial capacity hint for each sample sequence, clamped to [`MAX_PREALLOC`].
    pub capacity_hint: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            interval: 0.5,
            record_scale: false,
            clip_name: "test".to_string(),
            properties: ChannelProperties::default(),
            capacity_hint: 1024,
        }
    }
}

impl RecorderConfig {
    pub fn with_interval(mut self, interval: f32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_record_scale(mut self, record_scale: bool) -> Self {
        self.record_scale = record_scale;
        self
    }

    /// Samples to preallocate per sequence.
    #[inline]
    pub fn preallocation(&self) -> usize {
        self.capacity_hint.min(MAX_PREALLOC)
    }

    pub fn with_clip_name(mut self, name: impl Into<String>) -> Self {
        self.clip_name = name.into();
        self
    }

    /// Parse a JSON config; omitted fields fall back to [`Default`].
    pub fn from_json_str(s: &str) -> Result<Self, RecorderError> {
        let cfg: RecorderConfig =
            serde_json::from_str(s).map_err(|e| RecorderError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), RecorderError> {
        if !(self.interval.is_finite() && self.interval > 0.0) {
            return Err(RecorderError::invalid(format!(
                "interval must be a finite number > 0 (got {})",
                self.interval
            )));
        }
        if self.clip_name.is_empty() {
            return Err(RecorderError::invalid("clip_name must not be empty"));
        }
        for kind in [SampleKind::Position, SampleKind::Rotation, SampleKind::Scale] {
            if self.properties.for_kind(kind).is_empty() {
                return Err(RecorderError::invalid(format!(
                    "property name for {kind:?} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = RecorderConfig::default();
        assert_eq!(cfg.interval, 0.5);
        assert!(!cfg.record_scale);
        assert_eq!(cfg.clip_name, "test");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_interval() {
        for interval in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let err = RecorderConfig::default()
                .with_interval(interval)
                .validate()
                .unwrap_err();
            assert!(matches!(err, RecorderError::InvalidConfiguration { .. }));
        }
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let cfg = RecorderConfig::from_json_str(r#"{ "interval": 0.25, "record_scale": true }"#)
            .expect("config parses");
        assert_eq!(cfg.interval, 0.25);
        assert!(cfg.record_scale);
        assert_eq!(cfg.properties, ChannelProperties::default());
        assert_eq!(cfg.capacity_hint, 1024);
    }

    #[test]
    fn oversized_capacity_hint_is_clamped() {
        let cfg = RecorderConfig::from_json_str(r#"{ "capacity_hint": 18446744073709551615 }"#)
            .expect("config parses");
        assert_eq!(cfg.preallocation(), MAX_PREALLOC);
        assert_eq!(RecorderConfig::default().preallocation(), 1024);
    }

    #[test]
    fn json_rejects_bad_input() {
        assert!(matches!(
            RecorderConfig::from_json_str("{ not json"),
            Err(RecorderError::ConfigParse(_))
        ));
        assert!(matches!(
            RecorderConfig::from_json_str(r#"{ "interval": 0 }"#),
            Err(RecorderError::InvalidConfiguration { .. })
        ));
    }
}
