//! Read-only transform source contract supplied by the host.

use serde::{Deserialize, Serialize};

use crate::sample::Vec3;

/// Anything that can report a node's current local transform.
///
/// The recorder only reads from the source; it never mutates it.
pub trait TransformSource {
    fn position(&self) -> Vec3;
    /// Euler angles in degrees.
    fn rotation_degrees(&self) -> Vec3;
    fn scale(&self) -> Vec3;
}

/// Plain-value transform, handy for hosts that already copy TRS out per frame.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransformSnapshot {
    pub position: Vec3,
    pub rotation_degrees: Vec3,
    pub scale: Vec3,
}

impl Default for TransformSnapshot {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation_degrees: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl TransformSource for TransformSnapshot {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation_degrees(&self) -> Vec3 {
        self.rotation_degrees
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }
}
