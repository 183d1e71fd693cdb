//! Captured sample types and the append-only sequences that hold them.

use serde::{Deserialize, Serialize};

/// Three-component vector (x, y, z).
pub type Vec3 = [f32; 3];

/// Which transform property a sample was read from.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Position,
    /// Euler angles in degrees.
    Rotation,
    Scale,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Sample {
    pub kind: SampleKind,
    pub value: Vec3,
}

/// Ordered record of samples of one kind, indexed by capture order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SampleSequence {
    kind: SampleKind,
    values: Vec<Vec3>,
}

impl SampleSequence {
    pub fn new(kind: SampleKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    pub fn with_capacity(kind: SampleKind, capacity: usize) -> Self {
        Self {
            kind,
            values: Vec::with_capacity(capacity),
        }
    }

    /// Build a sequence from already captured values.
    pub fn from_values(kind: SampleKind, values: Vec<Vec3>) -> Self {
        Self { kind, values }
    }

    #[inline]
    pub fn kind(&self) -> SampleKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: Vec3) {
        self.values.push(value);
    }

    pub fn get(&self, index: usize) -> Option<Sample> {
        self.values.get(index).map(|value| Sample {
            kind: self.kind,
            value: *value,
        })
    }

    pub fn last(&self) -> Option<&Vec3> {
        self.values.last()
    }

    pub fn values(&self) -> &[Vec3] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        let kind = self.kind;
        self.values.iter().map(move |value| Sample {
            kind,
            value: *value,
        })
    }
}
