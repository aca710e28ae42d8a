use core::cmp::Ordering;
use core::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `f32` usable as a [`StateValue`](crate::StateValue) payload.
///
/// Equality, ordering and hashing go through the bit pattern, with `-0.0` folded into `0.0`
/// and every NaN folded into one. Two `Real`s are equal exactly when they hash the same.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Real(pub f32);

impl Real {
    pub fn get(self) -> f32 {
        self.0
    }

    fn canonical(self) -> f32 {
        if self.0 == 0.0 {
            0.0
        } else if self.0.is_nan() {
            f32::NAN
        } else {
            self.0
        }
    }
}

impl From<f32> for Real {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<Real> for f32 {
    fn from(value: Real) -> Self {
        value.0
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.canonical().to_bits() == other.canonical().to_bits()
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state);
    }
}

impl fmt::Debug for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
