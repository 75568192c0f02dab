use derive_more::Display;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

///
/// Float64
///
/// f64 with a total order; -0.0 is stored as 0.0 and every NaN as the
/// canonical quiet NaN, so Eq/Ord/Hash agree.
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display)]
pub struct Float64(f64);

impl Float64 {
    #[must_use]
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            Self(f64::NAN)
        } else if v == 0.0 {
            Self(0.0)
        } else {
            Self(v)
        }
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Eq for Float64 {}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Float64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Float64 {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

impl From<f32> for Float64 {
    fn from(v: f32) -> Self {
        Self::new(f64::from(v))
    }
}
