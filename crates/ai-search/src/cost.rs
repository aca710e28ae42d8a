use core::cmp::Ordering;
use core::fmt::Debug;

/// Scalar path cost used by the search engine.
///
/// Floats are ordered with `total_cmp` so the open list has a total order even when a domain
/// hands back a NaN. Integer costs saturate instead of wrapping.
pub trait Cost: Copy + PartialOrd + Debug + 'static {
    const ZERO: Self;

    fn total_cmp(&self, other: &Self) -> Ordering;

    /// `self + step`, saturating for integer costs.
    fn accumulate(self, step: Self) -> Self;

    fn is_negative(self) -> bool {
        self.total_cmp(&Self::ZERO) == Ordering::Less
    }
}

macro_rules! float_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            const ZERO: Self = 0.0;

            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }

            fn accumulate(self, step: Self) -> Self {
                self + step
            }
        }
    )*};
}

macro_rules! int_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            const ZERO: Self = 0;

            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn accumulate(self, step: Self) -> Self {
                self.saturating_add(step)
            }
        }
    )*};
}

float_cost!(f32, f64);
int_cost!(u32, u64);
