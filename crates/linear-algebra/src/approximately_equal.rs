use std::fmt::Debug;

/// Absolute difference under which two scalars compare equal.
pub const TOLERANCE: f64 = 1e-4;

pub trait ApproximatelyEqual {
    fn approximately_equal(&self, other: &Self) -> bool;
}

impl ApproximatelyEqual for f64 {
    fn approximately_equal(&self, other: &Self) -> bool {
        (self - other).abs() < TOLERANCE
    }
}

impl ApproximatelyEqual for f32 {
    fn approximately_equal(&self, other: &Self) -> bool {
        f64::from((self - other).abs()) < TOLERANCE
    }
}

impl<T: ApproximatelyEqual, const N: usize> ApproximatelyEqual for [T; N] {
    fn approximately_equal(&self, other: &Self) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(lhs, rhs)| lhs.approximately_equal(rhs))
    }
}

#[track_caller]
pub fn assert_approximately_equal<T: ApproximatelyEqual + Debug>(lhs: T, rhs: T) {
    assert!(
        lhs.approximately_equal(&rhs),
        "assertion failed: `(left ≈ right)`\n  left: `{lhs:?}`,\n right: `{rhs:?}`"
    );
}
