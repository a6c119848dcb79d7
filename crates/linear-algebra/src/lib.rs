mod approximately_equal;
mod vector;

pub use approximately_equal::{assert_approximately_equal, ApproximatelyEqual, TOLERANCE};
pub use vector::Vector;

pub type Vec3<K = f64> = Vector<K, 3>;
