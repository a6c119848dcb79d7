use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, BitXor, Index, Mul, Neg, Sub},
};

use rs42::extensions::PipeLine;

use crate::ApproximatelyEqual;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<K, const N: usize>([K; N]);


// Constructors:

impl<K, const N: usize> From<[K; N]> for Vector<K, N> {
    fn from(scalars: [K; N]) -> Self {
        Self(scalars)
    }
}

impl<K: Default, const N: usize> Default for Vector<K, N> {
    fn default() -> Self {
        Self::from_fn(|_| K::default())
    }
}

impl<K, const N: usize> Vector<K, N> {
    pub fn from_fn(f: impl FnMut(usize) -> K) -> Self {
        Self(std::array::from_fn(f))
    }
}


// Getters:

impl<K, const N: usize> Vector<K, N> {
    pub fn scalars(&self) -> &[K; N] {
        &self.0
    }

    pub fn into_scalars(self) -> [K; N] {
        self.0
    }
}

impl<K, const N: usize> Index<usize> for Vector<K, N> {
    type Output = K;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<K: Display, const N: usize> Display for Vector<K, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, scalar) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            scalar.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<K: Copy> Vector<K, 3> {
    pub fn x(&self) -> K {
        self.0[0]
    }

    pub fn y(&self) -> K {
        self.0[1]
    }

    pub fn z(&self) -> K {
        self.0[2]
    }
}


// Arithmetic:

impl<K: Copy + Sub<Output = K>, const N: usize> Sub for Vector<K, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_fn(|i| self.0[i] - rhs.0[i])
    }
}

impl<K: Copy + Sub<Output = K>, const N: usize> Sub<&Vector<K, N>> for Vector<K, N> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        Self::from_fn(|i| self.0[i] - rhs.0[i])
    }
}

impl<K: Copy + Neg<Output = K>, const N: usize> Neg for Vector<K, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.0.map(|e| -e).pipe(Self)
    }
}

/// Cross product.
impl<K> BitXor for Vector<K, 3>
where
    K: Copy + Mul<Output = K> + Sub<Output = K>,
{
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<K, const N: usize> Vector<K, N>
where
    K: Copy + Default + Add<Output = K> + Mul<Output = K>,
{
    pub fn dot(&self, rhs: &Self) -> K {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .fold(K::default(), |acc, (&lhs, &rhs)| acc + lhs * rhs)
    }
}

impl<const N: usize> Vector<f64, N> {
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector pointing the same way, or the zero vector when
    /// `self` is (approximately) zero.
    pub fn normalize(&self) -> Self {
        let norm = self.norm();
        if norm.approximately_equal(&0.) {
            return Self([0.; N]);
        }
        self.0.map(|e| e / norm).pipe(Self)
    }

    /// Compares directions only, the magnitudes of both vectors are ignored.
    pub fn is_same_direction(&self, other: &Self) -> bool {
        self.normalize().approximately_equal(&other.normalize())
    }
}

impl<K: ApproximatelyEqual, const N: usize> ApproximatelyEqual for Vector<K, N> {
    fn approximately_equal(&self, other: &Self) -> bool {
        self.0.approximately_equal(&other.0)
    }
}
