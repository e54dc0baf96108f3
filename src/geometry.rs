//! Vector algebra shared by every stage of the tracer.
//!
//! The 2, 3 and 4 component vectors are glam's `Vec2`, `Vec3A` and `Vec4`.
//! They share one arithmetic interface through the [`Vector`] trait so the
//! free functions below work for any dimension; only [`cross`] is 3D specific.

use std::ops::{Add, Index, Mul, Neg, Sub};

use glam::{Vec2, Vec3A, Vec4};

/// Fixed-size vector of `f32` components.
///
/// `Default` is the all-zero vector. Indexing past [`Vector::DIM`] panics.
pub trait Vector:
    Copy
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Neg<Output = Self>
    + Index<usize, Output = f32>
{
    /// Number of components.
    const DIM: usize;

    /// Sum of the componentwise products.
    fn dot(self, rhs: Self) -> f32;

    /// Euclidean length.
    fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Rescale in place so that the norm equals `length`.
    ///
    /// # Panics
    ///
    /// Panics if the vector has zero (or non-finite) length. Callers must only
    /// normalize vectors they know to be nonzero.
    fn normalize_to(&mut self, length: f32) -> &mut Self {
        let n = self.norm();
        assert!(
            n > 0.0 && n.is_finite(),
            "cannot normalize a vector of length {n}"
        );
        *self = *self * (length / n);
        self
    }
}

macro_rules! impl_vector {
    ($ty:ty, $dim:expr) => {
        impl Vector for $ty {
            const DIM: usize = $dim;

            #[inline]
            fn dot(self, rhs: Self) -> f32 {
                <$ty>::dot(self, rhs)
            }
        }
    };
}

impl_vector!(Vec2, 2);
impl_vector!(Vec3A, 3);
impl_vector!(Vec4, 4);

/// Dot product of two vectors of the same dimension.
#[inline]
pub fn dot<V: Vector>(a: V, b: V) -> f32 {
    a.dot(b)
}

/// Euclidean length of `v`.
#[inline]
pub fn norm<V: Vector>(v: V) -> f32 {
    v.norm()
}

/// Copy of `v` scaled to unit length.
///
/// # Panics
///
/// Panics if `v` is the zero vector.
#[inline]
pub fn normalize<V: Vector>(mut v: V) -> V {
    v.normalize_to(1.0);
    v
}

/// Right-handed cross product of two 3D vectors.
#[inline]
pub fn cross(a: Vec3A, b: Vec3A) -> Vec3A {
    Vec3A::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}
