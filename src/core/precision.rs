//! Floating-point precision abstraction layered on top of `glam`.
//!
//! The engine is generic over [`Real`], implemented for `f32` (backed by
//! [`glam::Vec3`]) and `f64` (backed by [`glam::DVec3`]). Every vector can be
//! widened to a `DVec3` so summaries can be accumulated at full precision.

use glam::{DVec3, Vec3};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Scalar type the simulation runs at.
pub trait Real:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
{
    /// 3D vector over this scalar.
    type Vector: Vector3<Scalar = Self>;

    const ZERO: Self;
    const ONE: Self;

    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
    fn sqrt(self) -> Self;
}

/// 3D vector primitive used for positions and forces.
pub trait Vector3:
    Copy + Debug + PartialEq + Send + Sync + 'static + Add<Output = Self> + Sub<Output = Self> + AddAssign + SubAssign
{
    type Scalar: Copy;

    const ZERO: Self;

    fn new(x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self;
    fn scale(self, scalar: Self::Scalar) -> Self;
    fn dot(self, rhs: Self) -> Self::Scalar;
    fn length(self) -> Self::Scalar;
    fn length_squared(self) -> Self::Scalar;

    /// Returns the unit vector pointing along `self`.
    ///
    /// # Panics
    ///
    /// Panics if the length is zero or not finite. Two bodies sharing an exact
    /// position end up here; continuing would spread NaN through every later
    /// step.
    fn normalize(self) -> Self;

    fn to_dvec3(self) -> DVec3;
    fn from_dvec3(value: DVec3) -> Self;
}

macro_rules! impl_precision {
    ($scalar:ty, $vector:ty) => {
        impl Real for $scalar {
            type Vector = $vector;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $scalar
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$scalar>::sqrt(self)
            }
        }

        impl Vector3 for $vector {
            type Scalar = $scalar;

            const ZERO: Self = <$vector>::ZERO;

            #[inline]
            fn new(x: $scalar, y: $scalar, z: $scalar) -> Self {
                <$vector>::new(x, y, z)
            }

            #[inline]
            fn scale(self, scalar: $scalar) -> Self {
                self * scalar
            }

            #[inline]
            fn dot(self, rhs: Self) -> $scalar {
                <$vector>::dot(self, rhs)
            }

            #[inline]
            fn length(self) -> $scalar {
                <$vector>::length(self)
            }

            #[inline]
            fn length_squared(self) -> $scalar {
                <$vector>::length_squared(self)
            }

            fn normalize(self) -> Self {
                match <$vector>::try_normalize(self) {
                    Some(unit) => unit,
                    None => panic!("cannot normalize degenerate vector {:?}", self),
                }
            }

            #[inline]
            fn to_dvec3(self) -> DVec3 {
                DVec3::new(self.x as f64, self.y as f64, self.z as f64)
            }

            #[inline]
            fn from_dvec3(value: DVec3) -> Self {
                <$vector>::new(value.x as $scalar, value.y as $scalar, value.z as $scalar)
            }
        }
    };
}

impl_precision!(f32, Vec3);
impl_precision!(f64, DVec3);
