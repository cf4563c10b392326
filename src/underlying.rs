//! This module contains the underlying primitive float operations needed by the compensated
//! types, and the shared guard that keeps their correction term numeric. These are hidden from the
//! end-user, which only sees the sealed [`Float`] trait, implemented for `f32` and `f64`.

use crate::utl::unlikely;

/// The trait for the underlying machine float types that a compensated value can be built on
/// (only satisfied by `f32` and `f64`).
///
/// This is a *sealed* type.
pub trait Float: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  Copy + Clone +
  PartialEq + PartialOrd +
  Default +
  core::fmt::Debug + core::fmt::Display + core::fmt::LowerExp + core::fmt::UpperExp +
  core::str::FromStr<Err = core::num::ParseFloatError> +
  core::ops::Add<Self, Output=Self> + core::ops::AddAssign<Self> +
  core::ops::Sub<Self, Output=Self> + core::ops::SubAssign<Self> +
  core::ops::Neg<Output=Self> +
  crate::Limits
{
  const ZERO: Self;

  fn abs(self) -> Self;
  fn is_finite(self) -> bool;

  /// Widen to an `f64`; exact for every `Float`.
  fn as_f64(self) -> f64;

  /// Cast an `f64` to `Self` with the semantics of the `as` keyword (round to nearest, overflow
  /// to infinity).
  fn of_f64(x: f64) -> Self;
}

macro_rules! impl_common {
  ($float:ty) => {
    const ZERO: Self = 0.0;

    #[inline]
    fn abs(self) -> Self { self.abs() }

    #[inline]
    fn is_finite(self) -> bool { self.is_finite() }

    #[inline]
    fn as_f64(self) -> f64 { self as f64 }

    #[inline]
    fn of_f64(x: f64) -> Self { x as $float }
  }
}

impl Float for f64 {}
impl Sealed for f64 {
  impl_common!{f64}
}

impl Float for f32 {}
impl Sealed for f32 {
  impl_common!{f32}
}

/// The correction guard shared by every compensated type: returns `correction` unchanged if it is
/// finite, and `0` otherwise.
///
/// A non-finite correction can only come out of a step where the running value itself became
/// infinite or NaN (an infinite or NaN addend, or an overflow), so the value channel already
/// carries that result. Left in place, an infinite correction turns the next finite addend into
/// `∞ - ∞ = NaN`, and a NaN correction poisons every later addition even after the value recovers.
#[inline]
pub(crate) fn heal<T: Float>(correction: T) -> T {
  if unlikely(!correction.is_finite()) {
    T::ZERO
  } else {
    correction
  }
}

/// A type-generic version of the keyword `as`, for casting between [`Float`]s.
///
/// Widening is exact; narrowing rounds to nearest and overflows to infinity.
///
/// ```ignore
/// assert_eq!(float_as::<f32, f64>(0.5), 0.5);
/// assert_eq!(float_as::<f64, f32>(1e300), f32::INFINITY);
/// ```
#[inline]
pub(crate) fn float_as<T: Float, U: Float>(x: T) -> U {
  U::of_f64(x.as_f64())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn heal_finite() {
    assert_eq!(heal(0.0_f64), 0.0);
    assert_eq!(heal(-1.5e-17_f64), -1.5e-17);
    assert_eq!(heal(f32::MAX), f32::MAX);
    assert_eq!(heal(f32::from_bits(1)), f32::from_bits(1));
  }

  #[test]
  fn heal_non_finite() {
    assert_eq!(heal(f64::NAN).to_bits(), 0.0_f64.to_bits());
    assert_eq!(heal(f64::INFINITY).to_bits(), 0.0_f64.to_bits());
    assert_eq!(heal(f32::NEG_INFINITY).to_bits(), 0.0_f32.to_bits());
    assert_eq!(heal(-f32::NAN).to_bits(), 0.0_f32.to_bits());
  }

  #[test]
  fn float_as_widen() {
    assert_eq!(float_as::<f32, f64>(0.1), 0.1_f32 as f64);
    assert_eq!(float_as::<f32, f64>(f32::MAX), f32::MAX as f64);
    assert!(float_as::<f32, f64>(f32::NAN).is_nan());
  }

  #[test]
  fn float_as_narrow() {
    assert_eq!(float_as::<f64, f32>(0.1), 0.1_f32);
    assert_eq!(float_as::<f64, f32>(1e300), f32::INFINITY);
    assert_eq!(float_as::<f64, f32>(-1e300), f32::NEG_INFINITY);
    assert_eq!(float_as::<f64, f32>(1e-300), 0.0);
  }

  #[test]
  fn float_as_same() {
    assert_eq!(float_as::<f64, f64>(0.1), 0.1);
    assert_eq!(float_as::<f32, f32>(0.1), 0.1);
  }
}
