use crate::{Float, Kahan, Neumaier};
use core::ops::{AddAssign, Neg, SubAssign};

/// A running sum of `T`s: either a plain `f32`/`f64`, or one of the compensated types built on it.
///
/// This lets generic code be written once and then run with or without compensation, for
/// instance to compare the accuracy of the different strategies.
///
/// ```
/// use kahan::{Accumulator, kf64, nf64};
///
/// fn total<A: Accumulator<f64>>(xs: &[f64]) -> f64 {
///   let mut sum = A::default();
///   for &x in xs {
///     sum += x;
///   }
///   sum.total()
/// }
///
/// let xs = [1.0, 1e100, 1.0, -1e100];
/// assert_eq!(total::<f64>(&xs), 0.0);
/// assert_eq!(total::<kf64>(&xs), 0.0);
/// assert_eq!(total::<nf64>(&xs), 2.0);
/// ```
pub trait Accumulator<T: Float>:
  Copy + Default +
  From<T> +
  AddAssign<T> + SubAssign<T> +
  Neg<Output = Self> +
  PartialOrd<T>
{
  /// The value of the running sum, as a plain float.
  fn total(self) -> T;
}

impl Accumulator<f32> for f32 {
  #[inline]
  fn total(self) -> f32 { self }
}

impl Accumulator<f64> for f64 {
  #[inline]
  fn total(self) -> f64 { self }
}

impl<T: Float> Accumulator<T> for Kahan<T> {
  #[inline]
  fn total(self) -> T { self.to_float() }
}

impl<T: Float> Accumulator<T> for Neumaier<T> {
  #[inline]
  fn total(self) -> T { self.to_float() }
}
