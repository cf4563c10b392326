use super::*;
use crate::underlying::float_as;

impl<T: Float> Kahan<T> {
  /// Zero (`0`), with no pending correction. Same as [`Default::default`].
  pub const ZERO: Self = Self::new(T::ZERO);

  /// Construct from a value of the underlying type, with no pending correction.
  #[inline]
  pub const fn new(value: T) -> Self {
    Self { value, correction: T::ZERO }
  }

  /// Construct from a running sum and a pending correction, as returned by [`Self::parts`].
  #[inline]
  pub const fn from_parts(value: T, correction: T) -> Self {
    Self { value, correction }
  }

  /// Return the running sum and the pending correction.
  #[inline]
  pub const fn parts(self) -> (T, T) {
    (self.value, self.correction)
  }

  /// The value of `self` as a plain float, i.e. the running sum.
  ///
  /// This is the only way (together with the [`From`] impls) to get a plain float back; there is
  /// no implicit conversion, so that compensated sums are never silently mixed with uncompensated
  /// arithmetic.
  #[inline]
  pub const fn to_float(self) -> T {
    self.value
  }

  /// Convert to a [`Kahan`] of a different precision, wider or narrower.
  ///
  /// Only the value is converted (as if by `as`); the pending correction is dropped, as it is
  /// meaningless at the other precision.
  ///
  /// ```
  /// # use kahan::kf64;
  /// let x = kf64::new(0.1);
  /// assert_eq!(x.convert::<f32>().to_float(), 0.1_f32);
  /// ```
  #[inline]
  pub fn convert<U: Float>(self) -> Kahan<U> {
    Kahan::new(float_as(self.value))
  }
}
