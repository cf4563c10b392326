use super::*;
use crate::underlying::float_as;

impl<T: Float> Neumaier<T> {
  /// Zero (`0`), with no pending correction. Same as [`Default::default`].
  pub const ZERO: Self = Self::new(T::ZERO);

  /// Construct from a value of the underlying type, with no pending correction.
  #[inline]
  pub const fn new(value: T) -> Self {
    Self { value, correction: T::ZERO }
  }

  /// Construct from a running sum and an accumulated correction, as returned by [`Self::parts`].
  #[inline]
  pub const fn from_parts(value: T, correction: T) -> Self {
    Self { value, correction }
  }

  /// Return the running sum and the accumulated correction.
  #[inline]
  pub const fn parts(self) -> (T, T) {
    (self.value, self.correction)
  }

  /// The effective value of `self` as a plain float, i.e. the running sum plus the accumulated
  /// correction.
  ///
  /// With no correction the running sum is returned as is, so that the sign of a negative zero is
  /// kept (`-0 + 0` is `+0`).
  #[inline]
  pub fn to_float(self) -> T {
    if self.correction == T::ZERO {
      self.value
    } else {
      self.value + self.correction
    }
  }

  /// Convert to a [`Neumaier`] of a different precision, wider or narrower.
  ///
  /// The effective value is converted (as if by `as`) and becomes the new running sum, with no
  /// correction.
  ///
  /// ```
  /// # use kahan::nf64;
  /// let x = nf64::from_parts(1.0, 1e-17);
  /// assert_eq!(x.convert::<f32>().to_float(), 1.0_f32);
  /// ```
  #[inline]
  pub fn convert<U: Float>(self) -> Neumaier<U> {
    Neumaier::new(float_as(self.to_float()))
  }
}
