use super::*;
use crate::underlying::heal;

impl<T: Float> Neumaier<T> {
  /// Add `x` to `self`, in place, using the Kahan–Babuška–Neumaier algorithm. This is what `+=`
  /// does.
  ///
  /// The low-order bits lost by `t = s + x` are recovered from the smaller of the two operands in
  /// magnitude, and added to `c`. The running sum `s` itself is left uncorrected.
  #[inline]
  pub fn accumulate(&mut self, x: T) {
    let t = self.value + x;
    let lost =
      if self.value.abs() >= x.abs() {
        (self.value - t) + x
      } else {
        (x - t) + self.value
      };
    self.correction = heal(self.correction + lost);
    self.value = t;
  }

  /// Add another compensated value to `self`, in place. This is what `+=` does with a
  /// [`Neumaier`] operand: both its running sum and its correction are accumulated, so that
  /// partial sums can be merged without losing their corrections.
  #[inline]
  pub(crate) fn absorb(&mut self, other: Self) {
    self.accumulate(other.value);
    // Adding a zero correction would only lose the sign of a `-0` value.
    if other.correction != T::ZERO {
      self.accumulate(other.correction);
    }
  }
}

impl<T: Float> core::ops::Neg for Neumaier<T> {
  type Output = Neumaier<T>;

  /// Flips the sign of both the value and the correction.
  #[inline]
  fn neg(self) -> Self::Output {
    Neumaier::from_parts(-self.value, -self.correction)
  }
}

impl<T: Float> core::ops::Neg for &Neumaier<T> {
  type Output = Neumaier<T>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
