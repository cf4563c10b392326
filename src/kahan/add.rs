use super::*;
use crate::underlying::heal;

impl<T: Float> Kahan<T> {
  /// Add `x` to `self`, in place, using Kahan's algorithm. This is what `+=` does.
  ///
  /// The correction `c` holds how much the running sum `s` overshot the exact sum on the previous
  /// step, so it is subtracted from the new addend first. The new correction `(t - s) - y` must be
  /// evaluated with the *old* `s`.
  #[inline]
  pub fn accumulate(&mut self, x: T) {
    let y = x - self.correction;
    let t = self.value + y;
    self.correction = heal((t - self.value) - y);
    self.value = t;
  }

  /// Add another compensated value to `self`, in place. This is what `+=` does with a [`Kahan`]
  /// operand: the operand contributes its value, i.e. its running sum.
  #[inline]
  pub(crate) fn absorb(&mut self, other: Self) {
    self.accumulate(other.value)
  }
}

impl<T: Float> core::ops::Neg for Kahan<T> {
  type Output = Kahan<T>;

  /// Flips the sign of both the value and the pending correction.
  #[inline]
  fn neg(self) -> Self::Output {
    Kahan::from_parts(-self.value, -self.correction)
  }
}

impl<T: Float> core::ops::Neg for &Kahan<T> {
  type Output = Kahan<T>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
