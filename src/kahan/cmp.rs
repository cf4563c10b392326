use super::*;
use core::cmp::Ordering;

// Equality is structural (value *and* correction), while ordering looks at the value alone. This
// is stricter than a comparison of plain floats: two sums that read the same may still differ in
// their pending corrections, and thus compare unequal.

impl<T: Float> PartialEq for Kahan<T> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.value == other.value && self.correction == other.correction
  }
}

impl<T: Float> PartialOrd for Kahan<T> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.value.partial_cmp(&other.value)
  }
}

/// A plain float compares as a [`Kahan`] with no pending correction.
impl<T: Float> PartialEq<T> for Kahan<T> {
  #[inline]
  fn eq(&self, other: &T) -> bool {
    *self == Kahan::new(*other)
  }
}

impl<T: Float> PartialOrd<T> for Kahan<T> {
  #[inline]
  fn partial_cmp(&self, other: &T) -> Option<Ordering> {
    self.value.partial_cmp(other)
  }
}

macro_rules! impl_primitive_lhs {
  ($float:ty) => {
    impl PartialEq<Kahan<$float>> for $float {
      #[inline]
      fn eq(&self, other: &Kahan<$float>) -> bool {
        other == self
      }
    }

    impl PartialOrd<Kahan<$float>> for $float {
      #[inline]
      fn partial_cmp(&self, other: &Kahan<$float>) -> Option<Ordering> {
        self.partial_cmp(&other.value)
      }
    }
  }
}

impl_primitive_lhs!{f32}
impl_primitive_lhs!{f64}
