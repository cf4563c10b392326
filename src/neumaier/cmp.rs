use super::*;
use core::cmp::Ordering;

// All comparisons are on the effective value, so they agree with those of the plain floats
// returned by `to_float`.

impl<T: Float> PartialEq for Neumaier<T> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.to_float() == other.to_float()
  }
}

impl<T: Float> PartialOrd for Neumaier<T> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.to_float().partial_cmp(&other.to_float())
  }
}

impl<T: Float> PartialEq<T> for Neumaier<T> {
  #[inline]
  fn eq(&self, other: &T) -> bool {
    self.to_float() == *other
  }
}

impl<T: Float> PartialOrd<T> for Neumaier<T> {
  #[inline]
  fn partial_cmp(&self, other: &T) -> Option<Ordering> {
    self.to_float().partial_cmp(other)
  }
}

macro_rules! impl_primitive_lhs {
  ($float:ty) => {
    impl PartialEq<Neumaier<$float>> for $float {
      #[inline]
      fn eq(&self, other: &Neumaier<$float>) -> bool {
        *self == other.to_float()
      }
    }

    impl PartialOrd<Neumaier<$float>> for $float {
      #[inline]
      fn partial_cmp(&self, other: &Neumaier<$float>) -> Option<Ordering> {
        self.partial_cmp(&other.to_float())
      }
    }
  }
}

impl_primitive_lhs!{f32}
impl_primitive_lhs!{f64}
