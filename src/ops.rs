//! Arithmetic operators and iterator sums, shared by both compensated types.
//!
//! Every operator is defined in terms of two inherent methods of the type:
//!
//!   - `accumulate(&mut self, x: T)`, the compensated addition of a plain float, and
//!   - `absorb(&mut self, other: Self)`, the compensated addition of another compensated value.
//!
//! Subtraction is addition of the negated operand, and the binary operators copy the left operand,
//! apply the compound assignment, and return the copy.

/// Helper macro for implementing a binary operator for a value and a reference on the left, in
/// terms of its compound assignment.
macro_rules! mk_binary {
  ($name:ident, $trait:ident, $method:ident, $trait_assign:ident, $method_assign:ident, $rhs:ty) => {
    impl<T: Float> core::ops::$trait<$rhs> for $name<T> {
      type Output = $name<T>;

      #[inline]
      fn $method(mut self, rhs: $rhs) -> Self::Output {
        core::ops::$trait_assign::$method_assign(&mut self, rhs);
        self
      }
    }

    impl<T: Float> core::ops::$trait<$rhs> for &$name<T> {
      type Output = $name<T>;

      #[inline]
      fn $method(self, rhs: $rhs) -> Self::Output { core::ops::$trait::$method(*self, rhs) }
    }
  }
}

pub(crate) use mk_binary;

/// Helper macro for implementing `+`, `-`, `+=`, `-=` with plain and compensated operands (each
/// by value and by reference), and `Sum`, `FromIterator`, `Extend`.
macro_rules! mk_ops {
  ($name:ident) => {
    impl<T: Float> core::ops::AddAssign<T> for $name<T> {
      #[inline]
      fn add_assign(&mut self, rhs: T) { self.accumulate(rhs) }
    }

    impl<T: Float> core::ops::AddAssign<&T> for $name<T> {
      #[inline]
      fn add_assign(&mut self, rhs: &T) { self.accumulate(*rhs) }
    }

    impl<T: Float> core::ops::SubAssign<T> for $name<T> {
      #[inline]
      fn sub_assign(&mut self, rhs: T) { self.accumulate(-rhs) }
    }

    impl<T: Float> core::ops::SubAssign<&T> for $name<T> {
      #[inline]
      fn sub_assign(&mut self, rhs: &T) { self.accumulate(-*rhs) }
    }

    impl<T: Float> core::ops::AddAssign<$name<T>> for $name<T> {
      #[inline]
      fn add_assign(&mut self, rhs: $name<T>) { self.absorb(rhs) }
    }

    impl<T: Float> core::ops::AddAssign<&$name<T>> for $name<T> {
      #[inline]
      fn add_assign(&mut self, rhs: &$name<T>) { self.absorb(*rhs) }
    }

    impl<T: Float> core::ops::SubAssign<$name<T>> for $name<T> {
      #[inline]
      fn sub_assign(&mut self, rhs: $name<T>) { self.absorb(-rhs) }
    }

    impl<T: Float> core::ops::SubAssign<&$name<T>> for $name<T> {
      #[inline]
      fn sub_assign(&mut self, rhs: &$name<T>) { self.absorb(-*rhs) }
    }

    crate::ops::mk_binary!{$name, Add, add, AddAssign, add_assign, T}
    crate::ops::mk_binary!{$name, Add, add, AddAssign, add_assign, &T}
    crate::ops::mk_binary!{$name, Add, add, AddAssign, add_assign, $name<T>}
    crate::ops::mk_binary!{$name, Add, add, AddAssign, add_assign, &$name<T>}
    crate::ops::mk_binary!{$name, Sub, sub, SubAssign, sub_assign, T}
    crate::ops::mk_binary!{$name, Sub, sub, SubAssign, sub_assign, &T}
    crate::ops::mk_binary!{$name, Sub, sub, SubAssign, sub_assign, $name<T>}
    crate::ops::mk_binary!{$name, Sub, sub, SubAssign, sub_assign, &$name<T>}

    impl<T: Float> Extend<T> for $name<T> {
      #[inline]
      fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
          self.accumulate(x)
        }
      }
    }

    impl<'a, T: Float> Extend<&'a T> for $name<T> {
      #[inline]
      fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for x in iter {
          self.accumulate(*x)
        }
      }
    }

    /// Starts from `-0`, like the `Sum` of plain floats, so that a sum of negative zeros (or of
    /// nothing) is `-0`.
    impl<T: Float> core::iter::FromIterator<T> for $name<T> {
      #[inline]
      fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sum = Self::new(-T::ZERO);
        sum.extend(iter);
        sum
      }
    }

    /// The compensated sum of an iterator of plain floats.
    impl<T: Float> core::iter::Sum<T> for $name<T> {
      #[inline]
      fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.collect()
      }
    }

    impl<'a, T: Float> core::iter::Sum<&'a T> for $name<T> {
      #[inline]
      fn sum<I: Iterator<Item = &'a T>>(iter: I) -> Self {
        let mut sum = Self::new(-T::ZERO);
        sum.extend(iter);
        sum
      }
    }

    /// The sum of an iterator of compensated values, each of which is added as with `+=`.
    impl<T: Float> core::iter::Sum<$name<T>> for $name<T> {
      #[inline]
      fn sum<I: Iterator<Item = $name<T>>>(iter: I) -> Self {
        iter.fold(Self::new(-T::ZERO), |mut sum, x| { sum.absorb(x); sum })
      }
    }

    impl<'a, T: Float> core::iter::Sum<&'a $name<T>> for $name<T> {
      #[inline]
      fn sum<I: Iterator<Item = &'a $name<T>>>(iter: I) -> Self {
        iter.fold(Self::new(-T::ZERO), |mut sum, x| { sum.absorb(*x); sum })
      }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantiating the suite of tests of the operators, common to both compensated types.
macro_rules! mk_tests {
  ($name:ident) => {
    mod ops {
      use super::*;
      use proptest::prelude::*;

      #[allow(dead_code)]
      fn ops() {
        let mut a = $name::<f64>::new(1.0);
        let b = $name::<f64>::new(-1.0);
        let x = 0.5_f64;
        let _ = a + b;
        let _ = &a + b;
        let _ = a + &b;
        let _ = &a + &b;
        let _ = a - b;
        let _ = &a - b;
        let _ = a - &b;
        let _ = &a - &b;
        let _ = a + x;
        let _ = &a + x;
        let _ = a + &x;
        let _ = &a + &x;
        let _ = a - x;
        let _ = &a - x;
        let _ = a - &x;
        let _ = &a - &x;
        let _ = -a;
        let _ = -&a;
        a += b;
        a += &b;
        a -= b;
        a -= &b;
        a += x;
        a += &x;
        a -= x;
        a -= &x;
        let _: $name<f64> = [x, x].iter().sum();
        let _: $name<f64> = [x, x].into_iter().sum();
        let _: $name<f64> = [a, b].iter().sum();
        let _: $name<f64> = [a, b].into_iter().sum();
        let _: $name<f64> = [x, x].into_iter().collect();
        a.extend([x, x]);
        a.extend(&[x, x]);
      }

      #[test]
      fn default_is_zero() {
        assert_eq!($name::<f32>::default().to_float(), 0.0);
        assert_eq!($name::<f64>::default().parts(), (0.0, 0.0));
      }

      /// Sums start from `-0`, as the `Sum` of plain floats does.
      #[test]
      fn sum_neg_zero() {
        let neg_zero = (-0.0_f64).to_bits();
        assert_eq!([-0.0_f64].iter().sum::<$name<f64>>().to_float().to_bits(), neg_zero);
        assert_eq!([-0.0_f64, -0.0].into_iter().sum::<$name<f64>>().to_float().to_bits(), neg_zero);
        assert_eq!(core::iter::empty::<f64>().collect::<$name<f64>>().to_float().to_bits(), neg_zero);
        let parts = [$name::<f64>::new(-0.0)];
        assert_eq!(parts.iter().sum::<$name<f64>>().to_float().to_bits(), neg_zero);
        assert_eq!([0.0_f64, -0.0].iter().sum::<$name<f64>>().to_float().to_bits(), 0.0_f64.to_bits());
        assert_eq!([-0.0_f32].iter().sum::<$name<f32>>().to_float().to_bits(), (-0.0_f32).to_bits());
      }

      #[test]
      fn neg_twice() {
        let x = $name::<f64>::from_parts(1.0, 1e-17);
        assert_eq!((-(-x)).parts(), x.parts());
      }

      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

        /// `a + x` is `a += x` on a copy, and leaves `a` untouched.
        #[test]
        fn add_is_copy_then_add_assign(
          xs in crate::test::cases_proptest::<f64>(),
          y in -1e3_f64 .. 1e3,
        ) {
          let a: $name<f64> = xs.iter().sum();
          let before = a.parts();
          let mut expected = a;
          expected += y;
          prop_assert_eq!((a + y).parts(), expected.parts());
          prop_assert_eq!((&a + &y).parts(), expected.parts());
          prop_assert_eq!(a.parts(), before);
        }

        #[test]
        fn sub_is_add_neg(
          xs in crate::test::cases_proptest::<f64>(),
          y in -1e3_f64 .. 1e3,
        ) {
          let a: $name<f64> = xs.iter().sum();
          prop_assert_eq!((a - y).parts(), (a + (-y)).parts());
          let b = $name::<f64>::from_parts(y, y * 1e-17);
          prop_assert_eq!((a - b).parts(), (a + (-b)).parts());
        }

        /// `sum`, `collect`, `extend`, and a `+=` loop all agree.
        #[test]
        fn sum_is_loop(xs in crate::test::cases_proptest::<f32>()) {
          let mut expected = $name::<f32>::default();
          for &x in &xs {
            expected += x;
          }
          let by_ref: $name<f32> = xs.iter().sum();
          let by_value: $name<f32> = xs.iter().copied().sum();
          let collected: $name<f32> = xs.iter().copied().collect();
          let mut extended = $name::<f32>::default();
          extended.extend(&xs);
          prop_assert_eq!(by_ref.parts(), expected.parts());
          prop_assert_eq!(by_value.parts(), expected.parts());
          prop_assert_eq!(collected.parts(), expected.parts());
          prop_assert_eq!(extended.parts(), expected.parts());
        }

        /// Summing compensated values is the same as adding them one by one with `+=`.
        #[test]
        fn sum_compensated_is_loop(xs in crate::test::cases_proptest::<f64>()) {
          let parts: Vec<$name<f64>> = xs.chunks(7).map(|c| c.iter().sum()).collect();
          let mut expected = $name::<f64>::default();
          for p in &parts {
            expected += p;
          }
          let sum: $name<f64> = parts.iter().sum();
          prop_assert_eq!(sum.parts(), expected.parts());
        }
      }
    }
  }
}

pub(crate) use mk_tests;
