//! The catalogue of floating point limits (smallest and largest values, epsilon, infinities, NaNs,
//! digit counts, and properties of the format), for primitive and compensated floats alike.

use crate::{Float, Kahan, Neumaier};

/// How a floating point type rounds the results of its arithmetic operations.
#[derive(Clone, Copy, Debug)]
#[derive(Eq, PartialEq, Hash)]
pub enum RoundStyle {
  /// Rounding style cannot be determined.
  Indeterminate,
  /// Rounding toward zero (truncation).
  TowardZero,
  /// Rounding to the nearest representable value, ties to even.
  ToNearest,
  /// Rounding toward positive infinity.
  TowardInfinity,
  /// Rounding toward negative infinity.
  TowardNegInfinity,
}

/// The limits and properties of a floating point type.
///
/// Implemented for [`f32`] and [`f64`], and, by forwarding to them, for every [`Kahan`] and
/// [`Neumaier`] type: the numeric limits of a compensated float are those of its underlying float,
/// with a zero correction term. This lets generic numeric code ask for `T::EPSILON`, `T::MAX`,
/// etc. regardless of whether `T` is a plain or a compensated float.
///
/// ```
/// use kahan::{kf64, nf32, Limits};
///
/// assert_eq!(kf64::MAX.to_float(), f64::MAX);
/// assert_eq!(nf32::MANTISSA_DIGITS, 24);
/// assert!(kf64::NAN.to_float().is_nan());
/// assert!(<f32 as Limits>::IS_IEC559);
/// ```
pub trait Limits: Sized {
  /// Smallest positive *normal* value.
  const MIN_POSITIVE: Self;

  /// Largest finite value.
  const MAX: Self;

  /// Smallest (most negative) finite value, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  const MIN: Self;

  /// Machine epsilon: the difference between `1.0` and the next larger representable value.
  const EPSILON: Self;

  /// Maximum rounding error of a single operation, in ulps.
  const ROUND_ERROR: Self;

  /// Positive infinity (`∞`).
  const INFINITY: Self;

  /// Negative infinity (`-∞`).
  const NEG_INFINITY: Self;

  /// A quiet Not-a-Number.
  const NAN: Self;

  /// A signaling Not-a-Number.
  ///
  /// Note that arithmetic on a signaling NaN yields a quiet NaN.
  const SIGNALING_NAN: Self;

  /// Smallest positive *subnormal* value.
  const DENORM_MIN: Self;

  /// The base of the representation.
  const RADIX: u32;

  /// Number of significant digits in base [`Self::RADIX`], including the hidden bit.
  const MANTISSA_DIGITS: u32;

  /// Number of decimal digits that survive a decimal → float → decimal round-trip.
  const DIGITS: u32;

  /// Number of decimal digits needed to round-trip every value float → decimal → float.
  const MAX_DIGITS: u32;

  /// One greater than the smallest normal power of [`Self::RADIX`] exponent.
  const MIN_EXP: i32;

  /// One greater than the largest finite power of [`Self::RADIX`] exponent.
  const MAX_EXP: i32;

  /// Smallest `x` such that `10^x` is a normal value.
  const MIN_10_EXP: i32;

  /// Largest `x` such that `10^x` is a finite value.
  const MAX_10_EXP: i32;

  const IS_SIGNED: bool;
  const IS_INTEGER: bool;
  const IS_EXACT: bool;
  const HAS_INFINITY: bool;
  const HAS_QUIET_NAN: bool;
  const HAS_SIGNALING_NAN: bool;
  const HAS_DENORM: bool;

  /// Whether loss of accuracy is detected as denormalization loss rather than inexact result.
  const HAS_DENORM_LOSS: bool;

  /// Whether the type is an IEEE 754 (IEC 559) binary format.
  const IS_IEC559: bool;

  /// Whether the set of representable values is finite.
  const IS_BOUNDED: bool;

  /// Whether overflow wraps around instead of saturating to infinity.
  const IS_MODULO: bool;

  /// Whether arithmetic can trap.
  const TRAPS: bool;

  /// Whether tininess is detected before rounding.
  const TINYNESS_BEFORE: bool;

  const ROUND_STYLE: RoundStyle;
}

/// Implement [`Limits`] for a primitive float, given the bit patterns of its signaling NaN and its
/// `MAX_DIGITS`, which have no counterpart among the inherent constants.
macro_rules! impl_primitive {
  ($float:ty, $signaling_nan:expr, $max_digits:expr) => {
    impl Limits for $float {
      const MIN_POSITIVE: Self = <$float>::MIN_POSITIVE;
      const MAX: Self = <$float>::MAX;
      const MIN: Self = <$float>::MIN;
      const EPSILON: Self = <$float>::EPSILON;
      const ROUND_ERROR: Self = 0.5;
      const INFINITY: Self = <$float>::INFINITY;
      const NEG_INFINITY: Self = <$float>::NEG_INFINITY;
      const NAN: Self = <$float>::NAN;
      const SIGNALING_NAN: Self = <$float>::from_bits($signaling_nan);
      const DENORM_MIN: Self = <$float>::from_bits(1);

      const RADIX: u32 = <$float>::RADIX;
      const MANTISSA_DIGITS: u32 = <$float>::MANTISSA_DIGITS;
      const DIGITS: u32 = <$float>::DIGITS;
      const MAX_DIGITS: u32 = $max_digits;
      const MIN_EXP: i32 = <$float>::MIN_EXP;
      const MAX_EXP: i32 = <$float>::MAX_EXP;
      const MIN_10_EXP: i32 = <$float>::MIN_10_EXP;
      const MAX_10_EXP: i32 = <$float>::MAX_10_EXP;

      const IS_SIGNED: bool = true;
      const IS_INTEGER: bool = false;
      const IS_EXACT: bool = false;
      const HAS_INFINITY: bool = true;
      const HAS_QUIET_NAN: bool = true;
      const HAS_SIGNALING_NAN: bool = true;
      const HAS_DENORM: bool = true;
      const HAS_DENORM_LOSS: bool = false;
      const IS_IEC559: bool = true;
      const IS_BOUNDED: bool = true;
      const IS_MODULO: bool = false;
      const TRAPS: bool = false;
      const TINYNESS_BEFORE: bool = false;
      const ROUND_STYLE: RoundStyle = RoundStyle::ToNearest;
    }
  }
}

// Signaling NaN: exponent all ones, quiet bit (msb of the mantissa) clear, next bit set.
impl_primitive!{f32, 0x7fa0_0000, 9}
impl_primitive!{f64, 0x7ff4_0000_0000_0000, 17}

/// Implement [`Limits`] for a compensated type by forwarding every query to the underlying float
/// `T` and wrapping the values with a zero correction.
macro_rules! impl_compensated {
  ($name:ident) => {
    impl<T: Float> Limits for $name<T> {
      const MIN_POSITIVE: Self = Self::new(T::MIN_POSITIVE);
      const MAX: Self = Self::new(T::MAX);
      const MIN: Self = Self::new(T::MIN);
      const EPSILON: Self = Self::new(T::EPSILON);
      const ROUND_ERROR: Self = Self::new(T::ROUND_ERROR);
      const INFINITY: Self = Self::new(T::INFINITY);
      const NEG_INFINITY: Self = Self::new(T::NEG_INFINITY);
      const NAN: Self = Self::new(T::NAN);
      const SIGNALING_NAN: Self = Self::new(T::SIGNALING_NAN);
      const DENORM_MIN: Self = Self::new(T::DENORM_MIN);

      const RADIX: u32 = T::RADIX;
      const MANTISSA_DIGITS: u32 = T::MANTISSA_DIGITS;
      const DIGITS: u32 = T::DIGITS;
      const MAX_DIGITS: u32 = T::MAX_DIGITS;
      const MIN_EXP: i32 = T::MIN_EXP;
      const MAX_EXP: i32 = T::MAX_EXP;
      const MIN_10_EXP: i32 = T::MIN_10_EXP;
      const MAX_10_EXP: i32 = T::MAX_10_EXP;

      const IS_SIGNED: bool = T::IS_SIGNED;
      const IS_INTEGER: bool = T::IS_INTEGER;
      const IS_EXACT: bool = T::IS_EXACT;
      const HAS_INFINITY: bool = T::HAS_INFINITY;
      const HAS_QUIET_NAN: bool = T::HAS_QUIET_NAN;
      const HAS_SIGNALING_NAN: bool = T::HAS_SIGNALING_NAN;
      const HAS_DENORM: bool = T::HAS_DENORM;
      const HAS_DENORM_LOSS: bool = T::HAS_DENORM_LOSS;
      const IS_IEC559: bool = T::IS_IEC559;
      const IS_BOUNDED: bool = T::IS_BOUNDED;
      const IS_MODULO: bool = T::IS_MODULO;
      const TRAPS: bool = T::TRAPS;
      const TINYNESS_BEFORE: bool = T::TINYNESS_BEFORE;
      const ROUND_STYLE: RoundStyle = T::ROUND_STYLE;
    }
  }
}

impl_compensated!{Kahan}
impl_compensated!{Neumaier}

#[cfg(test)]
mod tests {
  use super::*;

  mod primitive {
    use super::*;

    #[test]
    fn f32_values() {
      assert_eq!(<f32 as Limits>::MIN_POSITIVE, 1.17549435e-38);
      assert_eq!(<f32 as Limits>::MAX, 3.40282347e+38);
      assert_eq!(<f32 as Limits>::MIN, -3.40282347e+38);
      assert_eq!(<f32 as Limits>::EPSILON, f32::from_bits(1.0_f32.to_bits() + 1) - 1.0);
      assert_eq!(<f32 as Limits>::DENORM_MIN, 1.4e-45);
      assert!(<f32 as Limits>::DENORM_MIN / 2.0 == 0.0);
    }

    #[test]
    fn f64_values() {
      assert_eq!(<f64 as Limits>::MIN_POSITIVE, 2.2250738585072014e-308);
      assert_eq!(<f64 as Limits>::MAX, 1.7976931348623157e+308);
      assert_eq!(<f64 as Limits>::MIN, -1.7976931348623157e+308);
      assert_eq!(<f64 as Limits>::EPSILON, f64::from_bits(1.0_f64.to_bits() + 1) - 1.0);
      assert_eq!(<f64 as Limits>::DENORM_MIN, 5e-324);
      assert!(<f64 as Limits>::DENORM_MIN / 2.0 == 0.0);
    }

    #[test]
    fn digits() {
      assert_eq!(<f32 as Limits>::MANTISSA_DIGITS, 24);
      assert_eq!(<f32 as Limits>::DIGITS, 6);
      assert_eq!(<f32 as Limits>::MAX_DIGITS, 9);
      assert_eq!(<f64 as Limits>::MANTISSA_DIGITS, 53);
      assert_eq!(<f64 as Limits>::DIGITS, 15);
      assert_eq!(<f64 as Limits>::MAX_DIGITS, 17);
    }

    #[test]
    fn exponents() {
      assert_eq!((<f32 as Limits>::MIN_EXP, <f32 as Limits>::MAX_EXP), (-125, 128));
      assert_eq!((<f32 as Limits>::MIN_10_EXP, <f32 as Limits>::MAX_10_EXP), (-37, 38));
      assert_eq!((<f64 as Limits>::MIN_EXP, <f64 as Limits>::MAX_EXP), (-1021, 1024));
      assert_eq!((<f64 as Limits>::MIN_10_EXP, <f64 as Limits>::MAX_10_EXP), (-307, 308));
    }

    /// `MAX_DIGITS` decimal digits must round-trip the values hardest to print.
    #[test]
    fn max_digits_round_trip() {
      for x in [0.1_f64, 1.0 / 3.0, f64::MAX, f64::MIN_POSITIVE, 2.0_f64.sqrt()] {
        let s = format!("{:.*e}", <f64 as Limits>::MAX_DIGITS as usize - 1, x);
        assert_eq!(s.parse::<f64>().unwrap(), x);
      }
      for x in [0.1_f32, 1.0 / 3.0, f32::MAX, f32::MIN_POSITIVE, 2.0_f32.sqrt()] {
        let s = format!("{:.*e}", <f32 as Limits>::MAX_DIGITS as usize - 1, x);
        assert_eq!(s.parse::<f32>().unwrap(), x);
      }
    }

    #[test]
    fn nans() {
      assert!(<f32 as Limits>::NAN.is_nan());
      assert!(<f64 as Limits>::NAN.is_nan());
      assert!(<f32 as Limits>::SIGNALING_NAN.is_nan());
      assert!(<f64 as Limits>::SIGNALING_NAN.is_nan());
      // The quiet bit is the most significant bit of the mantissa.
      assert_eq!(<f32 as Limits>::NAN.to_bits() & (1 << 22), 1 << 22);
      assert_eq!(<f32 as Limits>::SIGNALING_NAN.to_bits() & (1 << 22), 0);
      assert_eq!(<f64 as Limits>::NAN.to_bits() & (1 << 51), 1 << 51);
      assert_eq!(<f64 as Limits>::SIGNALING_NAN.to_bits() & (1 << 51), 0);
    }

    #[test]
    fn infinities() {
      assert_eq!(<f32 as Limits>::INFINITY, f32::INFINITY);
      assert_eq!(<f32 as Limits>::NEG_INFINITY, -f32::INFINITY);
      assert!(<f64 as Limits>::MAX < <f64 as Limits>::INFINITY);
      assert!(<f64 as Limits>::NEG_INFINITY < <f64 as Limits>::MIN);
    }
  }

  mod compensated {
    use super::*;

    macro_rules! make_tests {
      ($name:ident, $float:ty) => {
        use super::*;

        type C = $name<$float>;

        fn parts(x: C) -> ($float, $float) { x.parts() }

        #[test]
        fn values() {
          assert_eq!(parts(C::MIN_POSITIVE), (<$float as Limits>::MIN_POSITIVE, 0.0));
          assert_eq!(parts(C::MAX), (<$float as Limits>::MAX, 0.0));
          assert_eq!(parts(C::MIN), (<$float as Limits>::MIN, 0.0));
          assert_eq!(parts(C::EPSILON), (<$float as Limits>::EPSILON, 0.0));
          assert_eq!(parts(C::ROUND_ERROR), (0.5, 0.0));
          assert_eq!(parts(C::DENORM_MIN), (<$float as Limits>::DENORM_MIN, 0.0));
          assert_eq!(parts(C::INFINITY), (<$float>::INFINITY, 0.0));
          assert_eq!(parts(C::NEG_INFINITY), (<$float>::NEG_INFINITY, 0.0));
        }

        #[test]
        fn nans() {
          assert!(C::NAN.to_float().is_nan());
          assert_eq!(C::NAN.parts().1, 0.0);
          assert_eq!(
            C::SIGNALING_NAN.parts().0.to_bits(),
            <$float as Limits>::SIGNALING_NAN.to_bits(),
          );
        }

        #[test]
        fn integers() {
          assert_eq!(C::RADIX, 2);
          assert_eq!(C::MANTISSA_DIGITS, <$float>::MANTISSA_DIGITS);
          assert_eq!(C::DIGITS, <$float>::DIGITS);
          assert_eq!(C::MAX_DIGITS, <$float as Limits>::MAX_DIGITS);
          assert_eq!(C::MIN_EXP, <$float>::MIN_EXP);
          assert_eq!(C::MAX_EXP, <$float>::MAX_EXP);
          assert_eq!(C::MIN_10_EXP, <$float>::MIN_10_EXP);
          assert_eq!(C::MAX_10_EXP, <$float>::MAX_10_EXP);
        }

        #[test]
        fn flags() {
          assert!(C::IS_SIGNED);
          assert!(!C::IS_INTEGER);
          assert!(!C::IS_EXACT);
          assert!(C::HAS_INFINITY);
          assert!(C::HAS_QUIET_NAN);
          assert!(C::HAS_SIGNALING_NAN);
          assert!(C::HAS_DENORM);
          assert!(!C::HAS_DENORM_LOSS);
          assert!(C::IS_IEC559);
          assert!(C::IS_BOUNDED);
          assert!(!C::IS_MODULO);
          assert!(!C::TRAPS);
          assert!(!C::TINYNESS_BEFORE);
          assert_eq!(C::ROUND_STYLE, RoundStyle::ToNearest);
        }

        /// Epsilon is the gap above one, for the compensated type as well.
        #[test]
        fn epsilon_gap() {
          let mut x = C::new(1.0);
          x += C::EPSILON;
          assert!(x.to_float() > 1.0);
          assert_eq!(x.to_float() - 1.0, <$float as Limits>::EPSILON);
        }
      };
    }

    mod kf32 { make_tests!{Kahan, f32} }
    mod kf64 { make_tests!{Kahan, f64} }
    mod nf32 { make_tests!{Neumaier, f32} }
    mod nf64 { make_tests!{Neumaier, f64} }
  }
}
