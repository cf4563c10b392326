//! Exact arithmetic on the values of floats, used as the oracle against which the compensated sums
//! are checked.

use crate::Float;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::Abs;

/// Convert a **finite** float into the [Rational] with exactly the same value. Panics on
/// infinities and NaN.
pub fn rational<T: Float>(x: T) -> Rational {
  match Rational::try_from(x.as_f64()) {
    Ok(r) => r,
    Err(_) => panic!("Should not pass {x} to rational"),
  }
}

/// The absolute value of a [Rational].
pub fn abs(x: &Rational) -> Rational {
  x.clone().abs()
}

/// The exact sum `Σxᵢ` of `xs`, and the exact sum of magnitudes `Σ|xᵢ|`.
pub fn exact_sum<T: Float>(xs: &[T]) -> (Rational, Rational) {
  xs.iter().fold(
    (Rational::from(0), Rational::from(0)),
    |(sum, sum_abs), &x| {
      let x = rational(x);
      let x_abs = abs(&x);
      (sum + x, sum_abs + x_abs)
    },
  )
}

/// The absolute error `|x - exact|` of the float `x`.
pub fn error<T: Float>(x: T, exact: &Rational) -> Rational {
  (rational(x) - exact).abs()
}

/// The machine epsilon of `T`, as a [Rational].
pub fn epsilon<T: Float>() -> Rational {
  rational(T::EPSILON)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exact() {
    assert_eq!(rational(0.5_f32), Rational::from_signeds(1, 2));
    assert_eq!(rational(-3.0_f64), Rational::from(-3));
    // 0.1 is not representable, and the rational is the exact value of the nearest float.
    assert_ne!(rational(0.1_f64), Rational::from_signeds(1, 10));
    assert_ne!(rational(0.1_f32), rational(0.1_f64));
  }

  #[test]
  fn sums() {
    let (sum, sum_abs) = exact_sum(&[1.0_f64, 1e100, 1.0, -1e100]);
    assert_eq!(sum, Rational::from(2));
    assert_eq!(sum_abs, rational(2e100) + Rational::from(2));
    assert_eq!(error(0.0_f64, &sum), Rational::from(2));
    assert_eq!(error(3.0_f64, &sum), Rational::from(1));
  }

  #[test]
  fn epsilons() {
    assert_eq!(epsilon::<f32>(), Rational::from_signeds(1, 1 << 23));
    assert_eq!(epsilon::<f64>(), Rational::from_signeds(1, 1_i64 << 52));
  }

  #[test]
  #[should_panic]
  fn nan() {
    rational(f64::NAN);
  }
}
