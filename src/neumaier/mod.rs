//! This module and its submodules contain [`Neumaier`], a float that performs
//! Kahan–Babuška–Neumaier compensated summation on every `+=` and `-=`.
//!
//! Some notation used in the comments:
//!
//!   - **s**: the running sum, [`Neumaier::value`](Neumaier::parts).
//!   - **c**: the accumulated correction, [`Neumaier::correction`](Neumaier::parts).
//!   - **x**: the addend.

use crate::Float;

/// A float of type `T` (`f32` or `f64`) that accumulates additions using the Kahan–Babuška–Neumaier
/// variant of compensated summation.
///
/// Unlike [`Kahan`](crate::Kahan), the correction is not fed back into each addition; instead the
/// rounding errors of all additions are summed on the side, and only added to the running sum when
/// the value is read. At each step, the lost low-order bits are recovered from whichever of `s`
/// and `x` is smaller in magnitude, which makes this robust to addends larger than the running
/// sum.
///
/// The *effective value* of a `Neumaier` is `s + c`. It is what [`to_float`](Neumaier::to_float)
/// and [`From`] return, what is displayed, and what all comparisons (`==` included) look at. Two
/// values that split the same effective value differently between `s` and `c` are thus equal.
///
/// Examples:
///
/// ```
/// # use kahan::{Neumaier, nf64};
/// let mut x = nf64::new(1.0);
/// x += 1e100;
/// x += 1.0;
/// x -= 1e100;
/// assert_eq!(x.to_float(), 2.0);
/// assert_eq!(x, 2.0);
///
/// let y: Neumaier<f32> = [0.1_f32; 10].into_iter().sum();
/// assert_eq!(y, 1.0);
/// ```
#[derive(Clone, Copy, Default)]
#[derive(Debug)]
pub struct Neumaier<T: Float> {
  value: T,
  correction: T,
}

/// Constructors, accessors, and conversion between precisions.
mod basics;

/// The Neumaier summation step, and the operations built on it.
mod add;

/// Equality and ordering, on the effective value.
mod cmp;

crate::ops::mk_ops!{Neumaier}
crate::convert::mk_convert!{Neumaier}
crate::fmt::mk_fmt!{Neumaier}
