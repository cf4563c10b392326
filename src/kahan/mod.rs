//! This module and its submodules contain [`Kahan`], a float that performs Kahan compensated
//! summation on every `+=` and `-=`.
//!
//! Some notation used in the comments:
//!
//!   - **s**: the running sum, [`Kahan::value`](Kahan::parts).
//!   - **c**: the pending correction, [`Kahan::correction`](Kahan::parts).
//!   - **x**: the addend.

use crate::Float;

/// A float of type `T` (`f32` or `f64`) that accumulates additions using Kahan compensated
/// summation.
///
/// Along with the running sum it stores the rounding error made by the last addition, which is
/// fed back into the next one. Reading the value (with [`to_float`](Kahan::to_float) or
/// [`From`]) returns the running sum alone.
///
/// Comparisons are deliberately *not* the same as for `T`:
///
///   - `==` is *structural*: two values are equal only if both the sum and the pending correction
///     are equal. For approximate equality, compare the [`to_float`](Kahan::to_float) values.
///   - `<`, `>`, etc. compare the running sums only, ignoring the pending corrections. As a
///     consequence, `partial_cmp` may return `Some(Equal)` for two values that are not `==`.
///
/// Examples:
///
/// ```
/// # use kahan::{Kahan, kf32};
/// let mut x = kf32::default();
/// for _ in 0 .. 30 {
///   x += 0.1;
/// }
/// assert_eq!(x.to_float(), 3.0);
///
/// // Also works with compensated operands, and the binary operators.
/// let y = Kahan::<f64>::new(1.0) + Kahan::new(2.0) - 0.5;
/// assert_eq!(f64::from(y), 2.5);
/// ```
#[derive(Clone, Copy, Default)]
#[derive(Debug)]
pub struct Kahan<T: Float> {
  value: T,
  correction: T,
}

/// Constructors, accessors, and conversion between precisions.
mod basics;

/// The Kahan summation step, and the operations built on it.
mod add;

/// Equality and ordering.
mod cmp;

crate::ops::mk_ops!{Kahan}
crate::convert::mk_convert!{Kahan}
crate::fmt::mk_fmt!{Kahan}
