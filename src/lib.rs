#![cfg_attr(not(test), no_std)]
//! This crate provides drop-in floating point types that perform *compensated summation*: every
//! value carries, alongside its running sum, a running correction term that captures the rounding
//! error of each addition, so that long sums accumulate (much) less error than with plain `f32` or
//! `f64` arithmetic.
//!
//! # Introduction
//!
//! Summing `n` floating point numbers one after the other can accumulate a rounding error that
//! grows with `n`. Compensated summation fixes most of this at the cost of a few extra flops per
//! addition, without resorting to arbitrary precision arithmetic. Two variants are provided:
//!
//!   - [`Kahan`]: the classical algorithm by W. Kahan (1965). The error bound no longer grows with
//!     `n`, but it still degrades when the running sum and the addends differ wildly in magnitude.
//!   - [`Neumaier`]: the Kahan–Babuška–Neumaier variant (Neumaier, 1974), which checks which of the
//!     two operands lost its low-order bits on each addition. This fixes cases like
//!     `1 + 1e100 + 1 - 1e100`, where plain and Kahan summation both return `0`.
//!
//! Both are generic over the underlying precision ([`f32`] or [`f64`], see the sealed [`Float`]
//! trait), and implement the full catalogue of floating point limits (see [`Limits`]), so they can
//! replace a plain float in generic numeric code.
//!
//! # Usage
//!
//! ```
//! use kahan::{kf32, nf64, Limits};
//!
//! // Accumulate with the usual operators.
//! let mut plain = 0_f32;
//! let mut sum = kf32::default();
//! for _ in 0 .. 1000 {
//!   plain += 0.1;
//!   sum += 0.1;
//! }
//! assert_ne!(plain, 100.0);
//! assert_eq!(sum.to_float(), 100.0);
//!
//! // Or collect an iterator.
//! let sum: nf64 = [1.0_f64, 1e100, 1.0, -1e100].into_iter().sum();
//! assert_eq!(f64::from(sum), 2.0);
//!
//! // Limits are forwarded from the underlying float.
//! assert_eq!(kf32::EPSILON.to_float(), f32::EPSILON);
//! ```
//!
//! # Special values
//!
//! Infinities and NaNs behave exactly as they would with the underlying float: `∞ + 1 = ∞`,
//! `∞ - ∞ = NaN`, and so on. The correction term is the only thing treated specially: whenever an
//! addition would leave it infinite or NaN, it is reset to zero, so that it can never contaminate
//! the value once that is meaningful again. The observable value is never touched.
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod underlying;
mod utl;

mod limits;
mod accumulator;

mod convert;
mod fmt;
mod ops;

mod kahan;
mod neumaier;

pub use underlying::Float;
pub use limits::{Limits, RoundStyle};
pub use accumulator::Accumulator;
pub use kahan::Kahan;
pub use neumaier::Neumaier;

/// 32-bit float with Kahan compensated summation.
#[allow(non_camel_case_types)]
pub type kf32 = Kahan<f32>;

/// 64-bit float with Kahan compensated summation.
#[allow(non_camel_case_types)]
pub type kf64 = Kahan<f64>;

/// 32-bit float with Kahan–Babuška–Neumaier compensated summation.
#[allow(non_camel_case_types)]
pub type nf32 = Neumaier<f32>;

/// 64-bit float with Kahan–Babuška–Neumaier compensated summation.
#[allow(non_camel_case_types)]
pub type nf64 = Neumaier<f64>;

/// Exact rational oracle for the tests.
#[cfg(test)]
mod rational;


#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x4_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
