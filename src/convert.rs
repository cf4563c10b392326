//! Conversions between plain floats and compensated values, and between precisions.
//!
//! A plain float converts into a compensated value with [`From`] (the correction starts at zero).
//! The other direction is explicit only: either `to_float()`, or `f32::from`/`f64::from`, which
//! are implemented for the concrete precisions. There is no generic `impl From<Kahan<T>> for T`
//! (the orphan rules forbid it), and no implicit conversion at all.
//!
//! Between precisions, widening `f32` → `f64` is a [`From`] impl; any conversion, including
//! narrowing, is available through the `convert` method. A generic `From<Kahan<T>> for Kahan<U>`
//! would conflict with the blanket `From<T> for T`.

/// Helper macro for implementing the conversions of a compensated type.
macro_rules! mk_convert {
  ($name:ident) => {
    impl<T: Float> From<T> for $name<T> {
      #[inline]
      fn from(value: T) -> Self {
        Self::new(value)
      }
    }

    impl From<$name<f32>> for f32 {
      #[inline]
      fn from(value: $name<f32>) -> Self {
        value.to_float()
      }
    }

    impl From<$name<f64>> for f64 {
      #[inline]
      fn from(value: $name<f64>) -> Self {
        value.to_float()
      }
    }

    /// Promote to double precision. The pending correction is not carried over.
    impl From<$name<f32>> for $name<f64> {
      #[inline]
      fn from(value: $name<f32>) -> Self {
        value.convert()
      }
    }
  }
}

pub(crate) use mk_convert;
