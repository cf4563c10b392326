//! Text rendering and parsing of compensated values.
//!
//! A compensated value renders exactly as its value (as per `to_float`) would, with all formatter
//! flags (width, precision, sign, ...) forwarded. `Debug` is derived and shows both fields.

/// Helper macro for implementing `Display`, `LowerExp`, `UpperExp`, and `FromStr`.
macro_rules! mk_fmt {
  ($name:ident) => {
    impl<T: Float> core::fmt::Display for $name<T> {
      #[inline]
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.to_float(), f)
      }
    }

    impl<T: Float> core::fmt::LowerExp for $name<T> {
      #[inline]
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerExp::fmt(&self.to_float(), f)
      }
    }

    impl<T: Float> core::fmt::UpperExp for $name<T> {
      #[inline]
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::UpperExp::fmt(&self.to_float(), f)
      }
    }

    /// Parses a plain float, exactly as `T` does, with no pending correction.
    impl<T: Float> core::str::FromStr for $name<T> {
      type Err = core::num::ParseFloatError;

      #[inline]
      fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<T>().map(Self::new)
      }
    }
  }
}

pub(crate) use mk_fmt;
