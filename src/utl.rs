//! Miscellaneous small utilities, lifted from open source. See section for source and license.

//

// Source: https://gitlab.com/okannen/likely/-/blob/577e7ac62dbeddf573ba6b9f5ad46e185c1b8336/src/lib.rs
//
// Copyright 2021 Olivier Kannengieser
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

/// Brings [unlikely](core::intrinsics::unlikely) to stable rust.
///
/// Used on the correction guard, which only fires on infinite or NaN inputs.
#[inline(always)]
pub const fn unlikely(b: bool) -> bool {
  #[allow(clippy::needless_bool)]
  if (1i32).checked_div(if b { 0 } else { 1 }).is_none() {
    true
  } else {
    false
  }
}
