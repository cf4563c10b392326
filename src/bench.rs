//! Monomorphic exports of the summation steps; available with feature = "bench".

use crate::{kf32, kf64, nf32, nf64};

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn kahan_add_f32(sum: &mut kf32, x: f32) {
  *sum += x
}

#[unsafe(no_mangle)]
pub fn kahan_add_f64(sum: &mut kf64, x: f64) {
  *sum += x
}

#[unsafe(no_mangle)]
pub fn neumaier_add_f32(sum: &mut nf32, x: f32) {
  *sum += x
}

#[unsafe(no_mangle)]
pub fn neumaier_add_f64(sum: &mut nf64, x: f64) {
  *sum += x
}

//

#[unsafe(no_mangle)]
pub fn kahan_merge_f64(sum: &mut kf64, other: kf64) {
  *sum += other
}

#[unsafe(no_mangle)]
pub fn neumaier_merge_f64(sum: &mut nf64, other: nf64) {
  *sum += other
}

#[unsafe(no_mangle)]
pub fn neumaier_to_float_f64(x: nf64) -> f64 {
  x.to_float()
}

//

#[unsafe(no_mangle)]
pub fn kahan_sum_f32(xs: &[f32]) -> f32 {
  xs.iter().sum::<kf32>().to_float()
}

#[unsafe(no_mangle)]
pub fn kahan_sum_f64(xs: &[f64]) -> f64 {
  xs.iter().sum::<kf64>().to_float()
}

#[unsafe(no_mangle)]
pub fn neumaier_sum_f32(xs: &[f32]) -> f32 {
  xs.iter().sum::<nf32>().to_float()
}

#[unsafe(no_mangle)]
pub fn neumaier_sum_f64(xs: &[f64]) -> f64 {
  xs.iter().sum::<nf64>().to_float()
}
