use archmage::prelude::*;

use super::{ShuffleTable, shuffle_tail, shuffle_tail_inplace};

// ===========================================================================
// ARM NEON — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn shuffle_row_arm_v2(_token: Arm64V2Token, table: ShuffleTable, src: &[u8], dst: &mut [u8]) {
    use core::arch::aarch64::vqtbl1q_u8;
    let mask_bytes = table.mask16();
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&mask_bytes);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(s);
        let shuffled = vqtbl1q_u8(v, mask);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(d, shuffled);
        i += 16;
    }
    shuffle_tail(table, &src[i..n], &mut dst[i..n]);
}

#[rite]
pub(super) fn shuffle_row_inplace_arm_v2(_token: Arm64V2Token, table: ShuffleTable, row: &mut [u8]) {
    use core::arch::aarch64::vqtbl1q_u8;
    let mask_bytes = table.mask16();
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&mask_bytes);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(arr);
        let shuffled = vqtbl1q_u8(v, mask);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(out, shuffled);
        i += 16;
    }
    shuffle_tail_inplace(table, &mut row[i..]);
}

// ===========================================================================
// ARM arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn shuffle_copy_impl_arm_v2(t: Arm64V2Token, table: ShuffleTable, s: &[u8], d: &mut [u8]) {
    shuffle_row_arm_v2(t, table, s, d);
}
#[arcane]
pub(super) fn shuffle_inplace_impl_arm_v2(t: Arm64V2Token, table: ShuffleTable, b: &mut [u8]) {
    shuffle_row_inplace_arm_v2(t, table, b);
}

// ===========================================================================
// ARM arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn shuffle_strided_arm_v2(
    t: Arm64V2Token,
    table: ShuffleTable,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        shuffle_row_arm_v2(t, table, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4]);
    }
}
