use archmage::prelude::*;
use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

use super::{ShuffleTable, shuffle_tail, shuffle_tail_inplace};

// ===========================================================================
// x86-64 AVX2 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn shuffle_row_v3(_token: X64V3Token, table: ShuffleTable, src: &[u8], dst: &mut [u8]) {
    let mask_bytes = table.mask32();
    let mask = _mm256_loadu_si256(&mask_bytes);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let shuffled = _mm256_shuffle_epi8(v, mask);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, shuffled);
        i += 32;
    }
    shuffle_tail(table, &src[i..n], &mut dst[i..n]);
}

#[rite]
pub(super) fn shuffle_row_inplace_v3(_token: X64V3Token, table: ShuffleTable, row: &mut [u8]) {
    let mask_bytes = table.mask32();
    let mask = _mm256_loadu_si256(&mask_bytes);
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let shuffled = _mm256_shuffle_epi8(v, mask);
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, shuffled);
        i += 32;
    }
    shuffle_tail_inplace(table, &mut row[i..]);
}

// ===========================================================================
// x86-64 arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn shuffle_copy_impl_v3(t: X64V3Token, table: ShuffleTable, s: &[u8], d: &mut [u8]) {
    shuffle_row_v3(t, table, s, d);
}
#[arcane]
pub(super) fn shuffle_inplace_impl_v3(t: X64V3Token, table: ShuffleTable, b: &mut [u8]) {
    shuffle_row_inplace_v3(t, table, b);
}

// ===========================================================================
// x86-64 arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn shuffle_strided_v3(
    t: X64V3Token,
    table: ShuffleTable,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        shuffle_row_v3(t, table, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4]);
    }
}
