use core::arch::wasm32::i8x16_swizzle;

use archmage::prelude::*;
use safe_unaligned_simd::wasm32::{v128_load, v128_store};

use super::{ShuffleTable, shuffle_tail, shuffle_tail_inplace};

// ===========================================================================
// WASM SIMD128 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn shuffle_row_wasm128(_token: Wasm128Token, table: ShuffleTable, src: &[u8], dst: &mut [u8]) {
    let mask_bytes = table.mask16();
    let mask = v128_load(&mask_bytes);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = v128_load(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        v128_store(d, i8x16_swizzle(v, mask));
        i += 16;
    }
    shuffle_tail(table, &src[i..n], &mut dst[i..n]);
}

#[rite]
pub(super) fn shuffle_row_inplace_wasm128(_token: Wasm128Token, table: ShuffleTable, row: &mut [u8]) {
    let mask_bytes = table.mask16();
    let mask = v128_load(&mask_bytes);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = v128_load(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        v128_store(out, i8x16_swizzle(v, mask));
        i += 16;
    }
    shuffle_tail_inplace(table, &mut row[i..]);
}

// ===========================================================================
// WASM arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn shuffle_copy_impl_wasm128(t: Wasm128Token, table: ShuffleTable, s: &[u8], d: &mut [u8]) {
    shuffle_row_wasm128(t, table, s, d);
}
#[arcane]
pub(super) fn shuffle_inplace_impl_wasm128(t: Wasm128Token, table: ShuffleTable, b: &mut [u8]) {
    shuffle_row_inplace_wasm128(t, table, b);
}

// ===========================================================================
// WASM arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn shuffle_strided_wasm128(
    t: Wasm128Token,
    table: ShuffleTable,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
) {
    for y in 0..h {
        shuffle_row_wasm128(t, table, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4]);
    }
}
