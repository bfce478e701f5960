// ---------------------------------------------------------------------------
// Byte-level lane shuffles with SIMD dispatch.
//
// A LanePermutation plus the source and destination byte orders compile to a
// 4-entry ShuffleTable: output byte j of every pixel is input byte table[j].
// That table is broadcast into a pshufb / tbl / swizzle mask, so every tier
// runs the same single-instruction shuffle per vector.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers dispatch via incant! — contiguous (single call)
// and strided (loop over rows, single dispatch).
// ---------------------------------------------------------------------------

#![allow(clippy::too_many_arguments)]

use crate::{ByteOrder, Channel, LanePermutation, SizeError};
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


// ===========================================================================
// Shuffle table
// ===========================================================================

const LANES: [Channel; 4] = [
    Channel::Bits24,
    Channel::Bits16,
    Channel::Bits8,
    Channel::Bits0,
];

/// Per-pixel byte gather: output byte `j` takes input byte `self.0[j]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ShuffleTable([u8; 4]);

impl ShuffleTable {
    pub(crate) const fn new(perm: LanePermutation, src: ByteOrder, dst: ByteOrder) -> Self {
        let channels = perm.channels();
        let mut table = [0u8; 4];
        let mut k = 0;
        while k < 4 {
            table[dst.byte_offset(LANES[k])] = src.byte_offset(channels[k]) as u8;
            k += 1;
        }
        Self(table)
    }

    #[inline(always)]
    pub(crate) const fn indices(self) -> [usize; 4] {
        let [a, b, c, d] = self.0;
        [a as usize, b as usize, c as usize, d as usize]
    }

    /// Mask for 16-byte shuffles (4 pixels).
    #[inline]
    pub(crate) fn mask16(self) -> [u8; 16] {
        let mut m = [0u8; 16];
        for (i, b) in m.iter_mut().enumerate() {
            *b = (i & !3) as u8 + self.0[i & 3];
        }
        m
    }

    /// Mask for 32-byte shuffles. `vpshufb` indexes within each 128-bit half,
    /// so the 16-byte mask is repeated.
    #[cfg(target_arch = "x86_64")]
    #[inline]
    pub(crate) fn mask32(self) -> [u8; 32] {
        let half = self.mask16();
        let mut m = [0u8; 32];
        m[..16].copy_from_slice(&half);
        m[16..].copy_from_slice(&half);
        m
    }
}

/// Scalar gather for the pixels left over after the vector loop.
#[inline(always)]
fn shuffle_tail(table: ShuffleTable, src: &[u8], dst: &mut [u8]) {
    let [i0, i1, i2, i3] = table.indices();
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[i0];
        d[1] = s[i1];
        d[2] = s[i2];
        d[3] = s[i3];
    }
}

#[inline(always)]
fn shuffle_tail_inplace(table: ShuffleTable, buf: &mut [u8]) {
    let [i0, i1, i2, i3] = table.indices();
    for px in buf.chunks_exact_mut(4) {
        let s = [px[0], px[1], px[2], px[3]];
        px[0] = s[i0];
        px[1] = s[i1];
        px[2] = s[i2];
        px[3] = s[i3];
    }
}

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize) -> Result<(), SizeError> {
    if !len.is_multiple_of(4) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_copy(src_len: usize, dst_len: usize) -> Result<(), SizeError> {
    if !src_len.is_multiple_of(4) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < src_len {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
fn check_strided(len: usize, width: usize, height: usize, stride: usize) -> Result<(), SizeError> {
    let row_bytes = width.checked_mul(4).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Dispatching entry points
// ===========================================================================

/// Shuffle every pixel of `src` into the front of `dst`.
pub(crate) fn shuffle_copy(table: ShuffleTable, src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len())?;
    let dst = &mut dst[..src.len()];
    incant!(shuffle_copy_impl(table, src, dst), [v3, neon, wasm128, scalar]);
    Ok(())
}

/// Shuffle every pixel of `buf` in place.
pub(crate) fn shuffle_inplace(table: ShuffleTable, buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    incant!(shuffle_inplace_impl(table, buf), [v3, neon, wasm128, scalar]);
    Ok(())
}

/// Shuffle a `width × height` pixel window between strided buffers.
///
/// Zero width or height is a no-op. Padding bytes between rows are never
/// read or written.
pub(crate) fn shuffle_strided(
    table: ShuffleTable,
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    check_strided(src.len(), width, height, src_stride)?;
    check_strided(dst.len(), width, height, dst_stride)?;
    incant!(
        shuffle_strided(table, src, dst, width, height, src_stride, dst_stride),
        [v3, neon, wasm128, scalar]
    );
    Ok(())
}
