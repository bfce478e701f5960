// ---------------------------------------------------------------------------
// Public swizzle API.
//
// `&[u32]` functions treat each element as a pixel value and store results
// in native order. `&[u8]` functions take the storage byte order explicitly.
// Everything funnels into the shuffle kernels in `bytes`.
// ---------------------------------------------------------------------------

use alloc::vec;
use alloc::vec::Vec;

use crate::bytes::{self, ShuffleTable};
use crate::{ByteOrder, LanePermutation, SizeError};

// ===========================================================================
// Pixel values
// ===========================================================================

/// Swizzle every pixel value of `buffer` into a freshly allocated buffer.
///
/// Output pixel `i` is `perm.apply(buffer[i])`. The input is left untouched
/// and the output always has the same length, including zero.
///
/// ```rust
/// use lanemix::{LanePermutation, swizzle};
///
/// let out = swizzle(&[0x11223344, 0xAABBCCDD], LanePermutation::ARGB_TO_RGBA);
/// assert_eq!(out, [0x22334411, 0xBBCCDDAA]);
/// ```
pub fn swizzle(buffer: &[u32], perm: LanePermutation) -> Vec<u32> {
    let mut out = vec![0u32; buffer.len()];
    let table = ShuffleTable::new(perm, ByteOrder::NATIVE, ByteOrder::NATIVE);
    bytes::shuffle_copy(
        table,
        bytemuck::cast_slice(buffer),
        bytemuck::cast_slice_mut(&mut out),
    )
    .expect("u32 slices are always pixel aligned");
    out
}

/// Swizzle every pixel value of `buffer` in place.
pub fn swizzle_inplace(buffer: &mut [u32], perm: LanePermutation) {
    let table = ShuffleTable::new(perm, ByteOrder::NATIVE, ByteOrder::NATIVE);
    bytes::shuffle_inplace(table, bytemuck::cast_slice_mut(buffer))
        .expect("u32 slices are always pixel aligned");
}

/// Packed ARGB values → packed RGBA values.
pub fn argb_to_rgba(buffer: &[u32]) -> Vec<u32> {
    swizzle(buffer, LanePermutation::ARGB_TO_RGBA)
}

/// Packed RGBA values → packed ARGB values.
pub fn rgba_to_argb(buffer: &[u32]) -> Vec<u32> {
    swizzle(buffer, LanePermutation::RGBA_TO_ARGB)
}

// ===========================================================================
// Byte storage
// ===========================================================================

/// Swizzle 4-byte pixels stored in `order` into a new buffer of the same
/// order and length.
///
/// ```rust
/// use lanemix::{ByteOrder, LanePermutation, swizzle_bytes};
///
/// let out = swizzle_bytes(
///     &[0x11, 0x22, 0x33, 0x44],
///     ByteOrder::BigEndian,
///     LanePermutation::ARGB_TO_RGBA,
/// )
/// .unwrap();
/// assert_eq!(out, [0x22, 0x33, 0x44, 0x11]);
/// ```
pub fn swizzle_bytes(
    src: &[u8],
    order: ByteOrder,
    perm: LanePermutation,
) -> Result<Vec<u8>, SizeError> {
    let mut out = vec![0u8; src.len()];
    swizzle_bytes_into(src, &mut out, order, order, perm)?;
    Ok(out)
}

/// ARGB pixels → RGBA pixels, both stored in `order`.
pub fn argb_to_rgba_bytes(src: &[u8], order: ByteOrder) -> Result<Vec<u8>, SizeError> {
    swizzle_bytes(src, order, LanePermutation::ARGB_TO_RGBA)
}

/// RGBA pixels → ARGB pixels, both stored in `order`.
pub fn rgba_to_argb_bytes(src: &[u8], order: ByteOrder) -> Result<Vec<u8>, SizeError> {
    swizzle_bytes(src, order, LanePermutation::RGBA_TO_ARGB)
}

/// Swizzle `src` (pixels stored in `src_order`) into the front of `dst`
/// (pixels stored in `dst_order`).
///
/// `dst` may be longer than `src`; bytes past `src.len()` are not touched.
pub fn swizzle_bytes_into(
    src: &[u8],
    dst: &mut [u8],
    src_order: ByteOrder,
    dst_order: ByteOrder,
    perm: LanePermutation,
) -> Result<(), SizeError> {
    bytes::shuffle_copy(ShuffleTable::new(perm, src_order, dst_order), src, dst)
}

/// Swizzle 4-byte pixels stored in `order` in place.
pub fn swizzle_bytes_inplace(
    buf: &mut [u8],
    order: ByteOrder,
    perm: LanePermutation,
) -> Result<(), SizeError> {
    bytes::shuffle_inplace(ShuffleTable::new(perm, order, order), buf)
}

/// Swizzle a `width × height` image between strided byte buffers.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start of
/// consecutive rows and must be ≥ `width × 4`. Padding bytes between rows are
/// never read or written. A zero `width` or `height` does nothing.
#[allow(clippy::too_many_arguments)]
pub fn swizzle_bytes_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
    src_order: ByteOrder,
    dst_order: ByteOrder,
    perm: LanePermutation,
) -> Result<(), SizeError> {
    bytes::shuffle_strided(
        ShuffleTable::new(perm, src_order, dst_order),
        src,
        dst,
        width,
        height,
        src_stride,
        dst_stride,
    )
}
