//! Whole-image swizzles using [`imgref`] types.
//!
//! These functions honor the source stride, produce tightly packed
//! [`ImgVec`] results, and run the SIMD-optimized core shuffle row by row.
//!
//! ```rust
//! use imgref::ImgVec;
//! use lanemix::{LanePermutation, img};
//!
//! let argb = ImgVec::new(vec![0x11223344u32; 100], 10, 10);
//! let rgba = img::swizzle_img(argb.as_ref(), LanePermutation::ARGB_TO_RGBA);
//! assert_eq!(rgba.buf()[0], 0x22334411);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};
use rgb::Rgba;

use crate::LanePermutation;

// ---------------------------------------------------------------------------
// Packed u32 images
// ---------------------------------------------------------------------------

/// Swizzle every pixel of `img` into a new, tightly packed image.
pub fn swizzle_img(img: ImgRef<'_, u32>, perm: LanePermutation) -> ImgVec<u32> {
    let w = img.width();
    let h = img.height();
    let mut dst = ImgVec::new(vec![0u32; w * h], w, h);
    for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
        dst_row.copy_from_slice(src_row);
        crate::swizzle_inplace(dst_row, perm);
    }
    dst
}

/// Swizzle an owned image in place, keeping its stride.
///
/// Padding between rows is left as it was.
pub fn swizzle_img_inplace(mut img: ImgVec<u32>, perm: LanePermutation) -> ImgVec<u32> {
    for row in img.rows_mut() {
        crate::swizzle_inplace(row, perm);
    }
    img
}

// ---------------------------------------------------------------------------
// Packed ARGB ↔ Rgba<u8>
// ---------------------------------------------------------------------------

/// Convert an image of packed ARGB values to `ImgVec<Rgba<u8>>`.
pub fn argb_to_rgba_img(img: ImgRef<'_, u32>) -> ImgVec<Rgba<u8>> {
    let w = img.width();
    let h = img.height();
    let buf: Vec<Rgba<u8>> = vec![Rgba::new(0, 0, 0, 0); w * h];
    let mut dst = ImgVec::new(buf, w, h);
    for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
        crate::typed_rgb::argb_to_rgba_buf(src_row, dst_row).expect("rows have equal width");
    }
    dst
}

/// Convert `ImgRef<Rgba<u8>>` to an image of packed ARGB values.
pub fn rgba_to_argb_img(img: ImgRef<'_, Rgba<u8>>) -> ImgVec<u32> {
    let w = img.width();
    let h = img.height();
    let mut dst = ImgVec::new(vec![0u32; w * h], w, h);
    for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
        crate::typed_rgb::rgba_to_argb_buf(src_row, dst_row).expect("rows have equal width");
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swizzle_img_honors_stride() {
        // 2×2 image with one padding pixel per row.
        let buf = vec![0x11223344u32, 0xAABBCCDD, 0xDEAD_BEEF, 0x01020304, 0x05060708, 0xDEAD_BEEF];
        let src = ImgRef::new_stride(&buf[..], 2, 2, 3);
        let out = swizzle_img(src, LanePermutation::ARGB_TO_RGBA);
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 2);
        assert_eq!(out.stride(), 2);
        assert_eq!(
            out.buf().as_slice(),
            &[0x22334411, 0xBBCCDDAA, 0x02030401, 0x06070805]
        );
    }

    #[test]
    fn test_swizzle_img_inplace_keeps_padding() {
        let buf = vec![0x11223344u32, 0xDEAD_BEEF, 0x55667788, 0xDEAD_BEEF];
        let img = ImgVec::new_stride(buf, 1, 2, 2);
        let out = swizzle_img_inplace(img, LanePermutation::RGBA_TO_ARGB);
        assert_eq!(
            out.buf().as_slice(),
            &[0x44112233, 0xDEAD_BEEF, 0x88556677, 0xDEAD_BEEF]
        );
    }

    #[test]
    fn test_argb_rgba_img_round_trip() {
        let buf = vec![0x80FF_0010u32, 0x0000_0000, 0xFF12_3456, 0x7F7F_7F7F];
        let argb = ImgVec::new(buf.clone(), 2, 2);
        let rgba = argb_to_rgba_img(argb.as_ref());
        assert_eq!(rgba.buf()[0], Rgba::new(0xFF, 0x00, 0x10, 0x80));
        let back = rgba_to_argb_img(rgba.as_ref());
        assert_eq!(back.buf(), &buf);
    }
}
