//! Conversions between packed ARGB values and [`rgb`] crate pixels.
//!
//! Platform bitmaps tend to hand out `u32` pixels with alpha in the top byte;
//! most Rust imaging code wants `Rgba<u8>`. These functions bridge the two
//! using the SIMD-optimized core shuffle.
//!
//! ```rust
//! use rgb::Rgba;
//! use lanemix::typed_rgb;
//!
//! let rgba = typed_rgb::argb_to_rgba(&[0x80FF_0010]);
//! assert_eq!(rgba, [Rgba::new(0xFF, 0x00, 0x10, 0x80)]);
//! assert_eq!(typed_rgb::rgba_to_argb(&rgba), [0x80FF_0010]);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::{ByteOrder, LanePermutation, SizeError, swizzle_bytes_into};
use rgb::Rgba;

// ---------------------------------------------------------------------------
// Copy conversions into caller buffers
// ---------------------------------------------------------------------------

/// Copy packed ARGB values into `&mut [Rgba<u8>]`.
pub fn argb_to_rgba_buf(src: &[u32], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    swizzle_bytes_into(
        src_bytes,
        dst_bytes,
        ByteOrder::NATIVE,
        ByteOrder::BigEndian,
        LanePermutation::ARGB_TO_RGBA,
    )
}

/// Copy `&[Rgba<u8>]` into packed ARGB values.
pub fn rgba_to_argb_buf(src: &[Rgba<u8>], dst: &mut [u32]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    swizzle_bytes_into(
        src_bytes,
        dst_bytes,
        ByteOrder::BigEndian,
        ByteOrder::NATIVE,
        LanePermutation::RGBA_TO_ARGB,
    )
}

// ---------------------------------------------------------------------------
// Allocating conversions
// ---------------------------------------------------------------------------

/// Packed ARGB values → freshly allocated `Vec<Rgba<u8>>`.
pub fn argb_to_rgba(src: &[u32]) -> Vec<Rgba<u8>> {
    let mut out = vec![Rgba::new(0u8, 0, 0, 0); src.len()];
    argb_to_rgba_buf(src, &mut out).expect("output sized to input");
    out
}

/// `&[Rgba<u8>]` → freshly allocated packed ARGB values.
pub fn rgba_to_argb(src: &[Rgba<u8>]) -> Vec<u32> {
    let mut out = vec![0u32; src.len()];
    rgba_to_argb_buf(src, &mut out).expect("output sized to input");
    out
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::vec;

    #[test]
    fn test_argb_to_rgba() {
        let rgba = argb_to_rgba(&[0x11223344, 0xFF000000]);
        assert_eq!(
            rgba,
            [
                Rgba {
                    r: 0x22,
                    g: 0x33,
                    b: 0x44,
                    a: 0x11
                },
                Rgba::new(0, 0, 0, 0xFF),
            ]
        );
    }

    #[test]
    fn test_round_trip() {
        let argb: Vec<u32> = (0..50u32).map(|i| i.wrapping_mul(0x0101_0107)).collect();
        assert_eq!(rgba_to_argb(&argb_to_rgba(&argb)), argb);
    }

    #[test]
    fn test_empty() {
        assert!(argb_to_rgba(&[]).is_empty());
        assert!(rgba_to_argb(&[]).is_empty());
    }

    #[test]
    fn test_size_mismatch_returns_error() {
        let src = vec![0x11223344u32; 3];
        let mut dst = vec![Rgba::new(0u8, 0, 0, 0); 2]; // wrong size
        assert_eq!(
            argb_to_rgba_buf(&src, &mut dst),
            Err(SizeError::PixelCountMismatch)
        );
        let rgba = vec![Rgba::new(1u8, 2, 3, 4); 3];
        let mut argb = vec![0u32; 2];
        assert_eq!(
            rgba_to_argb_buf(&rgba, &mut argb),
            Err(SizeError::PixelCountMismatch)
        );
    }
}
