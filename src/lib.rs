//! # lanemix
//!
//! Byte-lane swizzles for packed 32-bit pixels.
//!
//! A pixel is a `u32` holding four 8-bit lanes. Lane order is read
//! big-endian-in-value: the lane at bit offset 24 is "first", offset 0 is
//! "last". A [`LanePermutation`] says, for each output lane, which input lane
//! to copy, so `ARGB → RGBA` is just `(16, 8, 0, 24)`.
//!
//! Conversions run on x86-64 AVX2, ARM NEON, and WASM SIMD128 with automatic
//! fallback to scalar code.
//!
//! ## Core operations (always available)
//!
//! - [`swizzle`], [`argb_to_rgba`], [`rgba_to_argb`] on `&[u32]` values.
//! - [`swizzle_bytes`] and friends on raw `&[u8]` storage, with an explicit
//!   [`ByteOrder`] for how each pixel value is laid out in memory.
//! - [`codec`]: the narrow interface to an external image codec.
//!
//! ## Feature flags
//!
//! - **`rgb`** — conversions between packed ARGB values and [`rgb`] crate
//!   `Rgba<u8>` pixels.
//! - **`imgref`** — whole-image conversions using [`imgref`] types
//!   (`ImgRef`, `ImgVec`). Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

use core::fmt;

mod bytes;
pub mod codec;
mod lane;
mod swizzle;

pub use lane::{ByteOrder, Channel, InvalidShift, LanePermutation};
pub use swizzle::*;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod img;

/// A buffer did not have the shape an operation needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeError {
    /// Buffer length is not a whole number of pixels.
    NotPixelAligned,
    /// Destination holds fewer pixels than the source.
    PixelCountMismatch,
    /// Width, height, and stride do not fit the buffer.
    InvalidStride,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPixelAligned => f.write_str("buffer length is not a multiple of 4 bytes"),
            Self::PixelCountMismatch => f.write_str("destination is smaller than source"),
            Self::InvalidStride => f.write_str("stride and dimensions do not fit the buffer"),
        }
    }
}

impl core::error::Error for SizeError {}
