//! The boundary to an external image codec.
//!
//! Decoding, encoding and any bitmap surface work belong to whatever imaging
//! library the application already uses. This module only fixes the shape of
//! the data that crosses that boundary ([`PixelData`], tightly packed RGBA8)
//! and the capability a codec has to offer ([`PixelCodec`]).
//!
//! Platform bitmap APIs usually hand out pixels as packed ARGB integers;
//! [`PixelData::from_argb`] and [`PixelData::to_argb`] convert to and from
//! that form.
//!
//! ```rust
//! use lanemix::codec::{ImageFormat, PixelData};
//!
//! let data = PixelData::from_argb(2, 1, &[0xFF10_2030, 0x8040_5060]).unwrap();
//! assert_eq!(data.pixels(), &[0x10, 0x20, 0x30, 0xFF, 0x40, 0x50, 0x60, 0x80]);
//! assert_eq!(data.to_argb(), [0xFF10_2030, 0x8040_5060]);
//!
//! assert_eq!(ImageFormat::from_mime_type("image/png"), Ok(ImageFormat::Png));
//! assert!(ImageFormat::from_mime_type("image/gif").is_err());
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::{ByteOrder, LanePermutation, SizeError, swizzle_bytes_into};

/// A decoded image: `width × height` RGBA8 pixels, row-major, no padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelData {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelData {
    /// Wrap RGBA8 bytes. `pixels.len()` must be exactly `width × height × 4`.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, SizeError> {
        if rgba_len(width, height)? != pixels.len() {
            return Err(SizeError::PixelCountMismatch);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from packed ARGB values (alpha in the top byte), one per pixel.
    pub fn from_argb(width: usize, height: usize, argb: &[u32]) -> Result<Self, SizeError> {
        let len = rgba_len(width, height)?;
        if argb.len() * 4 != len {
            return Err(SizeError::PixelCountMismatch);
        }
        let mut pixels = vec![0u8; len];
        swizzle_bytes_into(
            bytemuck::cast_slice(argb),
            &mut pixels,
            ByteOrder::NATIVE,
            ByteOrder::BigEndian,
            LanePermutation::ARGB_TO_RGBA,
        )?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Packed ARGB values, one per pixel, in row-major order.
    pub fn to_argb(&self) -> Vec<u32> {
        let mut argb = vec![0u32; self.pixels.len() / 4];
        swizzle_bytes_into(
            &self.pixels,
            bytemuck::cast_slice_mut(&mut argb),
            ByteOrder::BigEndian,
            ByteOrder::NATIVE,
            LanePermutation::RGBA_TO_ARGB,
        )
        .expect("pixel length is validated on construction");
        argb
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// RGBA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

fn rgba_len(width: usize, height: usize) -> Result<usize, SizeError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(SizeError::PixelCountMismatch)
}

/// Output formats an encoder may be asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

/// A MIME type with no supported [`ImageFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedMimeType;

impl fmt::Display for UnsupportedMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"MIME type must be "image/png" or "image/jpeg""#)
    }
}

impl core::error::Error for UnsupportedMimeType {}

impl ImageFormat {
    /// Map a MIME type to a format.
    ///
    /// Only `image/png` and `image/jpeg` are accepted; `image/jpg` is not a
    /// registered type and GIF output is unsupported.
    pub fn from_mime_type(mime: &str) -> Result<Self, UnsupportedMimeType> {
        match mime {
            "image/png" => Ok(Self::Png),
            "image/jpeg" => Ok(Self::Jpeg),
            _ => Err(UnsupportedMimeType),
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// What an external image codec provides.
pub trait PixelCodec {
    type Error;

    /// Decode an encoded image into RGBA8 pixels.
    fn decode(&self, bytes: &[u8]) -> Result<PixelData, Self::Error>;

    /// Encode RGBA8 pixels as `format`.
    fn encode(&self, image: &PixelData, format: ImageFormat) -> Result<Vec<u8>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{vec, vec::Vec};

    /// Toy codec: 8-byte big-endian width/height header followed by the
    /// pixels as big-endian ARGB words.
    struct ArgbDump;

    #[derive(Debug, PartialEq)]
    enum DumpError {
        Truncated,
        Size(SizeError),
    }

    impl PixelCodec for ArgbDump {
        type Error = DumpError;

        fn decode(&self, bytes: &[u8]) -> Result<PixelData, DumpError> {
            let header = bytes.get(..8).ok_or(DumpError::Truncated)?;
            let w = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
            let h = u32::from_be_bytes([header[4], header[5], header[6], header[7]]) as usize;
            let argb: Vec<u32> = bytes[8..]
                .chunks_exact(4)
                .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
                .collect();
            PixelData::from_argb(w, h, &argb).map_err(DumpError::Size)
        }

        fn encode(&self, image: &PixelData, _format: ImageFormat) -> Result<Vec<u8>, DumpError> {
            let mut out = Vec::new();
            out.extend_from_slice(&(image.width() as u32).to_be_bytes());
            out.extend_from_slice(&(image.height() as u32).to_be_bytes());
            for v in image.to_argb() {
                out.extend_from_slice(&v.to_be_bytes());
            }
            Ok(out)
        }
    }

    #[test]
    fn test_new_validates_length() {
        assert!(PixelData::new(2, 2, vec![0; 16]).is_ok());
        assert_eq!(
            PixelData::new(2, 2, vec![0; 15]),
            Err(SizeError::PixelCountMismatch)
        );
        assert_eq!(
            PixelData::new(usize::MAX, 2, Vec::new()),
            Err(SizeError::PixelCountMismatch)
        );
        assert_eq!(PixelData::new(0, 0, Vec::new()).map(|d| d.pixels().len()), Ok(0));
    }

    #[test]
    fn test_argb_round_trip() {
        let argb = [0x11223344, 0xFF000000, 0x00FFFFFF, 0x80402010];
        let data = PixelData::from_argb(2, 2, &argb).unwrap();
        assert_eq!(
            data.pixels()[..4],
            [0x22, 0x33, 0x44, 0x11]
        );
        assert_eq!(data.to_argb(), argb);
        assert_eq!(
            PixelData::from_argb(3, 2, &argb),
            Err(SizeError::PixelCountMismatch)
        );
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ImageFormat::from_mime_type("image/png"), Ok(ImageFormat::Png));
        assert_eq!(ImageFormat::from_mime_type("image/jpeg"), Ok(ImageFormat::Jpeg));
        for bad in ["image/gif", "image/jpg", "image/webp", "", "IMAGE/PNG"] {
            assert_eq!(ImageFormat::from_mime_type(bad), Err(UnsupportedMimeType));
        }
        for f in [ImageFormat::Png, ImageFormat::Jpeg] {
            assert_eq!(ImageFormat::from_mime_type(f.mime_type()), Ok(f));
        }
    }

    #[test]
    fn test_codec_round_trip() {
        let codec = ArgbDump;
        let image = PixelData::new(3, 1, (0u8..12).collect()).unwrap();
        let encoded = codec.encode(&image, ImageFormat::Png).unwrap();
        assert_eq!(&encoded[8..12], &[3, 0, 1, 2]);
        assert_eq!(codec.decode(&encoded), Ok(image));
        assert_eq!(codec.decode(&[0; 4]), Err(DumpError::Truncated));
    }
}
