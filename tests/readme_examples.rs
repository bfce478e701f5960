//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_pixel_values() {
    use lanemix::{Channel, LanePermutation, argb_to_rgba, rgba_to_argb, swizzle};

    let rgba = argb_to_rgba(&[0x11223344]);
    assert_eq!(rgba, [0x22334411]);
    assert_eq!(rgba_to_argb(&rgba), [0x11223344]);

    let low = LanePermutation::new(
        Channel::Bits0,
        Channel::Bits0,
        Channel::Bits0,
        Channel::Bits0,
    );
    assert_eq!(swizzle(&[0x11223344], low), [0x44444444]);
}

#[test]
fn readme_byte_storage() {
    use lanemix::{ByteOrder, argb_to_rgba_bytes};

    let out = argb_to_rgba_bytes(&[0x11, 0x22, 0x33, 0x44], ByteOrder::BigEndian).unwrap();
    assert_eq!(out, [0x22, 0x33, 0x44, 0x11]);
}

#[test]
fn identity_and_large_buffers() {
    use lanemix::{LanePermutation, argb_to_rgba, rgba_to_argb, swizzle};

    let px: Vec<u32> = (0..1920u32 * 3).map(|i| i.wrapping_mul(2_654_435_761)).collect();
    assert_eq!(swizzle(&px, LanePermutation::IDENTITY), px);
    assert_eq!(rgba_to_argb(&argb_to_rgba(&px)), px);
}

#[test]
fn shifts_are_validated() {
    use lanemix::{InvalidShift, LanePermutation};

    assert_eq!(
        LanePermutation::from_shifts(16, 8, 0, 24),
        Ok(LanePermutation::ARGB_TO_RGBA)
    );
    assert_eq!(
        LanePermutation::from_shifts(16, 8, 0, 32),
        Err(InvalidShift(32))
    );
}

#[test]
fn codec_boundary() {
    use lanemix::codec::{ImageFormat, PixelData};

    let data = PixelData::from_argb(1, 2, &[0xFF00_00FF, 0x8000_FF00]).unwrap();
    assert_eq!(data.pixels(), &[0, 0, 0xFF, 0xFF, 0, 0xFF, 0, 0x80]);
    assert_eq!(data.to_argb(), [0xFF00_00FF, 0x8000_FF00]);
    assert!(ImageFormat::from_mime_type("image/gif").is_err());
}

#[cfg(feature = "rgb")]
#[test]
fn readme_typed_rgb() {
    use lanemix::typed_rgb;
    use rgb::Rgba;

    let rgba = typed_rgb::argb_to_rgba(&[0x80FF_0010; 100]);
    assert_eq!(rgba[0], Rgba { r: 0xFF, g: 0x00, b: 0x10, a: 0x80 });
}

#[cfg(feature = "imgref")]
#[test]
fn readme_imgref() {
    use ::imgref::ImgVec;
    use lanemix::img;

    let argb_img = ImgVec::new(vec![0x11223344u32; 640 * 480], 640, 480);
    let rgba_img = img::argb_to_rgba_img(argb_img.as_ref());
    assert_eq!(rgba_img.width(), 640);
    assert_eq!(rgba_img.height(), 480);
    assert_eq!(rgba_img.buf()[0], rgb::Rgba::new(0x22, 0x33, 0x44, 0x11));
}
