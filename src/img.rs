//! Whole-image obfuscation using [`imgref`] types.
//!
//! [`conceal`] is the caller-facing transform: it takes an [`ImgRef`], XORs
//! every channel byte with the key, and returns a fresh [`ImgVec`] of the
//! same dimensions, leaving the input untouched. XOR with a fixed key is an
//! involution, so [`reveal`] is the same operation under another name —
//! there is no separate decode algorithm.
//!
//! ```rust
//! use rgb::Rgb;
//! use imgref::ImgVec;
//! use masq::{Key, img};
//!
//! let photo = ImgVec::new(vec![Rgb::new(10u8, 200, 255); 100], 10, 10);
//! let masked = img::conceal(photo.as_ref(), Key::new(5));
//! assert_eq!(masked.buf()[0], Rgb::new(15, 205, 250));
//! let restored = img::reveal(masked.as_ref(), Key::new(5));
//! assert_eq!(restored.buf(), photo.buf());
//! ```

use alloc::vec;
use alloc::vec::Vec;

use bytemuck::Pod;
use imgref::{ImgRef, ImgVec};
use rgb::Rgba;

use crate::Key;

/// XOR every channel byte of an image with the key into a new [`ImgVec`].
///
/// The input is untouched; the output is compact (stride = width) even when
/// the input is strided. A zero-pixel image yields a zero-pixel image.
pub fn conceal<P: Pod>(img: ImgRef<'_, P>, key: Key) -> ImgVec<P> {
    let w = img.width();
    let h = img.height();
    if w == 0 || h == 0 {
        return ImgVec::new(Vec::new(), w, h);
    }
    let buf: Vec<P> = vec![P::zeroed(); w * h];
    let mut dst = ImgVec::new(buf, w, h);
    for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
        let src_bytes: &[u8] = bytemuck::cast_slice(src_row);
        let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        crate::bytes::xor(src_bytes, dst_bytes, key).expect("image rows are always valid");
    }
    dst
}

/// Alias for [`conceal`] — XOR is its own inverse, so revealing a masked
/// image is the same transform with the same key.
#[inline(always)]
pub fn reveal<P: Pod>(img: ImgRef<'_, P>, key: Key) -> ImgVec<P> {
    conceal(img, key)
}

/// XOR an owned image in place, preserving its stride.
///
/// Consumes and returns the image; no allocation.
pub fn conceal_in_place<P: Pod>(mut img: ImgVec<P>, key: Key) -> ImgVec<P> {
    for row in img.rows_mut() {
        if row.is_empty() {
            continue;
        }
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(row);
        crate::bytes::xor_inplace(bytes, key).expect("image rows are always valid");
    }
    img
}

/// Alias for [`conceal_in_place`].
#[inline(always)]
pub fn reveal_in_place<P: Pod>(img: ImgVec<P>, key: Key) -> ImgVec<P> {
    conceal_in_place(img, key)
}

/// XOR the color channels of an RGBA image into a new [`ImgVec`], passing
/// alpha through.
pub fn conceal_rgba_keep_alpha(img: ImgRef<'_, Rgba<u8>>, key: Key) -> ImgVec<Rgba<u8>> {
    let w = img.width();
    let h = img.height();
    if w == 0 || h == 0 {
        return ImgVec::new(Vec::new(), w, h);
    }
    let mut dst = ImgVec::new(vec![Rgba::default(); w * h], w, h);
    for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
        let src_bytes: &[u8] = bytemuck::cast_slice(src_row);
        let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        crate::bytes::xor_keep_alpha(src_bytes, dst_bytes, key)
            .expect("image rows are always valid");
    }
    dst
}

/// Alias for [`conceal_rgba_keep_alpha`] — same transform, same key.
#[inline(always)]
pub fn reveal_rgba_keep_alpha(img: ImgRef<'_, Rgba<u8>>, key: Key) -> ImgVec<Rgba<u8>> {
    conceal_rgba_keep_alpha(img, key)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
