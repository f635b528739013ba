//! Typed pixel-slice obfuscation using [`rgb`] crate types via bytemuck.
//!
//! The transform is layout-agnostic, so the operations are generic over any
//! [`bytemuck::Pod`] pixel type and use the SIMD-optimized core internally.
//!
//! # In-place
//!
//! ```rust
//! use rgb::Rgb;
//! use masq::{Key, typed_rgb};
//!
//! let mut pixels: Vec<Rgb<u8>> = vec![Rgb::new(10, 200, 255); 100];
//! typed_rgb::xor_pixels_mut(&mut pixels, Key::new(5));
//! assert_eq!(pixels[0], Rgb::new(15, 205, 250));
//! typed_rgb::xor_pixels_mut(&mut pixels, Key::new(5));
//! assert_eq!(pixels[0], Rgb::new(10, 200, 255));
//! ```
//!
//! # Copy
//!
//! ```rust
//! use rgb::Rgba;
//! use masq::{Key, typed_rgb};
//!
//! let src: Vec<Rgba<u8>> = vec![Rgba::new(1, 2, 3, 255); 100];
//! let masked = typed_rgb::xor_pixels_to_vec(&src, Key::new(0x5A));
//! assert_eq!(src[0], Rgba::new(1, 2, 3, 255)); // source untouched
//! ```

use alloc::vec;
use alloc::vec::Vec;

use bytemuck::Pod;
use rgb::{Bgra, Rgba};

use crate::{BufferError, Key};

/// XOR every channel byte of a typed pixel slice in place.
pub fn xor_pixels_mut<P: Pod>(pixels: &mut [P], key: Key) {
    if pixels.is_empty() {
        return;
    }
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::bytes::xor_inplace(bytes, key).expect("typed slice is always valid");
}

/// XOR a typed pixel slice into `dst`, leaving `src` untouched.
pub fn xor_pixels_buf<P: Pod>(src: &[P], dst: &mut [P], key: Key) -> Result<(), BufferError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::bytes::xor(src_bytes, dst_bytes, key)
}

/// XOR a typed pixel slice into a freshly allocated `Vec`, source untouched.
pub fn xor_pixels_to_vec<P: Pod>(src: &[P], key: Key) -> Vec<P> {
    if src.is_empty() {
        return Vec::new();
    }
    let mut out = vec![P::zeroed(); src.len()];
    xor_pixels_buf(src, &mut out, key).expect("typed slice is always valid");
    out
}

/// XOR the color channels of a `&mut [Rgba<u8>]`, passing alpha through.
pub fn xor_rgba_keep_alpha_mut(pixels: &mut [Rgba<u8>], key: Key) {
    if pixels.is_empty() {
        return;
    }
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::bytes::xor_keep_alpha_inplace(bytes, key).expect("typed slice is always valid");
}

/// XOR the color channels of a `&mut [Bgra<u8>]`, passing alpha through.
///
/// Same byte positions as [`xor_rgba_keep_alpha_mut`] — alpha is last in
/// both layouts.
pub fn xor_bgra_keep_alpha_mut(pixels: &mut [Bgra<u8>], key: Key) {
    if pixels.is_empty() {
        return;
    }
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::bytes::xor_keep_alpha_inplace(bytes, key).expect("typed slice is always valid");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
