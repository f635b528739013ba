// ---------------------------------------------------------------------------
// Byte-level XOR obfuscation with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers dispatch via incant! — contiguous (single call)
// and strided (loop over rows, single dispatch).
//
// XOR with a fixed byte is an involution: every operation here is its own
// inverse under the same key, so there is no separate "decode" path.
// ---------------------------------------------------------------------------

use alloc::vec;
use alloc::vec::Vec;

use crate::{BufferError, Key};
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

#[cfg(test)]
mod tests;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize) -> Result<(), BufferError> {
    if len == 0 {
        Err(BufferError::Empty)
    } else {
        Ok(())
    }
}

#[inline]
fn check_inplace_4bpp(len: usize) -> Result<(), BufferError> {
    check_inplace(len)?;
    if !len.is_multiple_of(4) {
        return Err(BufferError::NotPixelAligned);
    }
    Ok(())
}

#[inline]
fn check_copy(src_len: usize, dst_len: usize) -> Result<(), BufferError> {
    if src_len == 0 {
        return Err(BufferError::Empty);
    }
    if dst_len < src_len {
        return Err(BufferError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
fn check_copy_4bpp(src_len: usize, dst_len: usize) -> Result<(), BufferError> {
    check_copy(src_len, dst_len)?;
    if !src_len.is_multiple_of(4) {
        return Err(BufferError::NotPixelAligned);
    }
    Ok(())
}

#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), BufferError> {
    if width == 0 || height == 0 || bpp == 0 {
        return Err(BufferError::InvalidStride);
    }
    let row_bytes = width.checked_mul(bpp).ok_or(BufferError::InvalidStride)?;
    if row_bytes > stride {
        return Err(BufferError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(BufferError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(BufferError::InvalidStride)?;
    if len < total {
        return Err(BufferError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Public API — contiguous
// ===========================================================================

/// XOR every byte in-place with the key.
///
/// Works for any channel layout (gray, gray+alpha, RGB, RGBA, BGRA, …);
/// the transform is layout-agnostic. Apply twice with the same key to
/// restore the original.
pub fn xor_inplace(buf: &mut [u8], key: Key) -> Result<(), BufferError> {
    check_inplace(buf.len())?;
    incant!(xor_impl(buf, key.value()), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

/// XOR every byte of `src` with the key into `dst`, leaving `src` untouched.
///
/// `dst` must hold at least `src.len()` bytes; extra bytes are not written.
pub fn xor(src: &[u8], dst: &mut [u8], key: Key) -> Result<(), BufferError> {
    check_copy(src.len(), dst.len())?;
    incant!(copy_xor_impl(src, dst, key.value()), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

/// XOR every byte of `src` with the key into a freshly allocated `Vec<u8>`.
pub fn xor_to_vec(src: &[u8], key: Key) -> Result<Vec<u8>, BufferError> {
    check_copy(src.len(), src.len())?;
    let mut dst = vec![0u8; src.len()];
    incant!(
        copy_xor_impl(src, &mut dst, key.value()),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(dst)
}

/// XOR the three color bytes of every 4 bpp pixel, passing alpha through.
///
/// Works for any alpha-last layout (RGBA, BGRA). Obfuscating the alpha
/// channel turns the result transparent garbage; this keeps it intact.
pub fn xor_keep_alpha_inplace(buf: &mut [u8], key: Key) -> Result<(), BufferError> {
    check_inplace_4bpp(buf.len())?;
    incant!(
        xor_keep_alpha_impl(buf, key.value()),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

/// Copy 4 bpp pixels, XORing color bytes and passing alpha through.
pub fn xor_keep_alpha(src: &[u8], dst: &mut [u8], key: Key) -> Result<(), BufferError> {
    check_copy_4bpp(src.len(), dst.len())?;
    incant!(
        copy_xor_keep_alpha_impl(src, dst, key.value()),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// XOR a strided image in-place.
///
/// `width` is in pixels, `bpp` in bytes per pixel, and `stride` is the
/// distance in bytes between the start of consecutive rows. Must be
/// ≥ `width × bpp`. Padding bytes between rows are never read or written.
/// The buffer must be at least `(height - 1) * stride + width * bpp` bytes.
pub fn xor_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
    key: Key,
) -> Result<(), BufferError> {
    check_strided(buf.len(), width, height, stride, bpp)?;
    incant!(
        xor_strided(buf, width * bpp, height, stride, key.value()),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

/// XOR between strided buffers, leaving the source untouched.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start
/// of consecutive rows in the source and destination buffers respectively.
/// Padding bytes between rows are never read or written.
pub fn xor_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
    bpp: usize,
    key: Key,
) -> Result<(), BufferError> {
    check_strided(src.len(), width, height, src_stride, bpp)?;
    check_strided(dst.len(), width, height, dst_stride, bpp)?;
    incant!(
        copy_xor_strided(src, dst, width * bpp, height, src_stride, dst_stride, key.value()),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

/// XOR color bytes of a strided 4 bpp image in-place, passing alpha through.
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × 4`. Padding bytes between rows are never read or written.
pub fn xor_keep_alpha_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    key: Key,
) -> Result<(), BufferError> {
    check_strided(buf.len(), width, height, stride, 4)?;
    incant!(
        xor_keep_alpha_strided(buf, width, height, stride, key.value()),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

/// Copy a strided 4 bpp image, XORing color bytes and passing alpha through.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start
/// of consecutive rows. Padding bytes between rows are never read or written.
pub fn xor_keep_alpha_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
    key: Key,
) -> Result<(), BufferError> {
    check_strided(src.len(), width, height, src_stride, 4)?;
    check_strided(dst.len(), width, height, dst_stride, 4)?;
    incant!(
        copy_xor_keep_alpha_strided(src, dst, width, height, src_stride, dst_stride, key.value()),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}
