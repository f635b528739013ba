use core::arch::wasm32::{i8x16, u8x16_splat, v128_and, v128_xor};

use archmage::prelude::*;
use safe_unaligned_simd::wasm32::{v128_load, v128_store};

// ===========================================================================
// WASM SIMD128 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn xor_row_wasm128(_token: Wasm128Token, row: &mut [u8], key: u8) {
    let kv = u8x16_splat(key);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = v128_load(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        v128_store(out, v128_xor(v, kv));
        i += 16;
    }
    for b in &mut row[i..] {
        *b ^= key;
    }
}

#[rite]
pub(super) fn copy_xor_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8], key: u8) {
    let kv = u8x16_splat(key);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = v128_load(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        v128_store(d, v128_xor(v, kv));
        i += 16;
    }
    for (s, d) in src[i..].iter().zip(dst[i..].iter_mut()) {
        *d = s ^ key;
    }
}

#[rite]
pub(super) fn xor_keep_alpha_row_wasm128(_token: Wasm128Token, row: &mut [u8], key: u8) {
    let mask = i8x16(-1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0);
    let kv = v128_and(u8x16_splat(key), mask);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = v128_load(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        v128_store(out, v128_xor(v, kv));
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px[0] ^= key;
        px[1] ^= key;
        px[2] ^= key;
    }
}

#[rite]
pub(super) fn copy_xor_keep_alpha_row_wasm128(
    _token: Wasm128Token,
    src: &[u8],
    dst: &mut [u8],
    key: u8,
) {
    let mask = i8x16(-1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0);
    let kv = v128_and(u8x16_splat(key), mask);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = v128_load(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        v128_store(d, v128_xor(v, kv));
        i += 16;
    }
    for (s, d) in src[i..].chunks_exact(4).zip(dst[i..].chunks_exact_mut(4)) {
        d[0] = s[0] ^ key;
        d[1] = s[1] ^ key;
        d[2] = s[2] ^ key;
        d[3] = s[3];
    }
}

// ===========================================================================
// WASM arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn xor_impl_wasm128(t: Wasm128Token, b: &mut [u8], key: u8) {
    xor_row_wasm128(t, b, key);
}
#[arcane]
pub(super) fn copy_xor_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8], key: u8) {
    copy_xor_row_wasm128(t, s, d, key);
}
#[arcane]
pub(super) fn xor_keep_alpha_impl_wasm128(t: Wasm128Token, b: &mut [u8], key: u8) {
    xor_keep_alpha_row_wasm128(t, b, key);
}
#[arcane]
pub(super) fn copy_xor_keep_alpha_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8], key: u8) {
    copy_xor_keep_alpha_row_wasm128(t, s, d, key);
}

// ===========================================================================
// WASM arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn xor_strided_wasm128(
    t: Wasm128Token,
    buf: &mut [u8],
    row_bytes: usize,
    h: usize,
    stride: usize,
    key: u8,
) {
    for y in 0..h {
        xor_row_wasm128(t, &mut buf[y * stride..][..row_bytes], key);
    }
}
#[arcane]
pub(super) fn copy_xor_strided_wasm128(
    t: Wasm128Token,
    src: &[u8],
    dst: &mut [u8],
    row_bytes: usize,
    h: usize,
    ss: usize,
    ds: usize,
    key: u8,
) {
    for y in 0..h {
        copy_xor_row_wasm128(t, &src[y * ss..][..row_bytes], &mut dst[y * ds..][..row_bytes], key);
    }
}
#[arcane]
pub(super) fn xor_keep_alpha_strided_wasm128(
    t: Wasm128Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    key: u8,
) {
    for y in 0..h {
        xor_keep_alpha_row_wasm128(t, &mut buf[y * stride..][..w * 4], key);
    }
}
#[arcane]
pub(super) fn copy_xor_keep_alpha_strided_wasm128(
    t: Wasm128Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
    key: u8,
) {
    for y in 0..h {
        copy_xor_keep_alpha_row_wasm128(
            t,
            &src[y * ss..][..w * 4],
            &mut dst[y * ds..][..w * 4],
            key,
        );
    }
}
