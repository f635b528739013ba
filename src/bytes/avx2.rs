use archmage::prelude::*;
use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

// ===========================================================================
// SIMD constants
// ===========================================================================

// Keep-alpha lane mask: ANDed with the broadcast key so byte 3 of every
// 4-byte pixel XORs with 0 (identity) while bytes 0-2 XOR with the key.
const COLOR_LANES_MASK_AVX: [i8; 32] = [
    -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1,
    -1, -1, 0, -1, -1, -1, 0,
];

// ===========================================================================
// x86-64 AVX2 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn xor_row_v3(_token: X64V3Token, row: &mut [u8], key: u8) {
    let kv = _mm256_set1_epi8(key as i8);
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, _mm256_xor_si256(v, kv));
        i += 32;
    }
    for b in &mut row[i..] {
        *b ^= key;
    }
}

#[rite]
pub(super) fn copy_xor_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], key: u8) {
    let kv = _mm256_set1_epi8(key as i8);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, _mm256_xor_si256(v, kv));
        i += 32;
    }
    for (s, d) in src[i..].iter().zip(dst[i..].iter_mut()) {
        *d = s ^ key;
    }
}

#[rite]
pub(super) fn xor_keep_alpha_row_v3(_token: X64V3Token, row: &mut [u8], key: u8) {
    let mask = _mm256_loadu_si256(&COLOR_LANES_MASK_AVX);
    let kv = _mm256_and_si256(_mm256_set1_epi8(key as i8), mask);
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, _mm256_xor_si256(v, kv));
        i += 32;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px[0] ^= key;
        px[1] ^= key;
        px[2] ^= key;
    }
}

#[rite]
pub(super) fn copy_xor_keep_alpha_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], key: u8) {
    let mask = _mm256_loadu_si256(&COLOR_LANES_MASK_AVX);
    let kv = _mm256_and_si256(_mm256_set1_epi8(key as i8), mask);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, _mm256_xor_si256(v, kv));
        i += 32;
    }
    for (s, d) in src[i..].chunks_exact(4).zip(dst[i..].chunks_exact_mut(4)) {
        d[0] = s[0] ^ key;
        d[1] = s[1] ^ key;
        d[2] = s[2] ^ key;
        d[3] = s[3];
    }
}

// ===========================================================================
// x86-64 arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn xor_impl_v3(t: X64V3Token, b: &mut [u8], key: u8) {
    xor_row_v3(t, b, key);
}
#[arcane]
pub(super) fn copy_xor_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], key: u8) {
    copy_xor_row_v3(t, s, d, key);
}
#[arcane]
pub(super) fn xor_keep_alpha_impl_v3(t: X64V3Token, b: &mut [u8], key: u8) {
    xor_keep_alpha_row_v3(t, b, key);
}
#[arcane]
pub(super) fn copy_xor_keep_alpha_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], key: u8) {
    copy_xor_keep_alpha_row_v3(t, s, d, key);
}

// ===========================================================================
// x86-64 arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn xor_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    row_bytes: usize,
    h: usize,
    stride: usize,
    key: u8,
) {
    for y in 0..h {
        xor_row_v3(t, &mut buf[y * stride..][..row_bytes], key);
    }
}
#[arcane]
pub(super) fn copy_xor_strided_v3(
    t: X64V3Token,
    src: &[u8],
    dst: &mut [u8],
    row_bytes: usize,
    h: usize,
    ss: usize,
    ds: usize,
    key: u8,
) {
    for y in 0..h {
        copy_xor_row_v3(t, &src[y * ss..][..row_bytes], &mut dst[y * ds..][..row_bytes], key);
    }
}
#[arcane]
pub(super) fn xor_keep_alpha_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    key: u8,
) {
    for y in 0..h {
        xor_keep_alpha_row_v3(t, &mut buf[y * stride..][..w * 4], key);
    }
}
#[arcane]
pub(super) fn copy_xor_keep_alpha_strided_v3(
    t: X64V3Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
    key: u8,
) {
    for y in 0..h {
        copy_xor_keep_alpha_row_v3(t, &src[y * ss..][..w * 4], &mut dst[y * ds..][..w * 4], key);
    }
}
