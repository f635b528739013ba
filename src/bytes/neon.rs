use archmage::prelude::*;

// ===========================================================================
// ARM NEON — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn xor_row_arm_v2(_token: Arm64V2Token, row: &mut [u8], key: u8) {
    use core::arch::aarch64::{vdupq_n_u8, veorq_u8};
    let kv = vdupq_n_u8(key);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(out, veorq_u8(v, kv));
        i += 16;
    }
    for b in &mut row[i..] {
        *b ^= key;
    }
}

#[rite]
pub(super) fn copy_xor_row_arm_v2(_token: Arm64V2Token, src: &[u8], dst: &mut [u8], key: u8) {
    use core::arch::aarch64::{vdupq_n_u8, veorq_u8};
    let kv = vdupq_n_u8(key);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(d, veorq_u8(v, kv));
        i += 16;
    }
    for (s, d) in src[i..].iter().zip(dst[i..].iter_mut()) {
        *d = s ^ key;
    }
}

#[rite]
pub(super) fn xor_keep_alpha_row_arm_v2(_token: Arm64V2Token, row: &mut [u8], key: u8) {
    use core::arch::aarch64::{vandq_u8, vdupq_n_u8, veorq_u8};
    let mb: [u8; 16] = [
        0xFF, 0xFF, 0xFF, 0, 0xFF, 0xFF, 0xFF, 0, 0xFF, 0xFF, 0xFF, 0, 0xFF, 0xFF, 0xFF, 0,
    ];
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&mb);
    let kv = vandq_u8(vdupq_n_u8(key), mask);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(out, veorq_u8(v, kv));
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        px[0] ^= key;
        px[1] ^= key;
        px[2] ^= key;
    }
}

#[rite]
pub(super) fn copy_xor_keep_alpha_row_arm_v2(
    _token: Arm64V2Token,
    src: &[u8],
    dst: &mut [u8],
    key: u8,
) {
    use core::arch::aarch64::{vandq_u8, vdupq_n_u8, veorq_u8};
    let mb: [u8; 16] = [
        0xFF, 0xFF, 0xFF, 0, 0xFF, 0xFF, 0xFF, 0, 0xFF, 0xFF, 0xFF, 0, 0xFF, 0xFF, 0xFF, 0,
    ];
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&mb);
    let kv = vandq_u8(vdupq_n_u8(key), mask);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(d, veorq_u8(v, kv));
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
// ARM arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn xor_impl_arm_v2(t: Arm64V2Token, b: &mut [u8], key: u8) {
    xor_row_arm_v2(t, b, key);
}
#[arcane]
pub(super) fn copy_xor_impl_arm_v2(t: Arm64V2Token, s: &[u8], d: &mut [u8], key: u8) {
    copy_xor_row_arm_v2(t, s, d, key);
}
#[arcane]
pub(super) fn xor_keep_alpha_impl_arm_v2(t: Arm64V2Token, b: &mut [u8], key: u8) {
    xor_keep_alpha_row_arm_v2(t, b, key);
}
#[arcane]
pub(super) fn copy_xor_keep_alpha_impl_arm_v2(t: Arm64V2Token, s: &[u8], d: &mut [u8], key: u8) {
    copy_xor_keep_alpha_row_arm_v2(t, s, d, key);
}

// ===========================================================================
// ARM arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn xor_strided_arm_v2(
    t: Arm64V2Token,
    buf: &mut [u8],
    row_bytes: usize,
    h: usize,
    stride: usize,
    key: u8,
) {
    for y in 0..h {
        xor_row_arm_v2(t, &mut buf[y * stride..][..row_bytes], key);
    }
}
#[arcane]
pub(super) fn copy_xor_strided_arm_v2(
    t: Arm64V2Token,
    src: &[u8],
    dst: &mut [u8],
    row_bytes: usize,
    h: usize,
    ss: usize,
    ds: usize,
    key: u8,
) {
    for y in 0..h {
        copy_xor_row_arm_v2(t, &src[y * ss..][..row_bytes], &mut dst[y * ds..][..row_bytes], key);
    }
}
#[arcane]
pub(super) fn xor_keep_alpha_strided_arm_v2(
    t: Arm64V2Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    key: u8,
) {
    for y in 0..h {
        xor_keep_alpha_row_arm_v2(t, &mut buf[y * stride..][..w * 4], key);
    }
}
#[arcane]
pub(super) fn copy_xor_keep_alpha_strided_arm_v2(
    t: Arm64V2Token,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
    key: u8,
) {
    for y in 0..h {
        copy_xor_keep_alpha_row_arm_v2(
            t,
            &src[y * ss..][..w * 4],
            &mut dst[y * ds..][..w * 4],
            key,
        );
    }
}
