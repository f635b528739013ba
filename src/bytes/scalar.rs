use archmage::prelude::*;

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn xor_row_scalar(_token: ScalarToken, row: &mut [u8], key: u8) {
    for b in row.iter_mut() {
        *b ^= key;
    }
}

pub(super) fn copy_xor_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8], key: u8) {
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = s ^ key;
    }
}

pub(super) fn xor_keep_alpha_row_scalar(_token: ScalarToken, row: &mut [u8], key: u8) {
    for px in row.chunks_exact_mut(4) {
        px[0] ^= key;
        px[1] ^= key;
        px[2] ^= key;
    }
}

pub(super) fn copy_xor_keep_alpha_row_scalar(
    _token: ScalarToken,
    src: &[u8],
    dst: &mut [u8],
    key: u8,
) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[0] ^ key;
        d[1] = s[1] ^ key;
        d[2] = s[2] ^ key;
        d[3] = s[3];
    }
}

// ===========================================================================
// Scalar contiguous wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn xor_impl_scalar(t: ScalarToken, b: &mut [u8], key: u8) {
    xor_row_scalar(t, b, key);
}
pub(super) fn copy_xor_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8], key: u8) {
    copy_xor_row_scalar(t, s, d, key);
}
pub(super) fn xor_keep_alpha_impl_scalar(t: ScalarToken, b: &mut [u8], key: u8) {
    xor_keep_alpha_row_scalar(t, b, key);
}
pub(super) fn copy_xor_keep_alpha_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8], key: u8) {
    copy_xor_keep_alpha_row_scalar(t, s, d, key);
}

// ===========================================================================
// Scalar strided wrappers
// ===========================================================================

pub(super) fn xor_strided_scalar(
    t: ScalarToken,
    buf: &mut [u8],
    row_bytes: usize,
    h: usize,
    stride: usize,
    key: u8,
) {
    for y in 0..h {
        xor_row_scalar(t, &mut buf[y * stride..][..row_bytes], key);
    }
}
pub(super) fn copy_xor_strided_scalar(
    t: ScalarToken,
    src: &[u8],
    dst: &mut [u8],
    row_bytes: usize,
    h: usize,
    ss: usize,
    ds: usize,
    key: u8,
) {
    for y in 0..h {
        copy_xor_row_scalar(t, &src[y * ss..][..row_bytes], &mut dst[y * ds..][..row_bytes], key);
    }
}
pub(super) fn xor_keep_alpha_strided_scalar(
    t: ScalarToken,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    key: u8,
) {
    for y in 0..h {
        xor_keep_alpha_row_scalar(t, &mut buf[y * stride..][..w * 4], key);
    }
}
pub(super) fn copy_xor_keep_alpha_strided_scalar(
    t: ScalarToken,
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    ss: usize,
    ds: usize,
    key: u8,
) {
    for y in 0..h {
        copy_xor_keep_alpha_row_scalar(
            t,
            &src[y * ss..][..w * 4],
            &mut dst[y * ds..][..w * 4],
            key,
        );
    }
}
