extern crate alloc;
extern crate std;
use super::*;
use alloc::{vec, vec::Vec};
use archmage::testing::{CompileTimePolicy, for_each_token_permutation};

fn policy() -> CompileTimePolicy {
    if std::env::var_os("CI").is_some() {
        CompileTimePolicy::Fail
    } else {
        CompileTimePolicy::WarnStderr
    }
}

// --- Helpers to generate test data ---

fn make_bytes(n: usize) -> Vec<u8> {
    (0..n).map(|i| (i % 251) as u8).collect()
}

fn make_4bpp(n_pixels: usize) -> Vec<u8> {
    make_bytes(n_pixels * 4)
}

// --- Reference (scalar-only) implementations for comparison ---

fn ref_xor(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|b| b ^ key).collect()
}

fn ref_xor_keep_alpha(data: &[u8], key: u8) -> Vec<u8> {
    let mut out = data.to_vec();
    for px in out.chunks_exact_mut(4) {
        px[0] ^= key;
        px[1] ^= key;
        px[2] ^= key;
    }
    out
}

// Test sizes: small (remainder only), medium (SIMD + remainder), large (multiple SIMD chunks)
const TEST_BYTE_COUNTS: &[usize] = &[1, 2, 3, 7, 8, 15, 16, 31, 32, 33, 63, 64, 65, 100, 333];

const TEST_KEYS: &[u8] = &[0, 1, 5, 0x55, 0xAA, 0xFF];

// -----------------------------------------------------------------------
// SIMD-dispatched operations — tested at every capability tier
// -----------------------------------------------------------------------

#[test]
fn permutation_xor_inplace() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &n in TEST_BYTE_COUNTS {
            for &key in TEST_KEYS {
                let mut data = make_bytes(n);
                let expected = ref_xor(&data, key);
                xor_inplace(&mut data, Key::new(key)).unwrap();
                assert_eq!(data, expected, "xor_inplace n={n} key={key} tier={perm}");
            }
        }
    });
    std::eprintln!("xor_inplace: {report}");
}

#[test]
fn permutation_xor_copy() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &n in TEST_BYTE_COUNTS {
            for &key in TEST_KEYS {
                let src = make_bytes(n);
                let expected = ref_xor(&src, key);
                let mut dst = vec![0u8; n];
                xor(&src, &mut dst, Key::new(key)).unwrap();
                assert_eq!(dst, expected, "xor_copy n={n} key={key} tier={perm}");
            }
        }
    });
    std::eprintln!("xor_copy: {report}");
}

#[test]
fn permutation_xor_to_vec() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &n in TEST_BYTE_COUNTS {
            let src = make_bytes(n);
            let out = xor_to_vec(&src, Key::new(0x5A)).unwrap();
            assert_eq!(out, ref_xor(&src, 0x5A), "xor_to_vec n={n} tier={perm}");
            assert_eq!(src, make_bytes(n), "source modified n={n} tier={perm}");
        }
    });
    std::eprintln!("xor_to_vec: {report}");
}

#[test]
fn permutation_keep_alpha_inplace() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &n in &[1usize, 2, 3, 7, 8, 9, 16, 17, 100] {
            for &key in TEST_KEYS {
                let mut data = make_4bpp(n);
                let expected = ref_xor_keep_alpha(&data, key);
                xor_keep_alpha_inplace(&mut data, Key::new(key)).unwrap();
                assert_eq!(data, expected, "keep_alpha n={n} key={key} tier={perm}");
            }
        }
    });
    std::eprintln!("keep_alpha_inplace: {report}");
}

#[test]
fn permutation_keep_alpha_copy() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &n in &[1usize, 2, 7, 8, 9, 33, 100] {
            let src = make_4bpp(n);
            let expected = ref_xor_keep_alpha(&src, 0x3C);
            let mut dst = vec![0u8; n * 4];
            xor_keep_alpha(&src, &mut dst, Key::new(0x3C)).unwrap();
            assert_eq!(dst, expected, "keep_alpha_copy n={n} tier={perm}");
        }
    });
    std::eprintln!("keep_alpha_copy: {report}");
}

// -----------------------------------------------------------------------
// Strided variants — also tested at every tier
// -----------------------------------------------------------------------

#[test]
fn permutation_strided_inplace() {
    let report = for_each_token_permutation(policy(), |perm| {
        // 10 pixels wide at 3bpp, stride 36 (6 bytes padding), 4 rows
        let w = 10;
        let h = 4;
        let bpp = 3;
        let stride = 36;
        let mut buf = vec![0xCCu8; stride * h];
        for y in 0..h {
            for i in 0..w * bpp {
                buf[y * stride + i] = (y * 31 + i) as u8;
            }
        }
        let orig = buf.clone();
        xor_inplace_strided(&mut buf, w, h, stride, bpp, Key::new(0x7E)).unwrap();
        for y in 0..h {
            for i in 0..w * bpp {
                assert_eq!(
                    buf[y * stride + i],
                    orig[y * stride + i] ^ 0x7E,
                    "strided y={y} i={i} tier={perm}"
                );
            }
            // Padding untouched
            for i in (w * bpp)..stride {
                assert_eq!(
                    buf[y * stride + i],
                    0xCC,
                    "padding corrupted y={y} i={i} tier={perm}"
                );
            }
        }
    });
    std::eprintln!("strided_inplace: {report}");
}

#[test]
fn permutation_strided_copy() {
    let report = for_each_token_permutation(policy(), |perm| {
        let w = 10;
        let h = 3;
        let bpp = 4;
        let src_stride = w * bpp + 8;
        let dst_stride = w * bpp + 4;
        let src = make_bytes(src_stride * h);
        let mut dst = vec![0xCCu8; dst_stride * h];
        xor_strided(&src, &mut dst, w, h, src_stride, dst_stride, bpp, Key::new(0x11)).unwrap();
        for y in 0..h {
            for i in 0..w * bpp {
                assert_eq!(
                    dst[y * dst_stride + i],
                    src[y * src_stride + i] ^ 0x11,
                    "strided_copy y={y} i={i} tier={perm}"
                );
            }
            for i in (w * bpp)..dst_stride {
                assert_eq!(
                    dst[y * dst_stride + i],
                    0xCC,
                    "dst padding corrupted y={y} i={i} tier={perm}"
                );
            }
        }
    });
    std::eprintln!("strided_copy: {report}");
}

#[test]
fn permutation_strided_keep_alpha() {
    let report = for_each_token_permutation(policy(), |perm| {
        let w = 9;
        let h = 3;
        let stride = w * 4 + 12;
        let mut buf = vec![0xCCu8; stride * h];
        for y in 0..h {
            for x in 0..w {
                let i = y * stride + x * 4;
                buf[i] = 10;
                buf[i + 1] = 20;
                buf[i + 2] = 30;
                buf[i + 3] = (x * 10) as u8; // varying alpha
            }
        }
        xor_keep_alpha_inplace_strided(&mut buf, w, h, stride, Key::new(0xFF)).unwrap();
        for y in 0..h {
            for x in 0..w {
                let i = y * stride + x * 4;
                assert_eq!(
                    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]],
                    [10 ^ 0xFF, 20 ^ 0xFF, 30 ^ 0xFF, (x * 10) as u8],
                    "strided keep_alpha y={y} x={x} tier={perm}"
                );
            }
            for i in (w * 4)..stride {
                assert_eq!(buf[y * stride + i], 0xCC, "padding y={y} i={i} tier={perm}");
            }
        }

        // Copy variant against the scalar reference
        let src = make_4bpp((stride / 4) * h);
        let mut dst = vec![0u8; stride * h];
        xor_keep_alpha_strided(&src, &mut dst, w, h, stride, stride, Key::new(0x42)).unwrap();
        for y in 0..h {
            let expected =
                ref_xor_keep_alpha(&src[y * stride..][..w * 4], 0x42);
            assert_eq!(
                &dst[y * stride..][..w * 4],
                expected.as_slice(),
                "strided keep_alpha copy y={y} tier={perm}"
            );
        }
    });
    std::eprintln!("strided_keep_alpha: {report}");
}

// -----------------------------------------------------------------------
// Transform properties
// -----------------------------------------------------------------------

#[test]
fn permutation_involution() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &n in TEST_BYTE_COUNTS {
            for &key in TEST_KEYS {
                let original = make_bytes(n);
                let mut data = original.clone();
                xor_inplace(&mut data, Key::new(key)).unwrap();
                xor_inplace(&mut data, Key::new(key)).unwrap();
                assert_eq!(data, original, "involution n={n} key={key} tier={perm}");
            }
        }
        // keep-alpha is an involution too
        let original = make_4bpp(33);
        let mut data = original.clone();
        xor_keep_alpha_inplace(&mut data, Key::new(0x99)).unwrap();
        xor_keep_alpha_inplace(&mut data, Key::new(0x99)).unwrap();
        assert_eq!(data, original, "keep_alpha involution tier={perm}");
    });
    std::eprintln!("involution: {report}");
}

#[test]
fn identity_key_copies_unchanged() {
    let src = make_bytes(100);
    let out = xor_to_vec(&src, Key::IDENTITY).unwrap();
    assert_eq!(out, src);

    let mut buf = make_bytes(100);
    xor_inplace(&mut buf, Key::new(0)).unwrap();
    assert_eq!(buf, src);
}

#[test]
fn raw_keys_equivalent_mod_256() {
    let src = make_bytes(64);
    for raw in [5i64, 5 + 256, 5 - 256, 5 + 256 * 7] {
        let out = xor_to_vec(&src, Key::from_raw(raw)).unwrap();
        assert_eq!(out, ref_xor(&src, 5), "raw={raw}");
    }
    assert_eq!(
        xor_to_vec(&src, Key::from_raw(-1)).unwrap(),
        ref_xor(&src, 255)
    );
}

#[test]
fn repeated_calls_are_deterministic() {
    let src = make_bytes(257);
    let a = xor_to_vec(&src, Key::new(0xA7)).unwrap();
    let b = xor_to_vec(&src, Key::new(0xA7)).unwrap();
    assert_eq!(a, b);
}

// Single RGB pixel [10, 200, 255] with key 5 → [15, 205, 250] and back.
#[test]
fn known_answer_single_pixel() {
    let px = [10u8, 200, 255];
    let masked = xor_to_vec(&px, Key::new(5)).unwrap();
    assert_eq!(masked, [15, 205, 250]);
    let restored = xor_to_vec(&masked, Key::new(5)).unwrap();
    assert_eq!(restored, px);
}

// -----------------------------------------------------------------------
// Size validation
// -----------------------------------------------------------------------

#[test]
fn test_size_errors() {
    assert_eq!(
        xor_inplace(&mut [0; 0], Key::new(1)),
        Err(BufferError::Empty)
    );
    assert_eq!(
        xor(&[0; 0], &mut [0; 4], Key::new(1)),
        Err(BufferError::Empty)
    );
    assert_eq!(xor_to_vec(&[0; 0], Key::new(1)), Err(BufferError::Empty));

    // dst smaller than src
    assert_eq!(
        xor(&[0; 8], &mut [0; 4], Key::new(1)),
        Err(BufferError::PixelCountMismatch)
    );

    // keep-alpha requires 4bpp alignment
    assert_eq!(
        xor_keep_alpha_inplace(&mut [0; 5], Key::new(1)),
        Err(BufferError::NotPixelAligned)
    );
    assert_eq!(
        xor_keep_alpha(&[0; 6], &mut [0; 8], Key::new(1)),
        Err(BufferError::NotPixelAligned)
    );
    assert_eq!(
        xor_keep_alpha_inplace(&mut [0; 0], Key::new(1)),
        Err(BufferError::Empty)
    );
}

#[test]
fn test_strided_size_errors() {
    // stride < width * bpp
    assert_eq!(
        xor_inplace_strided(&mut [0; 32], 2, 2, 4, 4, Key::new(1)),
        Err(BufferError::InvalidStride)
    );
    // buffer too small
    assert_eq!(
        xor_inplace_strided(&mut [0; 10], 2, 2, 8, 4, Key::new(1)),
        Err(BufferError::InvalidStride)
    );
    // zero width / height / bpp
    assert_eq!(
        xor_inplace_strided(&mut [0; 8], 0, 1, 8, 4, Key::new(1)),
        Err(BufferError::InvalidStride)
    );
    assert_eq!(
        xor_inplace_strided(&mut [0; 8], 2, 0, 8, 4, Key::new(1)),
        Err(BufferError::InvalidStride)
    );
    assert_eq!(
        xor_inplace_strided(&mut [0; 8], 2, 1, 8, 0, Key::new(1)),
        Err(BufferError::InvalidStride)
    );
    // dst geometry checked independently
    assert_eq!(
        xor_strided(&[0; 32], &mut [0; 4], 2, 2, 8, 8, 4, Key::new(1)),
        Err(BufferError::InvalidStride)
    );
}

// An error must leave the destination untouched.
#[test]
fn failed_validation_writes_nothing() {
    let mut dst = vec![0xEEu8; 4];
    assert!(xor(&[0; 8], &mut dst, Key::new(1)).is_err());
    assert_eq!(dst, vec![0xEE; 4]);
}
