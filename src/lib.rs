//! # masq
//!
//! *Every pixel deserves a disguise.*
//!
//! Slip a mask over your image before it leaves the house. XOR every byte
//! with a fixed 8-bit key and the picture turns to confetti; XOR it again
//! with the same key and it comes right back. One operation, both directions.
//!
//! SIMD-optimized XOR obfuscation for row-level and whole-image operations.
//! Supports x86-64 AVX2, ARM NEON, and WASM SIMD128 with automatic fallback
//! to scalar code.
//!
//! This is a costume, not a vault: a single repeating key byte is trivially
//! broken by frequency or known-plaintext analysis. Use it to keep honest
//! eyes off a thumbnail, not to protect secrets.
//!
//! ## Core operations (always available)
//!
//! All functions in the crate root operate on raw `&[u8]` / `&mut [u8]`
//! slices. They are the SIMD-accelerated building blocks.
//!
//! ## Feature flags
//!
//! - **`rgb`** — Typed-slice operations using [`rgb`] crate pixel types
//!   (`Rgb<u8>`, `Rgba<u8>`, `Bgra<u8>`, etc.) via bytemuck.
//! - **`imgref`** — Whole-image operations using [`imgref`] types
//!   (`ImgRef`, `ImgVec`). Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod key;

pub use key::Key;

pub mod bytes;

pub use bytes::*;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod img;

/// Buffer validation failure. Returned before any byte is written; on `Err`
/// the destination (if any) is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The buffer contains zero bytes.
    Empty,
    /// A 4 bpp operation was given a length not divisible by 4.
    NotPixelAligned,
    /// The destination holds fewer bytes than the source provides.
    PixelCountMismatch,
    /// Zero width/height/bpp, stride smaller than a row, or a buffer too
    /// small for `(height - 1) * stride + width * bpp`.
    InvalidStride,
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferError::Empty => f.write_str("buffer is empty"),
            BufferError::NotPixelAligned => f.write_str("buffer length is not pixel-aligned"),
            BufferError::PixelCountMismatch => f.write_str("destination is smaller than source"),
            BufferError::InvalidStride => f.write_str("invalid stride geometry"),
        }
    }
}

impl core::error::Error for BufferError {}
