// SSE Shim - sse-shim
// Module: Checked Slice Transfers
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Safe loads and stores over slices, using the active realization.
//!
//! Each call moves exactly 16 bytes from the front of the slice and accepts
//! any alignment. A slice that is too short is rejected before any memory is
//! touched.

use sse_shim_error::{Error, Result};

use crate::{__m128, __m128i, _mm_loadu_ps, _mm_loadu_si128, _mm_storeu_ps, _mm_storeu_si128};

/// Bytes in one vector value.
pub const VECTOR_BYTES: usize = 16;
/// `f32` lanes in one [`__m128`].
pub const F32_LANES: usize = 4;

/// Loads the first four lanes of `src`.
///
/// # Errors
///
/// [`Error::SOURCE_TOO_SHORT`] when `src` has fewer than four lanes.
pub fn load_ps(src: &[f32]) -> Result<__m128> {
    if src.len() < F32_LANES {
        #[cfg(feature = "log")]
        log::debug!("float load rejected: {} of {} lanes available", src.len(), F32_LANES);
        return Err(Error::SOURCE_TOO_SHORT);
    }
    // SAFETY: `src` holds at least four readable `f32` lanes.
    Ok(unsafe { _mm_loadu_ps(src.as_ptr()) })
}

/// Stores `a` into the first four lanes of `dst`.
///
/// # Errors
///
/// [`Error::DESTINATION_TOO_SHORT`] when `dst` has fewer than four lanes.
pub fn store_ps(dst: &mut [f32], a: __m128) -> Result<()> {
    if dst.len() < F32_LANES {
        #[cfg(feature = "log")]
        log::debug!("float store rejected: {} of {} lanes available", dst.len(), F32_LANES);
        return Err(Error::DESTINATION_TOO_SHORT);
    }
    // SAFETY: `dst` holds at least four writable `f32` lanes.
    unsafe { _mm_storeu_ps(dst.as_mut_ptr(), a) };
    Ok(())
}

/// Loads the first sixteen bytes of `src`.
///
/// # Errors
///
/// [`Error::SOURCE_TOO_SHORT`] when `src` is shorter than 16 bytes.
pub fn load_si128(src: &[u8]) -> Result<__m128i> {
    if src.len() < VECTOR_BYTES {
        #[cfg(feature = "log")]
        log::debug!("byte load rejected: {} of {} bytes available", src.len(), VECTOR_BYTES);
        return Err(Error::SOURCE_TOO_SHORT);
    }
    // SAFETY: `src` holds at least 16 readable bytes.
    Ok(unsafe { _mm_loadu_si128(src.as_ptr().cast()) })
}

/// Stores `a` into the first sixteen bytes of `dst`.
///
/// # Errors
///
/// [`Error::DESTINATION_TOO_SHORT`] when `dst` is shorter than 16 bytes.
pub fn store_si128(dst: &mut [u8], a: __m128i) -> Result<()> {
    if dst.len() < VECTOR_BYTES {
        #[cfg(feature = "log")]
        log::debug!("byte store rejected: {} of {} bytes available", dst.len(), VECTOR_BYTES);
        return Err(Error::DESTINATION_TOO_SHORT);
    }
    // SAFETY: `dst` holds at least 16 writable bytes.
    unsafe { _mm_storeu_si128(dst.as_mut_ptr().cast(), a) };
    Ok(())
}

/// Sixteen lanes of `a` as an array.
pub fn to_bytes(a: __m128i) -> [u8; 16] {
    let mut bytes = [0u8; VECTOR_BYTES];
    // SAFETY: `bytes` is 16 writable bytes.
    unsafe { _mm_storeu_si128(bytes.as_mut_ptr().cast(), a) };
    bytes
}

/// Builds a byte vector from an array.
pub fn from_bytes(bytes: [u8; 16]) -> __m128i {
    // SAFETY: `bytes` is 16 readable bytes.
    unsafe { _mm_loadu_si128(bytes.as_ptr().cast()) }
}

/// Raw bit patterns of the four lanes of `a`.
pub fn to_bits(a: __m128) -> [u32; 4] {
    let mut bits = [0u32; F32_LANES];
    // SAFETY: `bits` is 16 writable bytes.
    unsafe { _mm_storeu_ps(bits.as_mut_ptr().cast(), a) };
    bits
}

/// Builds a float vector from raw lane bit patterns.
pub fn from_bits(bits: [u32; 4]) -> __m128 {
    // SAFETY: `bits` is 16 readable bytes.
    unsafe { _mm_loadu_ps(bits.as_ptr().cast()) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sse_shim_error::{codes, ErrorCategory};

    use super::*;

    #[test]
    fn test_short_sources_are_rejected() {
        let err = load_si128(&[0u8; 15]).unwrap_err();
        assert_eq!(err, Error::SOURCE_TOO_SHORT);

        let err = load_ps(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err.category, ErrorCategory::Memory);
        assert_eq!(err.code, codes::SOURCE_TOO_SHORT);
    }

    #[test]
    fn test_short_destinations_are_untouched() {
        let mut dst = [0xAAu8; 8];
        let err = store_si128(&mut dst, from_bytes([0x55; 16])).unwrap_err();
        assert_eq!(err, Error::DESTINATION_TOO_SHORT);
        assert_eq!(dst, [0xAA; 8]);

        let mut floats = [9.0f32; 2];
        let err = store_ps(&mut floats, from_bits([0; 4])).unwrap_err();
        assert_eq!(err.code, codes::DESTINATION_TOO_SHORT);
        assert_eq!(floats, [9.0; 2]);
    }

    #[test]
    fn test_float_and_byte_rejections_share_errors() {
        assert_eq!(load_ps(&[0.0; 3]).unwrap_err(), Error::SOURCE_TOO_SHORT);
        assert_eq!(load_si128(&[0; 15]).unwrap_err(), Error::SOURCE_TOO_SHORT);
        assert_eq!(store_ps(&mut [0.0; 3], from_bits([0; 4])), Err(Error::DESTINATION_TOO_SHORT));
        assert_eq!(store_si128(&mut [0; 15], from_bytes([0; 16])), Err(Error::DESTINATION_TOO_SHORT));
    }

    #[test]
    fn test_only_the_first_vector_is_written() {
        let mut dst = [0u8; 20];
        store_si128(&mut dst[1..], from_bytes([0xEE; 16])).unwrap();
        assert_eq!(dst[0], 0);
        assert_eq!(&dst[1..17], &[0xEE; 16]);
        assert_eq!(&dst[17..], &[0, 0, 0]);
    }

    #[test]
    fn test_float_round_trip_at_odd_offset() {
        let src = [0.0f32, 1.5, -2.25, f32::INFINITY, 4.0, 99.0];
        let v = load_ps(&src[1..]).unwrap();
        let mut out = [0.0f32; 5];
        store_ps(&mut out[1..], v).unwrap();
        assert_eq!(&out[1..], &src[1..5]);
        assert_eq!(out[0], 0.0);
    }

    #[test]
    fn test_bit_helpers() {
        let bits = [0x7FC0_1234, 0, 0x8000_0000, 0x3F80_0000];
        assert_eq!(to_bits(from_bits(bits)), bits);
        assert_eq!(to_bytes(from_bytes([7; 16])), [7; 16]);
    }
}
