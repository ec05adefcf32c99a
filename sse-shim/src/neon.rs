// SSE Shim - sse-shim
// Module: NEON Realization
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! AArch64 NEON realization of the SSE vocabulary.
//!
//! `__m128` and `__m128i` are aliases of the native NEON register types, so
//! values never round-trip through memory between operations. Every
//! operation except sign mask extraction maps onto a single NEON instruction.
//! NEON loads and stores carry no alignment requirement, which makes the
//! aligned and unaligned variants identical.

#![allow(non_camel_case_types)]
#![allow(unused_unsafe)]

use core::arch::aarch64::{
    float32x4_t, uint8x16_t, vandq_u8, vandq_u32, vceqq_f32, vceqq_u8, vdupq_n_u8, veorq_u8,
    vld1q_f32, vld1q_u8, vorrq_u8, vreinterpretq_f32_u32, vreinterpretq_u32_f32, vst1q_f32,
    vst1q_u8,
};

use crate::movemask;

/// Four packed single-precision lanes held in a NEON register.
pub type __m128 = float32x4_t;
/// Sixteen packed byte lanes held in a NEON register.
pub type __m128i = uint8x16_t;

// --- Load / Store ---

/// Loads four floats from `mem_addr` (`vld1q_f32`).
///
/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline]
pub unsafe fn _mm_loadu_ps(mem_addr: *const f32) -> __m128 {
    // SAFETY: forwarded caller contract; vld1q has no alignment requirement.
    unsafe { vld1q_f32(mem_addr) }
}

/// Stores four floats to `mem_addr` (`vst1q_f32`).
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline]
pub unsafe fn _mm_storeu_ps(mem_addr: *mut f32, a: __m128) {
    // SAFETY: forwarded caller contract; vst1q has no alignment requirement.
    unsafe { vst1q_f32(mem_addr, a) }
}

/// Loads sixteen bytes from `mem_addr` (`vld1q_u8`).
///
/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline]
pub unsafe fn _mm_load_si128(mem_addr: *const __m128i) -> __m128i {
    // SAFETY: forwarded caller contract.
    unsafe { vld1q_u8(mem_addr.cast::<u8>()) }
}

/// Loads sixteen bytes from `mem_addr` (`vld1q_u8`).
///
/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline]
pub unsafe fn _mm_loadu_si128(mem_addr: *const __m128i) -> __m128i {
    // SAFETY: forwarded caller contract.
    unsafe { vld1q_u8(mem_addr.cast::<u8>()) }
}

/// Stores sixteen bytes to `mem_addr` (`vst1q_u8`).
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline]
pub unsafe fn _mm_store_si128(mem_addr: *mut __m128i, a: __m128i) {
    // SAFETY: forwarded caller contract.
    unsafe { vst1q_u8(mem_addr.cast::<u8>(), a) }
}

/// Stores sixteen bytes to `mem_addr` (`vst1q_u8`).
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline]
pub unsafe fn _mm_storeu_si128(mem_addr: *mut __m128i, a: __m128i) {
    // SAFETY: forwarded caller contract.
    unsafe { vst1q_u8(mem_addr.cast::<u8>(), a) }
}

// --- Float Logic ---

/// Lane-wise IEEE-754 equality (`vceqq_f32`), reinterpreted as floats.
#[inline]
pub fn _mm_cmpeq_ps(a: __m128, b: __m128) -> __m128 {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe { vreinterpretq_f32_u32(vceqq_f32(a, b)) }
}

/// Bitwise AND of the raw lane bit patterns (`vandq_u32`).
#[inline]
pub fn _mm_and_ps(a: __m128, b: __m128) -> __m128 {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe {
        vreinterpretq_f32_u32(vandq_u32(
            vreinterpretq_u32_f32(a),
            vreinterpretq_u32_f32(b),
        ))
    }
}

// --- Integer Logic ---

/// All sixteen lanes zero (`vdupq_n_u8(0)`).
#[inline]
pub fn _mm_setzero_si128() -> __m128i {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe { vdupq_n_u8(0) }
}

/// All sixteen lanes set to `a` (`vdupq_n_u8`).
#[inline]
pub fn _mm_set1_epi8(a: i8) -> __m128i {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe { vdupq_n_u8(a as u8) }
}

/// Lane-wise byte equality (`vceqq_u8`).
#[inline]
pub fn _mm_cmpeq_epi8(a: __m128i, b: __m128i) -> __m128i {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe { vceqq_u8(a, b) }
}

/// Bitwise AND (`vandq_u8`).
#[inline]
pub fn _mm_and_si128(a: __m128i, b: __m128i) -> __m128i {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe { vandq_u8(a, b) }
}

/// Bitwise OR (`vorrq_u8`).
#[inline]
pub fn _mm_or_si128(a: __m128i, b: __m128i) -> __m128i {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe { vorrq_u8(a, b) }
}

/// Bitwise XOR (`veorq_u8`).
#[inline]
pub fn _mm_xor_si128(a: __m128i, b: __m128i) -> __m128i {
    // SAFETY: NEON is part of the AArch64 baseline.
    unsafe { veorq_u8(a, b) }
}

/// Collects the high bit of each byte lane into bits 0..16 of the result.
///
/// Uses the weighted reduction unless the `movemask-scalar-loop` feature
/// selects the store-and-loop strategy.
#[inline]
pub fn _mm_movemask_epi8(a: __m128i) -> i32 {
    #[cfg(not(feature = "movemask-scalar-loop"))]
    let mask = movemask::sign_mask_weighted_reduction(a);
    #[cfg(feature = "movemask-scalar-loop")]
    let mask = movemask::sign_mask_spilled(a);
    i32::from(mask)
}

/// Issues the AArch64 `yield` hint for spin-wait loops.
#[inline]
pub fn _mm_pause() {
    // SAFETY: `yield` has no architectural side effects.
    unsafe {
        core::arch::asm!("yield", options(nomem, nostack, preserves_flags));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_of(a: __m128i) -> [u8; 16] {
        let mut out = [0u8; 16];
        unsafe { _mm_storeu_si128(out.as_mut_ptr().cast(), a) };
        out
    }

    fn bits_of(a: __m128) -> [u32; 4] {
        let mut out = [0u32; 4];
        unsafe { _mm_storeu_ps(out.as_mut_ptr().cast(), a) };
        out
    }

    #[test]
    fn test_cmpeq_ps_follows_ieee_equality() {
        let a = unsafe { _mm_loadu_ps([1.0f32, -0.0, f32::NAN, f32::INFINITY].as_ptr()) };
        let b = unsafe { _mm_loadu_ps([1.0f32, 0.0, f32::NAN, f32::INFINITY].as_ptr()) };
        assert_eq!(bits_of(_mm_cmpeq_ps(a, b)), [u32::MAX, u32::MAX, 0, u32::MAX]);
    }

    #[test]
    fn test_misaligned_byte_round_trip() {
        let mut backing = [0u8; 40];
        for (i, byte) in backing.iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(13);
        }
        let snapshot = backing;
        for offset in 0..16 {
            let p = backing[offset..].as_mut_ptr().cast::<__m128i>();
            unsafe {
                let v = _mm_load_si128(p);
                _mm_store_si128(p, v);
            }
        }
        assert_eq!(backing, snapshot);
    }

    #[test]
    fn test_movemask_concrete_cases() {
        assert_eq!(_mm_movemask_epi8(_mm_set1_epi8(-1)), 0xFFFF);
        assert_eq!(_mm_movemask_epi8(_mm_setzero_si128()), 0);

        let mut raw = [0u8; 16];
        raw[3] = 0x80;
        raw[10] = 0x80;
        let v = unsafe { _mm_loadu_si128(raw.as_ptr().cast()) };
        assert_eq!(_mm_movemask_epi8(v), 0x0408);
    }

    #[test]
    fn test_xor_self_is_zero() {
        let v = _mm_set1_epi8(0x6B);
        assert_eq!(bytes_of(_mm_xor_si128(v, v)), [0; 16]);
        assert_eq!(bytes_of(_mm_and_si128(v, _mm_xor_si128(v, v))), bytes_of(_mm_setzero_si128()));
    }

    #[test]
    fn test_pause_returns() {
        _mm_pause();
    }
}
