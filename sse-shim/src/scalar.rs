// SSE Shim - sse-shim
// Module: Scalar Realization
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Scalar fallback realization of the SSE vocabulary.
//!
//! Every operation is expressed with plain loads, stores and per-lane integer
//! or float operations, so this module compiles and behaves identically on
//! any target. It is the reference the NEON realization is checked against.
//!
//! Float lanes are kept as raw `u32` bit patterns. They are only viewed as
//! `f32` inside [`_mm_cmpeq_ps`], which keeps NaN payloads intact through
//! loads, stores and bitwise operations.

#![allow(non_camel_case_types)]

use core::ptr;

use crate::movemask;

/// Four packed single-precision lanes, lane 0 at the lowest address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C, align(16))]
pub struct __m128 {
    bits: [u32; 4],
}

/// Sixteen packed byte lanes, lane 0 at the lowest address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C, align(16))]
pub struct __m128i {
    bytes: [u8; 16],
}

impl __m128 {
    #[inline(always)]
    const fn from_bits(bits: [u32; 4]) -> Self {
        Self { bits }
    }

    #[inline(always)]
    fn map2(self, other: Self, f: impl Fn(u32, u32) -> u32) -> Self {
        let mut bits = [0u32; 4];
        for (lane, out) in bits.iter_mut().enumerate() {
            *out = f(self.bits[lane], other.bits[lane]);
        }
        Self::from_bits(bits)
    }
}

impl __m128i {
    #[inline(always)]
    const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self { bytes }
    }

    #[inline(always)]
    fn map2(self, other: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        let mut bytes = [0u8; 16];
        for (lane, out) in bytes.iter_mut().enumerate() {
            *out = f(self.bytes[lane], other.bytes[lane]);
        }
        Self::from_bytes(bytes)
    }
}

// --- Load / Store ---

/// Loads four floats from `mem_addr`, which may have any alignment.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline]
pub unsafe fn _mm_loadu_ps(mem_addr: *const f32) -> __m128 {
    // SAFETY: the caller guarantees 16 readable bytes; no alignment is assumed.
    __m128::from_bits(unsafe { ptr::read_unaligned(mem_addr.cast::<[u32; 4]>()) })
}

/// Stores four floats to `mem_addr`, which may have any alignment.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline]
pub unsafe fn _mm_storeu_ps(mem_addr: *mut f32, a: __m128) {
    // SAFETY: the caller guarantees 16 writable bytes; no alignment is assumed.
    unsafe { ptr::write_unaligned(mem_addr.cast::<[u32; 4]>(), a.bits) }
}

/// Loads sixteen bytes from `mem_addr`.
///
/// The address is expected to be 16-byte aligned, but a misaligned address
/// produces the same value as [`_mm_loadu_si128`].
///
/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline]
pub unsafe fn _mm_load_si128(mem_addr: *const __m128i) -> __m128i {
    // SAFETY: forwarded caller contract.
    unsafe { _mm_loadu_si128(mem_addr) }
}

/// Loads sixteen bytes from `mem_addr`, which may have any alignment.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline]
pub unsafe fn _mm_loadu_si128(mem_addr: *const __m128i) -> __m128i {
    // SAFETY: the caller guarantees 16 readable bytes; no alignment is assumed.
    __m128i::from_bytes(unsafe { ptr::read_unaligned(mem_addr.cast::<[u8; 16]>()) })
}

/// Stores sixteen bytes to `mem_addr`.
///
/// A misaligned address behaves like [`_mm_storeu_si128`].
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline]
pub unsafe fn _mm_store_si128(mem_addr: *mut __m128i, a: __m128i) {
    // SAFETY: forwarded caller contract.
    unsafe { _mm_storeu_si128(mem_addr, a) }
}

/// Stores sixteen bytes to `mem_addr`, which may have any alignment.
///
/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline]
pub unsafe fn _mm_storeu_si128(mem_addr: *mut __m128i, a: __m128i) {
    // SAFETY: the caller guarantees 16 writable bytes; no alignment is assumed.
    unsafe { ptr::write_unaligned(mem_addr.cast::<[u8; 16]>(), a.bytes) }
}

// --- Float Logic ---

/// Lane-wise IEEE-754 equality; each lane becomes all-ones or all-zeros.
#[inline]
pub fn _mm_cmpeq_ps(a: __m128, b: __m128) -> __m128 {
    a.map2(b, |x, y| {
        if f32::from_bits(x) == f32::from_bits(y) {
            u32::MAX
        } else {
            0
        }
    })
}

/// Bitwise AND of the raw lane bit patterns.
#[inline]
pub fn _mm_and_ps(a: __m128, b: __m128) -> __m128 {
    a.map2(b, |x, y| x & y)
}

// --- Integer Logic ---

/// All sixteen lanes zero.
#[inline]
pub fn _mm_setzero_si128() -> __m128i {
    __m128i::from_bytes([0; 16])
}

/// All sixteen lanes set to `a`.
#[inline]
pub fn _mm_set1_epi8(a: i8) -> __m128i {
    __m128i::from_bytes([a as u8; 16])
}

/// Lane-wise byte equality; each lane becomes `0xFF` or `0x00`.
#[inline]
pub fn _mm_cmpeq_epi8(a: __m128i, b: __m128i) -> __m128i {
    a.map2(b, |x, y| if x == y { 0xFF } else { 0x00 })
}

/// Bitwise AND.
#[inline]
pub fn _mm_and_si128(a: __m128i, b: __m128i) -> __m128i {
    a.map2(b, |x, y| x & y)
}

/// Bitwise OR.
#[inline]
pub fn _mm_or_si128(a: __m128i, b: __m128i) -> __m128i {
    a.map2(b, |x, y| x | y)
}

/// Bitwise XOR.
#[inline]
pub fn _mm_xor_si128(a: __m128i, b: __m128i) -> __m128i {
    a.map2(b, |x, y| x ^ y)
}

/// Collects the high bit of each byte lane into bits 0..16 of the result.
#[inline]
pub fn _mm_movemask_epi8(a: __m128i) -> i32 {
    i32::from(movemask::sign_mask_scalar_loop(&a.bytes))
}

/// Spin-loop hint. Never required for correctness.
#[inline]
pub fn _mm_pause() {
    core::hint::spin_loop();
}
