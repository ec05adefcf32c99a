// SSE Shim - sse-shim
// Module: Native SSE Reference
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The real SSE2 vocabulary on x86_64, behind the same function shapes as
//! the shim realizations.
//!
//! Nothing here replaces anything: this is the behaviour both shim
//! realizations must reproduce, exposed so tests and benchmarks on x86 hosts
//! can compare them against the real instructions. SSE2 is part of the
//! x86_64 baseline, so no runtime detection is involved.

#![allow(non_camel_case_types)]
#![allow(unused_unsafe)]

use core::arch::x86_64 as arch;

/// Native four-lane float register.
pub type __m128 = arch::__m128;
/// Native sixteen-lane integer register.
pub type __m128i = arch::__m128i;

/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline]
pub unsafe fn _mm_loadu_ps(mem_addr: *const f32) -> __m128 {
    // SAFETY: forwarded caller contract.
    unsafe { arch::_mm_loadu_ps(mem_addr) }
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline]
pub unsafe fn _mm_storeu_ps(mem_addr: *mut f32, a: __m128) {
    // SAFETY: forwarded caller contract.
    unsafe { arch::_mm_storeu_ps(mem_addr, a) }
}

/// Native `movdqa` requires 16-byte alignment, so this goes through the
/// unaligned load to keep the shim's "misuse still yields the value"
/// contract comparable.
///
/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline]
pub unsafe fn _mm_load_si128(mem_addr: *const __m128i) -> __m128i {
    // SAFETY: forwarded caller contract.
    unsafe {
        if mem_addr.is_aligned() {
            arch::_mm_load_si128(mem_addr)
        } else {
            arch::_mm_loadu_si128(mem_addr)
        }
    }
}

/// # Safety
///
/// `mem_addr` must be valid for reading 16 bytes.
#[inline]
pub unsafe fn _mm_loadu_si128(mem_addr: *const __m128i) -> __m128i {
    // SAFETY: forwarded caller contract.
    unsafe { arch::_mm_loadu_si128(mem_addr) }
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline]
pub unsafe fn _mm_store_si128(mem_addr: *mut __m128i, a: __m128i) {
    // SAFETY: forwarded caller contract.
    unsafe {
        if mem_addr.is_aligned() {
            arch::_mm_store_si128(mem_addr, a);
        } else {
            arch::_mm_storeu_si128(mem_addr, a);
        }
    }
}

/// # Safety
///
/// `mem_addr` must be valid for writing 16 bytes.
#[inline]
pub unsafe fn _mm_storeu_si128(mem_addr: *mut __m128i, a: __m128i) {
    // SAFETY: forwarded caller contract.
    unsafe { arch::_mm_storeu_si128(mem_addr, a) }
}

/// `cmpeqps`
#[inline]
pub fn _mm_cmpeq_ps(a: __m128, b: __m128) -> __m128 {
    // SAFETY: SSE is part of the x86_64 baseline.
    unsafe { arch::_mm_cmpeq_ps(a, b) }
}

/// `andps`
#[inline]
pub fn _mm_and_ps(a: __m128, b: __m128) -> __m128 {
    // SAFETY: SSE is part of the x86_64 baseline.
    unsafe { arch::_mm_and_ps(a, b) }
}

/// `pxor` of a register with itself
#[inline]
pub fn _mm_setzero_si128() -> __m128i {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe { arch::_mm_setzero_si128() }
}

/// Byte broadcast
#[inline]
pub fn _mm_set1_epi8(a: i8) -> __m128i {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe { arch::_mm_set1_epi8(a) }
}

/// `pcmpeqb`
#[inline]
pub fn _mm_cmpeq_epi8(a: __m128i, b: __m128i) -> __m128i {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe { arch::_mm_cmpeq_epi8(a, b) }
}

/// `pand`
#[inline]
pub fn _mm_and_si128(a: __m128i, b: __m128i) -> __m128i {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe { arch::_mm_and_si128(a, b) }
}

/// `por`
#[inline]
pub fn _mm_or_si128(a: __m128i, b: __m128i) -> __m128i {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe { arch::_mm_or_si128(a, b) }
}

/// `pxor`
#[inline]
pub fn _mm_xor_si128(a: __m128i, b: __m128i) -> __m128i {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe { arch::_mm_xor_si128(a, b) }
}

/// `pmovmskb`
#[inline]
pub fn _mm_movemask_epi8(a: __m128i) -> i32 {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe { arch::_mm_movemask_epi8(a) }
}

/// `pause`
#[inline]
pub fn _mm_pause() {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe { arch::_mm_pause() }
}
