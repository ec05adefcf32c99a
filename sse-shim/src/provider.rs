// SSE Shim - sse-shim
// Module: Vocabulary Providers
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Provider trait over the fixed SSE vocabulary.
//!
//! Each realization is reachable both through its module's `_mm_*` free
//! functions and through a zero-sized provider implementing
//! [`SseVocabulary`]. The crate root re-exports exactly one module's
//! functions; the providers exist so the same generic test or benchmark can
//! drive every realization compiled for the target. Dispatch is static.

use crate::realization::Realization;

/// The fixed SSE operation set, realized over some pair of 128-bit types.
///
/// Pointers are byte- or float-typed so the trait does not depend on any
/// realization's `__m128i`. All loads and stores accept any alignment.
pub trait SseVocabulary: Copy + Default + Send + Sync + 'static {
    /// Four packed `f32` lanes.
    type Float4: Copy;
    /// Sixteen packed `u8` lanes.
    type Byte16: Copy;

    /// Which realization this provider implements.
    const REALIZATION: Realization;

    /// `_mm_loadu_ps`
    ///
    /// # Safety
    ///
    /// `src` must be valid for reading 16 bytes.
    unsafe fn loadu_ps(&self, src: *const f32) -> Self::Float4;
    /// `_mm_storeu_ps`
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writing 16 bytes.
    unsafe fn storeu_ps(&self, dst: *mut f32, a: Self::Float4);
    /// `_mm_load_si128`
    ///
    /// # Safety
    ///
    /// `src` must be valid for reading 16 bytes.
    unsafe fn load_si128(&self, src: *const u8) -> Self::Byte16;
    /// `_mm_loadu_si128`
    ///
    /// # Safety
    ///
    /// `src` must be valid for reading 16 bytes.
    unsafe fn loadu_si128(&self, src: *const u8) -> Self::Byte16;
    /// `_mm_store_si128`
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writing 16 bytes.
    unsafe fn store_si128(&self, dst: *mut u8, a: Self::Byte16);
    /// `_mm_storeu_si128`
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writing 16 bytes.
    unsafe fn storeu_si128(&self, dst: *mut u8, a: Self::Byte16);

    /// `_mm_cmpeq_ps`
    fn cmpeq_ps(&self, a: Self::Float4, b: Self::Float4) -> Self::Float4;
    /// `_mm_and_ps`
    fn and_ps(&self, a: Self::Float4, b: Self::Float4) -> Self::Float4;

    /// `_mm_setzero_si128`
    fn setzero_si128(&self) -> Self::Byte16;
    /// `_mm_set1_epi8`
    fn set1_epi8(&self, a: i8) -> Self::Byte16;
    /// `_mm_cmpeq_epi8`
    fn cmpeq_epi8(&self, a: Self::Byte16, b: Self::Byte16) -> Self::Byte16;
    /// `_mm_and_si128`
    fn and_si128(&self, a: Self::Byte16, b: Self::Byte16) -> Self::Byte16;
    /// `_mm_or_si128`
    fn or_si128(&self, a: Self::Byte16, b: Self::Byte16) -> Self::Byte16;
    /// `_mm_xor_si128`
    fn xor_si128(&self, a: Self::Byte16, b: Self::Byte16) -> Self::Byte16;
    /// `_mm_movemask_epi8`
    fn movemask_epi8(&self, a: Self::Byte16) -> i32;
    /// `_mm_pause`
    fn pause(&self);

    /// Builds a float vector from raw lane bit patterns.
    fn f32x4_from_bits(&self, bits: [u32; 4]) -> Self::Float4 {
        // SAFETY: `bits` is 16 readable bytes.
        unsafe { self.loadu_ps(bits.as_ptr().cast()) }
    }

    /// Raw lane bit patterns of a float vector.
    fn f32x4_to_bits(&self, a: Self::Float4) -> [u32; 4] {
        let mut bits = [0u32; 4];
        // SAFETY: `bits` is 16 writable bytes.
        unsafe { self.storeu_ps(bits.as_mut_ptr().cast(), a) };
        bits
    }

    /// Builds a byte vector from sixteen lanes.
    fn u8x16_from_bytes(&self, bytes: [u8; 16]) -> Self::Byte16 {
        // SAFETY: `bytes` is 16 readable bytes.
        unsafe { self.loadu_si128(bytes.as_ptr()) }
    }

    /// The sixteen lanes of a byte vector.
    fn u8x16_to_bytes(&self, a: Self::Byte16) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        // SAFETY: `bytes` is 16 writable bytes.
        unsafe { self.storeu_si128(bytes.as_mut_ptr(), a) };
        bytes
    }
}

macro_rules! impl_sse_vocabulary {
    ($provider:ty, $module:ident, $realization:expr) => {
        impl SseVocabulary for $provider {
            type Float4 = crate::$module::__m128;
            type Byte16 = crate::$module::__m128i;

            const REALIZATION: Realization = $realization;

            #[inline]
            unsafe fn loadu_ps(&self, src: *const f32) -> Self::Float4 {
                // SAFETY: forwarded caller contract.
                unsafe { crate::$module::_mm_loadu_ps(src) }
            }

            #[inline]
            unsafe fn storeu_ps(&self, dst: *mut f32, a: Self::Float4) {
                // SAFETY: forwarded caller contract.
                unsafe { crate::$module::_mm_storeu_ps(dst, a) }
            }

            #[inline]
            unsafe fn load_si128(&self, src: *const u8) -> Self::Byte16 {
                // SAFETY: forwarded caller contract.
                unsafe { crate::$module::_mm_load_si128(src.cast()) }
            }

            #[inline]
            unsafe fn loadu_si128(&self, src: *const u8) -> Self::Byte16 {
                // SAFETY: forwarded caller contract.
                unsafe { crate::$module::_mm_loadu_si128(src.cast()) }
            }

            #[inline]
            unsafe fn store_si128(&self, dst: *mut u8, a: Self::Byte16) {
                // SAFETY: forwarded caller contract.
                unsafe { crate::$module::_mm_store_si128(dst.cast(), a) }
            }

            #[inline]
            unsafe fn storeu_si128(&self, dst: *mut u8, a: Self::Byte16) {
                // SAFETY: forwarded caller contract.
                unsafe { crate::$module::_mm_storeu_si128(dst.cast(), a) }
            }

            #[inline]
            fn cmpeq_ps(&self, a: Self::Float4, b: Self::Float4) -> Self::Float4 {
                crate::$module::_mm_cmpeq_ps(a, b)
            }

            #[inline]
            fn and_ps(&self, a: Self::Float4, b: Self::Float4) -> Self::Float4 {
                crate::$module::_mm_and_ps(a, b)
            }

            #[inline]
            fn setzero_si128(&self) -> Self::Byte16 {
                crate::$module::_mm_setzero_si128()
            }

            #[inline]
            fn set1_epi8(&self, a: i8) -> Self::Byte16 {
                crate::$module::_mm_set1_epi8(a)
            }

            #[inline]
            fn cmpeq_epi8(&self, a: Self::Byte16, b: Self::Byte16) -> Self::Byte16 {
                crate::$module::_mm_cmpeq_epi8(a, b)
            }

            #[inline]
            fn and_si128(&self, a: Self::Byte16, b: Self::Byte16) -> Self::Byte16 {
                crate::$module::_mm_and_si128(a, b)
            }

            #[inline]
            fn or_si128(&self, a: Self::Byte16, b: Self::Byte16) -> Self::Byte16 {
                crate::$module::_mm_or_si128(a, b)
            }

            #[inline]
            fn xor_si128(&self, a: Self::Byte16, b: Self::Byte16) -> Self::Byte16 {
                crate::$module::_mm_xor_si128(a, b)
            }

            #[inline]
            fn movemask_epi8(&self, a: Self::Byte16) -> i32 {
                crate::$module::_mm_movemask_epi8(a)
            }

            #[inline]
            fn pause(&self) {
                crate::$module::_mm_pause();
            }
        }
    };
}

/// Scalar fallback provider, available on every target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScalarSse;

impl_sse_vocabulary!(ScalarSse, scalar, Realization::Scalar);

/// NEON provider, available on every AArch64 target regardless of which
/// realization the crate root exports.
#[cfg(target_arch = "aarch64")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NeonSse;

#[cfg(target_arch = "aarch64")]
impl_sse_vocabulary!(NeonSse, neon, Realization::Neon);

/// The real SSE2 instructions on x86_64, used as a cross-check.
#[cfg(target_arch = "x86_64")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NativeSse;

#[cfg(target_arch = "x86_64")]
impl_sse_vocabulary!(NativeSse, native, Realization::NativeSse);

/// Provider backing the crate-root `_mm_*` functions.
#[cfg(sse_shim_neon)]
pub type ActiveSse = NeonSse;
/// Provider backing the crate-root `_mm_*` functions.
#[cfg(not(sse_shim_neon))]
pub type ActiveSse = ScalarSse;
