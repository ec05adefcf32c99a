// SSE Shim - sse-shim
// Module: Library Root
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! SSE vocabulary shim.
//!
//! Exposes a fixed subset of the x86 SSE/SSE2 intrinsic vocabulary
//! (`__m128`, `__m128i` and the `_mm_*` operations used by lock-free and
//! byte-scanning code) under the same names and signatures as
//! `core::arch::x86_64`, so that code written against that vocabulary builds
//! unchanged on other targets.
//!
//! Exactly one realization backs the crate-root items, chosen at build time:
//!
//! - `neon` feature on AArch64: NEON registers and instructions ([`neon`]).
//! - otherwise: a portable scalar model ([`scalar`]).
//!
//! On x86_64 the real instructions are wrapped in `native` for
//! cross-validation only; they are never exported at the root.
//!
//! ```
//! use sse_shim::{_mm_cmpeq_epi8, _mm_movemask_epi8, _mm_set1_epi8};
//! use sse_shim::checked::from_bytes;
//!
//! let mut haystack = [b'.'; 16];
//! haystack[5] = b'/';
//! let hits = _mm_cmpeq_epi8(from_bytes(haystack), _mm_set1_epi8(b'/' as i8));
//! assert_eq!(_mm_movemask_epi8(hits), 1 << 5);
//! ```

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

// Realizations
#[cfg(target_arch = "x86_64")]
pub mod native;
#[cfg(target_arch = "aarch64")]
pub mod neon;
pub mod scalar;

pub mod checked;
pub mod guard;
pub mod movemask;
pub mod prelude;
pub mod provider;
pub mod realization;
pub mod spin;

// The crate-root vocabulary
#[cfg(sse_shim_neon)]
pub use neon::{
    __m128, __m128i, _mm_and_ps, _mm_and_si128, _mm_cmpeq_epi8, _mm_cmpeq_ps, _mm_load_si128,
    _mm_loadu_ps, _mm_loadu_si128, _mm_movemask_epi8, _mm_or_si128, _mm_pause, _mm_set1_epi8,
    _mm_setzero_si128, _mm_store_si128, _mm_storeu_ps, _mm_storeu_si128, _mm_xor_si128,
};
#[cfg(not(sse_shim_neon))]
pub use scalar::{
    __m128, __m128i, _mm_and_ps, _mm_and_si128, _mm_cmpeq_epi8, _mm_cmpeq_ps, _mm_load_si128,
    _mm_loadu_ps, _mm_loadu_si128, _mm_movemask_epi8, _mm_or_si128, _mm_pause, _mm_set1_epi8,
    _mm_setzero_si128, _mm_store_si128, _mm_storeu_ps, _mm_storeu_si128, _mm_xor_si128,
};

pub use movemask::MovemaskStrategy;
#[cfg(target_arch = "x86_64")]
pub use provider::NativeSse;
#[cfg(target_arch = "aarch64")]
pub use provider::NeonSse;
pub use provider::{ActiveSse, ScalarSse, SseVocabulary};
pub use realization::{Capabilities, Realization};
pub use spin::{SpinWait, SpinWaitBuilder};
pub use sse_shim_error::{Error, ErrorCategory, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_vocabulary_is_the_active_realization() {
        let p = ActiveSse::default();
        let a = checked::from_bytes([0x80; 16]);
        assert_eq!(_mm_movemask_epi8(a), p.movemask_epi8(p.u8x16_from_bytes([0x80; 16])));
        assert_eq!(Capabilities::active().realization, ActiveSse::REALIZATION);
    }

    #[test]
    fn test_vector_types_are_sixteen_bytes() {
        assert_eq!(core::mem::size_of::<__m128>(), 16);
        assert_eq!(core::mem::size_of::<__m128i>(), 16);
        assert_eq!(core::mem::align_of::<__m128i>(), 16);
    }
}
