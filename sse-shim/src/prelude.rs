// SSE Shim - sse-shim
// Module: Crate Prelude
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Public prelude for the `sse-shim` crate.
//!
//! `use sse_shim::prelude::*;` brings in the whole crate-root vocabulary and
//! the supporting types, mirroring `use core::arch::x86_64::*;`.

pub use sse_shim_error::{Error, ErrorCategory, Result};

pub use crate::{
    __m128, __m128i, _mm_and_ps, _mm_and_si128, _mm_cmpeq_epi8, _mm_cmpeq_ps, _mm_load_si128,
    _mm_loadu_ps, _mm_loadu_si128, _mm_movemask_epi8, _mm_or_si128, _mm_pause, _mm_set1_epi8,
    _mm_setzero_si128, _mm_store_si128, _mm_storeu_ps, _mm_storeu_si128, _mm_xor_si128,
    provider::{ActiveSse, SseVocabulary},
    realization::{Capabilities, Realization},
    spin::{SpinWait, SpinWaitBuilder},
};
