// SSE Shim - sse-shim
// Module: Sign Mask Extraction
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Sign mask extraction (`_mm_movemask_epi8`) strategies.
//!
//! NEON has no instruction that gathers one bit per byte lane into a general
//! register, so the mask is synthesized. Two interchangeable strategies exist:
//!
//! - **Weighted reduction**: isolate each sign bit (`>> 7`), widen the two
//!   8-lane halves to 16 bits, multiply the low half by `1, 2, ..., 128` and
//!   the high half by `256, ..., 32768`, then pairwise widen-add down to two
//!   `u64x2` accumulators and sum them. Each lane contributes at most one
//!   distinct power of two, so no addition can carry into another lane's bit.
//! - **Scalar loop**: spill the sixteen bytes and OR in one bit per lane.
//!
//! Both must agree bit-for-bit with [`sign_mask_reference`] on every input.

#[cfg(target_arch = "aarch64")]
use core::arch::aarch64::{
    uint8x16_t, vget_high_u8, vget_low_u8, vgetq_lane_u64, vld1q_u16, vmovl_u8, vmulq_u16,
    vpaddlq_u16, vpaddlq_u32, vshrq_n_u8,
};

/// Positional weights for byte lanes 0..8.
pub const LOW_LANE_WEIGHTS: [u16; 8] = [1, 2, 4, 8, 16, 32, 64, 128];
/// Positional weights for byte lanes 8..16.
pub const HIGH_LANE_WEIGHTS: [u16; 8] = [256, 512, 1024, 2048, 4096, 8192, 16384, 32768];

/// How the NEON realization extracts sign masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovemaskStrategy {
    /// Branch-free shift, widen, weight and pairwise-add reduction
    WeightedReduction,
    /// Store to a buffer and test each lane's high bit in a loop
    ScalarLoop,
}

impl MovemaskStrategy {
    /// Strategy compiled into the active realization.
    ///
    /// The scalar realization always loops; the NEON realization reduces
    /// unless the `movemask-scalar-loop` feature is enabled.
    pub const ACTIVE: Self = if cfg!(all(sse_shim_neon, not(feature = "movemask-scalar-loop"))) {
        Self::WeightedReduction
    } else {
        Self::ScalarLoop
    };

    /// Short identifier used in capability reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WeightedReduction => "weighted-reduction",
            Self::ScalarLoop => "scalar-loop",
        }
    }
}

/// Direct definition: bit `i` of the result is bit 7 of `bytes[i]`.
pub fn sign_mask_reference(bytes: &[u8; 16]) -> u16 {
    bytes
        .iter()
        .rev()
        .fold(0u16, |mask, &byte| (mask << 1) | u16::from(byte >> 7))
}

/// Store-and-loop strategy over an already spilled vector.
#[inline]
pub fn sign_mask_scalar_loop(bytes: &[u8; 16]) -> u16 {
    let mut mask = 0u16;
    for (lane, &byte) in bytes.iter().enumerate() {
        if byte & 0x80 != 0 {
            mask |= 1 << lane;
        }
    }
    mask
}

/// Weighted pairwise reduction over a NEON byte vector.
#[cfg(target_arch = "aarch64")]
#[inline]
#[allow(unused_unsafe)]
pub fn sign_mask_weighted_reduction(a: uint8x16_t) -> u16 {
    // SAFETY: NEON is part of the AArch64 baseline and both weight tables
    // hold exactly eight `u16` lanes.
    unsafe {
        let bits = vshrq_n_u8::<7>(a);

        let lo = vmovl_u8(vget_low_u8(bits));
        let hi = vmovl_u8(vget_high_u8(bits));

        let lo = vmulq_u16(lo, vld1q_u16(LOW_LANE_WEIGHTS.as_ptr()));
        let hi = vmulq_u16(hi, vld1q_u16(HIGH_LANE_WEIGHTS.as_ptr()));

        let lo = vpaddlq_u32(vpaddlq_u16(lo));
        let hi = vpaddlq_u32(vpaddlq_u16(hi));

        let sum = vgetq_lane_u64::<0>(lo)
            + vgetq_lane_u64::<1>(lo)
            + vgetq_lane_u64::<0>(hi)
            + vgetq_lane_u64::<1>(hi);
        sum as u16
    }
}

/// Store-and-loop strategy over a NEON byte vector.
#[cfg(target_arch = "aarch64")]
#[inline]
#[allow(unused_unsafe)]
pub fn sign_mask_spilled(a: uint8x16_t) -> u16 {
    let mut bytes = [0u8; 16];
    // SAFETY: `bytes` is a 16-byte writable buffer.
    unsafe { core::arch::aarch64::vst1q_u8(bytes.as_mut_ptr(), a) };
    sign_mask_scalar_loop(&bytes)
}
