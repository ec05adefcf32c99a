// SSE Shim - sse-shim
// Module: Vocabulary Property Tests
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Properties of the crate-root vocabulary, whichever realization backs it.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use sse_shim::{
    checked::{self, from_bits, from_bytes, to_bits, to_bytes},
    movemask::sign_mask_reference,
    prelude::*,
};

// ============================================================
// Concrete cases
// ============================================================

#[test]
fn broadcast_all_ones_has_full_mask() {
    assert_eq!(_mm_movemask_epi8(_mm_set1_epi8(-1)), 0xFFFF);
}

#[test]
fn zero_has_empty_mask() {
    assert_eq!(_mm_movemask_epi8(_mm_setzero_si128()), 0);
    assert_eq!(to_bytes(_mm_setzero_si128()), [0; 16]);
}

#[test]
fn lanes_three_and_ten() {
    let mut bytes = [0u8; 16];
    bytes[3] = 0x80;
    bytes[10] = 0x80;
    assert_eq!(_mm_movemask_epi8(from_bytes(bytes)), (1 << 3) | (1 << 10));
    assert_eq!(_mm_movemask_epi8(from_bytes(bytes)), 0x0408);
}

#[test]
fn float_equality_with_itself_clears_nan_lanes() {
    let v = from_bits([1.0f32.to_bits(), f32::NAN.to_bits(), (-0.0f32).to_bits(), 0xFFC0_0001]);
    assert_eq!(to_bits(_mm_cmpeq_ps(v, v)), [u32::MAX, 0, u32::MAX, 0]);
}

#[test]
fn positive_and_negative_zero_compare_equal() {
    let a = from_bits([0; 4]);
    let b = from_bits([0x8000_0000; 4]);
    assert_eq!(to_bits(_mm_cmpeq_ps(a, b)), [u32::MAX; 4]);
}

#[test]
fn byte_scan_finds_delimiters() {
    let text = *b"key=value;k2=v2;";
    let hits = _mm_cmpeq_epi8(from_bytes(text), _mm_set1_epi8(b';' as i8));
    assert_eq!(_mm_movemask_epi8(hits), (1 << 9) | (1 << 15));
}

#[test]
fn aligned_transfers_round_trip() {
    let src = from_bytes(*b"0123456789abcdef");
    let mut slot = _mm_setzero_si128();
    unsafe { _mm_store_si128(&mut slot, src) };
    let back = unsafe { _mm_load_si128(&slot) };
    assert_eq!(to_bytes(back), *b"0123456789abcdef");
}

#[test]
fn pause_returns() {
    for _ in 0..64 {
        _mm_pause();
    }
}

#[test]
fn capabilities_report_the_active_realization() {
    let caps = Capabilities::active();
    assert_eq!(caps.realization, ActiveSse::REALIZATION);
    assert_ne!(caps.realization, Realization::NativeSse);
    assert!(caps.to_string().starts_with("realization="));
    caps.log();
}

#[test]
fn spin_wait_reports_exhaustion() {
    let spin = SpinWaitBuilder::new().with_max_rounds(3).with_pauses_per_round(1).build().unwrap();
    assert_eq!(spin.wait_until(|| false), Err(Error::SPIN_LIMIT_EXCEEDED));
}

// ============================================================
// Properties
// ============================================================

proptest! {
    #[test]
    fn movemask_is_the_high_bit_of_each_lane(bytes in any::<[u8; 16]>()) {
        let mask = _mm_movemask_epi8(from_bytes(bytes));
        prop_assert_eq!(mask, i32::from(sign_mask_reference(&bytes)));
        prop_assert_eq!(mask >> 16, 0);
        for (lane, byte) in bytes.iter().enumerate() {
            prop_assert_eq!((mask >> lane) & 1 == 1, byte & 0x80 != 0);
        }
    }

    #[test]
    fn boolean_identities(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
        let (va, vb) = (from_bytes(a), from_bytes(b));
        let zero = to_bytes(_mm_setzero_si128());

        prop_assert_eq!(to_bytes(_mm_and_si128(va, _mm_xor_si128(va, va))), zero);
        prop_assert_eq!(to_bytes(_mm_or_si128(va, _mm_setzero_si128())), a);
        prop_assert_eq!(to_bytes(_mm_and_si128(va, _mm_set1_epi8(-1))), a);
        prop_assert_eq!(to_bytes(_mm_xor_si128(_mm_xor_si128(va, vb), vb)), a);

        // (a | b) & (a ^ b) == a ^ b
        let or = _mm_or_si128(va, vb);
        let xor = _mm_xor_si128(va, vb);
        prop_assert_eq!(to_bytes(_mm_and_si128(or, xor)), to_bytes(xor));

        let expected: Vec<u8> = a.iter().zip(&b).map(|(x, y)| x & y).collect();
        prop_assert_eq!(&to_bytes(_mm_and_si128(va, vb))[..], &expected[..]);
    }

    #[test]
    fn boolean_laws(a in any::<[u8; 16]>(), b in any::<[u8; 16]>(), c in any::<[u8; 16]>()) {
        let (va, vb, vc) = (from_bytes(a), from_bytes(b), from_bytes(c));
        let not = |x| _mm_xor_si128(x, _mm_set1_epi8(-1));

        for op in [_mm_and_si128, _mm_or_si128, _mm_xor_si128] {
            prop_assert_eq!(to_bytes(op(va, vb)), to_bytes(op(vb, va)));
            prop_assert_eq!(to_bytes(op(op(va, vb), vc)), to_bytes(op(va, op(vb, vc))));
        }

        // !(a & b) == !a | !b, !(a | b) == !a & !b
        prop_assert_eq!(
            to_bytes(not(_mm_and_si128(va, vb))),
            to_bytes(_mm_or_si128(not(va), not(vb)))
        );
        prop_assert_eq!(
            to_bytes(not(_mm_or_si128(va, vb))),
            to_bytes(_mm_and_si128(not(va), not(vb)))
        );

        let or = to_bytes(_mm_or_si128(va, vb));
        let xor = to_bytes(_mm_xor_si128(va, vb));
        for lane in 0..16 {
            prop_assert_eq!(or[lane], a[lane] | b[lane]);
            prop_assert_eq!(xor[lane], a[lane] ^ b[lane]);
            prop_assert_eq!(to_bytes(not(va))[lane], !a[lane]);
        }
    }

    #[test]
    fn byte_equality_is_all_or_nothing(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
        let eq = to_bytes(_mm_cmpeq_epi8(from_bytes(a), from_bytes(b)));
        for lane in 0..16 {
            prop_assert_eq!(eq[lane], if a[lane] == b[lane] { 0xFF } else { 0x00 });
        }
        prop_assert_eq!(to_bytes(_mm_cmpeq_epi8(from_bytes(a), from_bytes(a))), [0xFF; 16]);
    }

    #[test]
    fn broadcast_fills_every_lane(c in any::<i8>()) {
        prop_assert_eq!(to_bytes(_mm_set1_epi8(c)), [c as u8; 16]);
    }

    #[test]
    fn unaligned_round_trip_leaves_buffer_unchanged(
        bytes in prop::collection::vec(any::<u8>(), 32),
        offset in 0usize..=16,
    ) {
        let mut buf = bytes.clone();
        unsafe {
            let p = buf.as_mut_ptr().add(offset).cast::<__m128i>();
            _mm_storeu_si128(p, _mm_loadu_si128(p));
        }
        prop_assert_eq!(buf, bytes);
    }

    #[test]
    fn float_self_equality_follows_ieee(bits in prop::array::uniform4(any::<u32>())) {
        let v = from_bits(bits);
        let eq = to_bits(_mm_cmpeq_ps(v, v));
        for lane in 0..4 {
            let expected = if f32::from_bits(bits[lane]).is_nan() { 0 } else { u32::MAX };
            prop_assert_eq!(eq[lane], expected);
        }
    }

    #[test]
    fn float_and_is_bitwise(a in prop::array::uniform4(any::<u32>()), b in prop::array::uniform4(any::<u32>())) {
        let got = to_bits(_mm_and_ps(from_bits(a), from_bits(b)));
        for lane in 0..4 {
            prop_assert_eq!(got[lane], a[lane] & b[lane]);
        }
    }

    #[test]
    fn float_unaligned_round_trip(bits in prop::collection::vec(any::<u32>(), 8), offset in 0usize..=4) {
        let floats: Vec<f32> = bits.iter().map(|&b| f32::from_bits(b)).collect();
        let v = checked::load_ps(&floats[offset..]).unwrap();
        prop_assert_eq!(&to_bits(v)[..], &bits[offset..offset + 4]);
    }

    #[test]
    fn checked_loads_reject_short_slices(len in 0usize..16) {
        let bytes = vec![0u8; len];
        prop_assert_eq!(checked::load_si128(&bytes).unwrap_err(), Error::SOURCE_TOO_SHORT);
        let mut dst = vec![0u8; len];
        prop_assert_eq!(
            checked::store_si128(&mut dst, _mm_setzero_si128()).unwrap_err(),
            Error::DESTINATION_TOO_SHORT
        );
    }
}
