// SSE Shim - sse-shim
// Module: Capability Guard
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Compile-time capability guard.
//!
//! Two configurations are rejected before any code is generated:
//!
//! - the `neon` feature on a target that is not AArch64, since the NEON
//!   realization has no fallback of its own;
//! - the NEON shim active while any x86 SIMD target feature is enabled in the
//!   same compilation unit, since that mixes the replacement vocabulary with
//!   the one it replaces.
//!
//! The second check is a const assertion produced by
//! [`assert_single_vocabulary!`](crate::assert_single_vocabulary), which
//! downstream crates can also invoke to check their own compilation unit.
//!
//! ```compile_fail
//! sse_shim::assert_single_vocabulary!(shim = true, native_x86 = true);
//! fn main() {}
//! ```
//!
//! ```
//! sse_shim::assert_single_vocabulary!(shim = true, native_x86 = false);
//! sse_shim::assert_single_vocabulary!(shim = false, native_x86 = true);
//! sse_shim::assert_single_vocabulary!();
//! fn main() {}
//! ```

#[cfg(all(feature = "neon", not(target_arch = "aarch64")))]
compile_error!("sse-shim: the `neon` feature requires an AArch64 target (NEON required, no fallback)");

/// `true` when this crate is compiled with any x86 SIMD target feature.
pub const NATIVE_X86_VOCABULARY: bool = cfg!(any(
    target_feature = "sse",
    target_feature = "sse2",
    target_feature = "sse3",
    target_feature = "ssse3",
    target_feature = "sse4.1",
    target_feature = "sse4.2",
    target_feature = "avx",
    target_feature = "avx2"
));

/// `true` when the crate root exports the NEON realization.
pub const SHIM_ACTIVE: bool = cfg!(sse_shim_neon);

/// Whether an active shim and a native x86 vocabulary would coexist.
pub const fn vocabularies_conflict(shim_active: bool, native_x86: bool) -> bool {
    shim_active && native_x86
}

/// Fails compilation when the NEON shim and an x86 SIMD vocabulary meet.
///
/// Without arguments, checks the invoking crate's own x86 target features
/// against this crate's realization. The explicit form takes both flags.
#[macro_export]
macro_rules! assert_single_vocabulary {
    () => {
        $crate::assert_single_vocabulary!(
            shim = $crate::guard::SHIM_ACTIVE,
            native_x86 = ::core::cfg!(any(
                target_feature = "sse",
                target_feature = "sse2",
                target_feature = "sse3",
                target_feature = "ssse3",
                target_feature = "sse4.1",
                target_feature = "sse4.2",
                target_feature = "avx",
                target_feature = "avx2"
            ))
        );
    };
    (shim = $shim:expr, native_x86 = $native:expr $(,)?) => {
        const _: () = ::core::assert!(
            !$crate::guard::vocabularies_conflict($shim, $native),
            "x86 SIMD target features must not be enabled on a NEON shim build"
        );
    };
}

// No Rust target currently satisfies both flags: `SHIM_ACTIVE` needs
// AArch64 and `NATIVE_X86_VOCABULARY` needs an x86 target. The build-level
// rejection of `neon` on x86 hosts is the `compile_error!` above; this line
// keeps the invariant asserted should a target ever expose both.
crate::assert_single_vocabulary!(shim = SHIM_ACTIVE, native_x86 = NATIVE_X86_VOCABULARY);
