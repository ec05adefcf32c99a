// SSE Shim - sse-shim
// Module: Build Script
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Emits the `sse_shim_neon` cfg when the NEON realization is selected.
//!
//! Selecting `neon` on a target without NEON is not handled here; the
//! capability guard in `src/guard.rs` rejects it at compile time.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(sse_shim_neon)");

    let neon_requested = env::var_os("CARGO_FEATURE_NEON").is_some();
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    if neon_requested && target_arch == "aarch64" {
        println!("cargo:rustc-cfg=sse_shim_neon");
    }
}
