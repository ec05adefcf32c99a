// SSE Shim - sse-shim
// Module: Realization Reporting
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Which realization backs the vocabulary in this build.
//!
//! Selection happens entirely at build time (cargo features plus target
//! architecture). Everything here is a constant; there is no detection and no
//! dispatch at run time.

use core::fmt;

use crate::{guard, movemask::MovemaskStrategy};

/// Realizations of the SSE vocabulary, ordered by how directly they map onto
/// hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Realization {
    /// Plain loads, stores and per-lane scalar operations
    Scalar,
    /// AArch64 NEON registers and instructions
    Neon,
    /// The real SSE2 instructions (x86_64 reference only)
    NativeSse,
}

impl Realization {
    /// Realization exported at the crate root.
    pub const ACTIVE: Self = if cfg!(sse_shim_neon) { Self::Neon } else { Self::Scalar };

    /// Short identifier used in capability reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Neon => "neon",
            Self::NativeSse => "native-sse",
        }
    }

    /// Whether values live in hardware vector registers.
    pub const fn is_accelerated(self) -> bool {
        !matches!(self, Self::Scalar)
    }
}

impl fmt::Display for Realization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the build-time vocabulary selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Realization behind the crate-root functions
    pub realization:           Realization,
    /// Sign mask extraction strategy of that realization
    pub movemask:              MovemaskStrategy,
    /// Whether x86 SIMD target features are enabled for this crate
    pub native_x86_vocabulary: bool,
}

impl Capabilities {
    /// Capabilities of the current build.
    pub const fn active() -> Self {
        Self {
            realization:           Realization::ACTIVE,
            movemask:              MovemaskStrategy::ACTIVE,
            native_x86_vocabulary: guard::NATIVE_X86_VOCABULARY,
        }
    }

    /// Emits the selection through the `log` facade.
    ///
    /// Does nothing unless the `log` feature is enabled.
    pub fn log(&self) {
        #[cfg(feature = "log")]
        log::info!(
            target: "sse_shim",
            "SSE vocabulary realization={} movemask={} native_x86_vocabulary={}",
            self.realization,
            self.movemask.name(),
            self.native_x86_vocabulary
        );
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::active()
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "realization={} movemask={} native_x86_vocabulary={}",
            self.realization,
            self.movemask.name(),
            self.native_x86_vocabulary
        )
    }
}
