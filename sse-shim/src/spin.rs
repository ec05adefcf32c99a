// SSE Shim - sse-shim
// Module: Spin-Wait Helper
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded spin-waiting built on [`_mm_pause`](crate::_mm_pause).
//!
//! The pause hint only lowers contention while spinning. Whether the wait
//! ends is decided solely by the caller's predicate, which must perform its
//! own synchronized reads.

use sse_shim_error::{Error, Result};

use crate::_mm_pause;

/// A bounded spin-wait.
///
/// Each round evaluates the predicate once and, if it does not hold yet,
/// issues `pauses_per_round` pause hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinWait {
    max_rounds:       u32,
    pauses_per_round: u32,
}

impl SpinWait {
    /// Default round budget.
    pub const DEFAULT_MAX_ROUNDS: u32 = 1 << 16;
    /// Default pause hints between predicate evaluations.
    pub const DEFAULT_PAUSES_PER_ROUND: u32 = 16;

    /// Creates a spin-wait with the default budget.
    pub const fn new() -> Self {
        Self {
            max_rounds:       Self::DEFAULT_MAX_ROUNDS,
            pauses_per_round: Self::DEFAULT_PAUSES_PER_ROUND,
        }
    }

    /// Maximum number of predicate evaluations before giving up.
    pub const fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Pause hints issued between two predicate evaluations.
    pub const fn pauses_per_round(&self) -> u32 {
        self.pauses_per_round
    }

    /// Spins until `ready` returns `true`.
    ///
    /// Returns the number of rounds that had to be paused through; `0`
    /// means the predicate already held.
    ///
    /// # Errors
    ///
    /// [`Error::SPIN_LIMIT_EXCEEDED`] if `ready` still fails after
    /// `max_rounds` evaluations.
    pub fn wait_until<F>(&self, ready: F) -> Result<u32>
    where
        F: FnMut() -> bool,
    {
        self.wait_with(ready, _mm_pause)
    }

    /// Round loop behind [`Self::wait_until`], with the pause hint injected.
    ///
    /// No pause follows the final evaluation.
    fn wait_with<F, P>(&self, mut ready: F, mut pause: P) -> Result<u32>
    where
        F: FnMut() -> bool,
        P: FnMut(),
    {
        for round in 0..self.max_rounds {
            if ready() {
                return Ok(round);
            }
            if round + 1 == self.max_rounds {
                break;
            }
            for _ in 0..self.pauses_per_round {
                pause();
            }
        }

        #[cfg(feature = "log")]
        log::debug!(
            "spin-wait gave up after {} rounds of {} pauses",
            self.max_rounds,
            self.pauses_per_round
        );
        Err(Error::SPIN_LIMIT_EXCEEDED)
    }
}

impl Default for SpinWait {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`SpinWait`].
#[derive(Debug)]
pub struct SpinWaitBuilder {
    max_rounds:       u32,
    pauses_per_round: u32,
}

impl Default for SpinWaitBuilder {
    fn default() -> Self {
        Self {
            max_rounds:       SpinWait::DEFAULT_MAX_ROUNDS,
            pauses_per_round: SpinWait::DEFAULT_PAUSES_PER_ROUND,
        }
    }
}

impl SpinWaitBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of predicate evaluations.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Sets the number of pause hints between evaluations.
    #[must_use]
    pub fn with_pauses_per_round(mut self, pauses: u32) -> Self {
        self.pauses_per_round = pauses;
        self
    }

    /// Builds the configured [`SpinWait`].
    ///
    /// # Errors
    ///
    /// [`Error::INVALID_SPIN_CONFIGURATION`] if either setting is zero.
    pub fn build(self) -> Result<SpinWait> {
        if self.max_rounds == 0 || self.pauses_per_round == 0 {
            return Err(Error::INVALID_SPIN_CONFIGURATION);
        }
        Ok(SpinWait {
            max_rounds:       self.max_rounds,
            pauses_per_round: self.pauses_per_round,
        })
    }
}
