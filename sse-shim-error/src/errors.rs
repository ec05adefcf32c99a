// SSE Shim - sse-shim-error
// Module: Error Types
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use core::fmt;

use crate::codes;

/// `Error` categories for shim operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Caller-supplied memory is unsuitable for the requested transfer
    Memory      = 1,
    /// Caller-supplied parameters are out of range
    Parameter   = 2,
    /// Spin-wait and scheduling errors
    Concurrency = 3,
}

/// Shim `Error` type
///
/// Errors are plain `Copy` values carrying a category, a numeric code from
/// [`codes`] and a static message, so they can be produced in `no_std`
/// builds without allocation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Source slice too short for a 128-bit load
    pub const SOURCE_TOO_SHORT: Self = Self::new(
        ErrorCategory::Memory,
        codes::SOURCE_TOO_SHORT,
        "Source slice holds fewer than 16 bytes",
    );
    /// Destination slice too short for a 128-bit store
    pub const DESTINATION_TOO_SHORT: Self = Self::new(
        ErrorCategory::Memory,
        codes::DESTINATION_TOO_SHORT,
        "Destination slice holds fewer than 16 bytes",
    );
    /// Spin-wait exhausted its round budget
    pub const SPIN_LIMIT_EXCEEDED: Self = Self::new(
        ErrorCategory::Concurrency,
        codes::SPIN_LIMIT_EXCEEDED,
        "Spin-wait round limit exceeded",
    );
    /// Spin-wait configured with a zero budget
    pub const INVALID_SPIN_CONFIGURATION: Self = Self::new(
        ErrorCategory::Parameter,
        codes::INVALID_SPIN_CONFIGURATION,
        "Spin-wait rounds and pauses per round must be non-zero",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create a memory error with the source-too-short code
    #[must_use]
    pub const fn source_too_short(message: &'static str) -> Self {
        Self::new(ErrorCategory::Memory, codes::SOURCE_TOO_SHORT, message)
    }

    /// Create a memory error with the destination-too-short code
    #[must_use]
    pub const fn destination_too_short(message: &'static str) -> Self {
        Self::new(ErrorCategory::Memory, codes::DESTINATION_TOO_SHORT, message)
    }

    /// Check if this is a memory error
    #[must_use]
    pub fn is_memory_error(&self) -> bool {
        self.category == ErrorCategory::Memory
    }

    /// Check if this is a parameter error
    #[must_use]
    pub fn is_parameter_error(&self) -> bool {
        self.category == ErrorCategory::Parameter
    }

    /// Check if this is a concurrency error
    #[must_use]
    pub fn is_concurrency_error(&self) -> bool {
        self.category == ErrorCategory::Concurrency
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
