// SSE Shim - sse-shim-error
// Module: Error Handling
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the SSE compatibility shim.
//!
//! The vector vocabulary itself is total: no load, store, comparison or mask
//! extraction can fail. Errors only surface from the safe wrappers layered on
//! top of it (slice-based loads and stores, bounded spin-waits).
//!
//! # Error Categories
//!
//! ## Memory Errors (1000-1999)
//! - Source slice shorter than one 128-bit value
//! - Destination slice shorter than one 128-bit value
//!
//! ## Concurrency Errors (2000-2999)
//! - Spin-wait round limit exhausted
//! - Invalid spin-wait configuration
//!
//! # Usage
//!
//! ```
//! use sse_shim_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Memory,
//!     codes::SOURCE_TOO_SHORT,
//!     "Source slice holds fewer than 16 bytes",
//! );
//! assert!(error.is_memory_error());
//! assert_eq!(error, Error::SOURCE_TOO_SHORT);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]

/// Error codes for the shim
pub mod codes;
/// Error and error category types
pub mod errors;

pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for shim operations.
pub type Result<T> = core::result::Result<T, Error>;
