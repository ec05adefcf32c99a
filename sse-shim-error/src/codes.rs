// SSE Shim - sse-shim-error
// Module: Error Codes
//
// Copyright (c) 2025 The SSE Shim Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Memory error codes (1000-1999)
/// Source slice holds fewer bytes than one 128-bit value
pub const SOURCE_TOO_SHORT: u16 = 1000;
/// Destination slice holds fewer bytes than one 128-bit value
pub const DESTINATION_TOO_SHORT: u16 = 1001;

// Concurrency error codes (2000-2999)
/// Spin-wait gave up before its predicate held
pub const SPIN_LIMIT_EXCEEDED: u16 = 2000;
/// Spin-wait configured with zero rounds or zero pauses per round
pub const INVALID_SPIN_CONFIGURATION: u16 = 2001;
