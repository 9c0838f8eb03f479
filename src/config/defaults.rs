// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default timeout applied to every outgoing HTTP request (in seconds).
///
/// A hung request would otherwise stall initialization indefinitely; the
/// bound keeps startup responsive without changing the remote-then-local
/// fallback behavior.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 8;

/// Minimum allowed request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum allowed request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default base URL for the remotely hosted catalog files.
pub const DEFAULT_REMOTE_BASE: &str =
    "https://raw.githubusercontent.com/astra-center/astra-center/main/data";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;
