// SPDX-License-Identifier: Apache-2.0

//! Low-level C declarations for the engine boundary.
//!
//! Users should prefer the safe wrappers in the parent modules.

use libc::{c_char, c_int};

#[cfg(test)]
pub(crate) mod mock;

/// Success status.
pub const ESCARGOT_OK: u32 = 0;
/// Generic failure.
pub const ESCARGOT_ERR: u32 = 1;
/// Engine bootstrap could not complete.
pub const ESCARGOT_ERR_INIT: u32 = 2;
/// The token does not name a live engine allocation.
pub const ESCARGOT_ERR_BAD_HANDLE: u32 = 3;

extern "C" {
    /// Process-wide engine bootstrap. Idempotent on the engine side.
    pub fn escargot_init() -> c_int;

    /// Engine version string; points to static storage owned by the engine.
    pub fn escargot_version() -> *const c_char;

    /// Free the execution context identified by `token`.
    pub fn escargot_context_free(token: u64) -> c_int;

    /// Free the parsed script identified by `token`.
    pub fn escargot_script_free(token: u64) -> c_int;

    /// Free the engine-owned string identified by `token`.
    pub fn escargot_string_free(token: u64) -> c_int;
}
