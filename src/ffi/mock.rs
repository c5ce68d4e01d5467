// SPDX-License-Identifier: Apache-2.0

//! Instrumented stand-in for the native engine, linked into unit tests in
//! place of libescargot. Every declared symbol counts its calls so the
//! lifetime tests can assert exactly-once semantics.

use libc::{c_char, c_int};
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) static INIT_CALLS: AtomicUsize = AtomicUsize::new(0);
pub(crate) static CONTEXT_FREE_CALLS: AtomicUsize = AtomicUsize::new(0);
pub(crate) static SCRIPT_FREE_CALLS: AtomicUsize = AtomicUsize::new(0);
pub(crate) static STRING_FREE_CALLS: AtomicUsize = AtomicUsize::new(0);

/// String token for which `escargot_string_free` reports a failure.
pub(crate) const FAILING_STRING_TOKEN: u64 = 0xdead;

#[no_mangle]
extern "C" fn escargot_init() -> c_int {
    INIT_CALLS.fetch_add(1, Ordering::SeqCst);
    super::ESCARGOT_OK as c_int
}

#[no_mangle]
extern "C" fn escargot_version() -> *const c_char {
    b"0.1.0\0".as_ptr() as *const c_char
}

#[no_mangle]
extern "C" fn escargot_context_free(token: u64) -> c_int {
    if token == 0 {
        return super::ESCARGOT_ERR_BAD_HANDLE as c_int;
    }
    CONTEXT_FREE_CALLS.fetch_add(1, Ordering::SeqCst);
    super::ESCARGOT_OK as c_int
}

#[no_mangle]
extern "C" fn escargot_script_free(token: u64) -> c_int {
    if token == 0 {
        return super::ESCARGOT_ERR_BAD_HANDLE as c_int;
    }
    SCRIPT_FREE_CALLS.fetch_add(1, Ordering::SeqCst);
    super::ESCARGOT_OK as c_int
}

#[no_mangle]
extern "C" fn escargot_string_free(token: u64) -> c_int {
    if token == 0 {
        return super::ESCARGOT_ERR_BAD_HANDLE as c_int;
    }
    STRING_FREE_CALLS.fetch_add(1, Ordering::SeqCst);
    if token == FAILING_STRING_TOKEN {
        return super::ESCARGOT_ERR as c_int;
    }
    super::ESCARGOT_OK as c_int
}
