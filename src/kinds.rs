// SPDX-License-Identifier: Apache-2.0

//! Concrete engine allocation kinds and their owning handle aliases.
//!
//! These carry only the release glue. Object-model operations on contexts,
//! scripts and strings live in the engine itself.

use crate::{
    ffi,
    handle::{HandleKind, NativePointer},
    Token,
};
use libc::c_int;

/// An engine execution context.
#[derive(Debug)]
pub struct ContextKind;

impl HandleKind for ContextKind {
    const NAME: &'static str = "context";

    unsafe fn free(token: Token) -> c_int {
        ffi::escargot_context_free(token.into())
    }
}

/// A parsed script.
#[derive(Debug)]
pub struct ScriptKind;

impl HandleKind for ScriptKind {
    const NAME: &'static str = "script";

    unsafe fn free(token: Token) -> c_int {
        ffi::escargot_script_free(token.into())
    }
}

/// An engine-owned string.
#[derive(Debug)]
pub struct StringKind;

impl HandleKind for StringKind {
    const NAME: &'static str = "string";

    unsafe fn free(token: Token) -> c_int {
        ffi::escargot_string_free(token.into())
    }
}

/// Owning handle for an engine execution context.
pub type ContextHandle = NativePointer<ContextKind>;

/// Owning handle for a parsed script.
pub type ScriptHandle = NativePointer<ScriptKind>;

/// Owning handle for an engine-owned string.
pub type StringHandle = NativePointer<StringKind>;
