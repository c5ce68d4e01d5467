// SPDX-License-Identifier: Apache-2.0

//! Safe Rust bindings for the native handle API of the Escargot JavaScript
//! engine.
//!
//! Every engine-side allocation is referenced through an address-sized
//! [`Token`] and owned by exactly one [`NativePointer`], which frees the
//! allocation exactly once, either through an explicit
//! [`destroy`](Handle::destroy) or when the value is dropped. The engine is
//! bootstrapped lazily, once per process, on first handle creation.
//!
//! ```ignore
//! use escargot::{ContextHandle, Handle, Token};
//!
//! fn main() -> escargot::Result<()> {
//!     escargot::init()?;
//!
//!     let token = Token::from(acquire_context_from_engine());
//!     let context = unsafe { ContextHandle::new(token)? };
//!     assert!(context.is_valid());
//!
//!     context.destroy();
//!     assert!(!context.is_valid());
//!     Ok(())
//! }
//! ```

use derive_more::{Display, From, Into};
use log::debug;
use std::{ffi::CStr, sync::OnceLock};

pub mod error;
pub mod ffi;
pub mod handle;
pub mod kinds;

pub use error::{Error, Result};
pub use handle::{Handle, HandleKind, NativePointer};
pub use kinds::{ContextHandle, ScriptHandle, StringHandle};

/// Address-sized identifier of an engine-owned allocation.
///
/// Zero is the reserved sentinel meaning "no resource held" and never names
/// a live allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[display("{:#x}", _0)]
pub struct Token(u64);

impl Token {
    /// Sentinel meaning "no resource held".
    pub const NONE: Token = Token(0);

    /// Returns `true` if this names an engine allocation.
    pub const fn has_value(&self) -> bool {
        self.0 != 0
    }
}

static BOOTSTRAP: OnceLock<Result<()>> = OnceLock::new();

/// Bootstrap the engine for this process.
///
/// Runs the engine initialization exactly once, no matter how many threads
/// race the first call. A failed bootstrap is fatal: the outcome is cached
/// and every later call returns the same [`Error::InitFailed`].
///
/// Called implicitly by handle construction; calling it earlier surfaces a
/// bootstrap failure at a convenient point.
pub fn init() -> Result<()> {
    BOOTSTRAP
        .get_or_init(|| match unsafe { ffi::escargot_init() as u32 } {
            ffi::ESCARGOT_OK => {
                debug!("Escargot engine initialized");
                Ok(())
            }
            err => Err(Error::InitFailed(err)),
        })
        .clone()
}

/// Returns `true` if the engine bootstrap has run and succeeded.
pub fn is_initialized() -> bool {
    matches!(BOOTSTRAP.get(), Some(Ok(())))
}

/// Engine version string (e.g. "0.1.0").
pub fn version() -> String {
    let ptr = unsafe { ffi::escargot_version() };
    if ptr.is_null() {
        return String::new();
    }
    // The engine hands out a pointer to static storage; nothing to free.
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}
