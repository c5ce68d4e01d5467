// SPDX-License-Identifier: Apache-2.0

use crate::{ffi, Error, Result, Token};
use libc::c_int;
use log::warn;
use std::{
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

/// Core trait for components backed by an engine-owned allocation.
pub trait Handle {
    /// Current token; [`Token::NONE`] once released.
    fn token(&self) -> Token;

    /// Returns `true` while the engine-side allocation is still held.
    ///
    /// No side effects; callable any number of times, including after
    /// release.
    fn is_valid(&self) -> bool {
        self.token().has_value()
    }

    /// Releases the engine-side allocation.
    ///
    /// Idempotent: the first call frees, later calls are no-ops. A failed
    /// foreign free is logged and swallowed, since this also runs from
    /// `Drop` where no caller can handle it.
    fn destroy(&self);
}

/// A kind of engine allocation, named by its foreign free call.
pub trait HandleKind {
    /// Diagnostic label used in log lines.
    const NAME: &'static str;

    /// Free the engine allocation identified by `token`.
    ///
    /// # Safety
    ///
    /// - `token` must identify a live engine allocation of this kind.
    /// - No other code may touch the allocation afterwards.
    unsafe fn free(token: Token) -> c_int;
}

/// Owning cell for one engine allocation of kind `K`.
///
/// The token is stored atomically so concurrent [`Handle::destroy`] calls
/// (for example an explicit release racing a drop on another thread)
/// resolve to exactly one foreign free call: the first caller swaps the
/// token for the zero sentinel, everyone else sees zero and returns.
#[derive(Debug)]
pub struct NativePointer<K: HandleKind> {
    token: AtomicU64,
    _kind: PhantomData<K>,
}

impl<K: HandleKind> NativePointer<K> {
    /// Wraps a token obtained from the engine.
    ///
    /// Bootstraps the engine on first use and rejects the zero sentinel
    /// with [`Error::InvalidHandle`].
    ///
    /// # Safety
    ///
    /// - `token` must come from the engine call that allocates kind `K`.
    /// - Ownership of the allocation transfers to the returned value; no
    ///   other `NativePointer` may wrap the same token.
    pub unsafe fn new(token: Token) -> Result<Self> {
        crate::init()?;

        if !token.has_value() {
            return Err(Error::InvalidHandle);
        }

        Ok(NativePointer {
            token: AtomicU64::new(token.into()),
            _kind: PhantomData,
        })
    }

    /// Releases ownership without freeing and returns the raw token.
    ///
    /// The engine allocation must be freed by other means afterwards.
    /// Returns [`Token::NONE`] if the handle was already released; check
    /// [`Token::has_value`] before handing the token elsewhere.
    pub fn into_token(self) -> Token {
        Token::from(self.token.swap(0, Ordering::AcqRel))
    }
}

impl<K: HandleKind> Handle for NativePointer<K> {
    fn token(&self) -> Token {
        Token::from(self.token.load(Ordering::Acquire))
    }

    fn destroy(&self) {
        let token = Token::from(self.token.swap(0, Ordering::AcqRel));
        if !token.has_value() {
            return;
        }

        match unsafe { K::free(token) as u32 } {
            ffi::ESCARGOT_OK => {}
            err => warn!("Could not free {} {}: {}", K::NAME, token, err),
        }
    }
}

impl<K: HandleKind> Drop for NativePointer<K> {
    fn drop(&mut self) {
        self.destroy();
    }
}
