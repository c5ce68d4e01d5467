// SPDX-License-Identifier: Apache-2.0

use thiserror::Error as ThisError;

/// The core error variants.
///
/// Release paths never surface an error: a failed foreign free is logged
/// and swallowed, since release also runs from `Drop`.
#[derive(ThisError, Debug, Clone)]
pub enum Error {
    /// The one-time engine bootstrap failed. Fatal: no handle can be
    /// created in this process afterwards.
    #[error("Engine initialization failed: {0}")]
    InitFailed(u32),

    /// The token is the zero sentinel or otherwise unusable.
    #[error("Invalid handle")]
    InvalidHandle,
}

pub type Result<T> = std::result::Result<T, Error>;
