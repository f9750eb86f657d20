/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Error taxonomy for every fallible [`ByteString`] operation. There is no
//! exception-style unwinding anywhere in this crate; callers check and propagate
//! [`ByteStringResult`] with `?`.
//!
//! [`ByteString`]: crate::ByteString

/// Result alias used by all fallible [`ByteString`] operations.
///
/// [`ByteString`]: crate::ByteString
pub type ByteStringResult<T> = core::result::Result<T, ByteStringError>;

/// Failure modes of [`ByteString`] mutation and formatting.
///
/// | Variant               | Cause                                            | Recoverable? |
/// | :-------------------- | :----------------------------------------------- | :----------- |
/// | [`AllocationFailure`] | Growing the backing store could not get memory   | No           |
/// | [`FormatInvalid`]     | The formatting engine reported an error          | Maybe        |
/// | [`NullBufferFormat`]  | Formatted append into a string in the null state | Yes          |
///
/// [`AllocationFailure`]: Self::AllocationFailure
/// [`FormatInvalid`]: Self::FormatInvalid
/// [`NullBufferFormat`]: Self::NullBufferFormat
/// [`ByteString`]: crate::ByteString
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ByteStringError {
    /// The backing store could not reserve enough memory. Treated as unrecoverable;
    /// it is surfaced as an error code only so that callers can compose with `?`.
    #[error("failed to reserve capacity for {requested} bytes of content")]
    #[diagnostic(
        code(r3bl_byte_string::allocation_failure),
        help("The process is likely out of memory. There is no local recovery.")
    )]
    AllocationFailure {
        /// The content capacity that was requested (terminator slot excluded).
        requested: usize,
    },

    /// A [`std::fmt::Display`] / [`std::fmt::Debug`] impl reported an error while
    /// rendering. The content written before the failure is discarded; the logical
    /// size is left exactly as it was before the call.
    #[error("the formatting engine reported an error while rendering")]
    #[diagnostic(code(r3bl_byte_string::format_invalid))]
    FormatInvalid,

    /// Formatted append into a string in the null state. The null state is a
    /// meaningful "absent" marker, so appends refuse to silently allocate.
    #[error("cannot append formatted content to a byte string in the null state")]
    #[diagnostic(
        code(r3bl_byte_string::null_buffer_format),
        help(
            "Set content first, eg via set_str(\"\") or set_bytes(..), to move the \
             string out of the null state."
        )
    )]
    NullBufferFormat,
}
