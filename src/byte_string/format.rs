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

//! The measure-then-commit formatted append protocol.
//!
//! Appending formatted content without knowing the rendered size ahead of time is a
//! two phase operation:
//!
//! 1. **Measure**: render the [`std::fmt::Arguments`] through a counting writer,
//!    which tallies bytes and writes nothing. This yields the exact required length.
//! 2. **Commit**: grow the storage to `size + required` in one step, then render the
//!    same argument bundle again straight into the storage.
//!
//! [`std::fmt::Arguments`] is [Copy], so the same bundle can be rendered in both
//! phases. Rendering is idempotent for deterministic [`std::fmt::Display`] impls,
//! which gives a single measured allocation instead of repeated doubling guesses.

use std::fmt::{self, Write};

use super::{byte_string::ByteString, sizes::ByteStorage};
use crate::{ByteStringError, ByteStringResult, ok};

/// Phase 1 writer: counts the bytes a render would produce, discarding them.
#[derive(Default)]
struct MeasuringWriter {
    required: usize,
}

impl fmt::Write for MeasuringWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();
        Ok(())
    }
}

/// Phase 2 writer: appends rendered fragments straight into the backing store. The
/// storage has already been grown to fit and its terminator popped, so extending
/// does not reallocate for deterministic renders.
struct CommitWriter<'a> {
    storage: &'a mut ByteStorage,
}

impl fmt::Write for CommitWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.storage.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl ByteString {
    /// Appends formatted content at the end of the current content, growing exactly
    /// as much as the render requires. The variadic entry point is the
    /// [`addf!`](crate::addf) macro; this method is the pre-collected argument
    /// bundle entry point that both share.
    ///
    /// # Errors
    ///
    /// - [`ByteStringError::NullBufferFormat`] in the null state. Formatting into
    ///   an absent string is refused; set content first.
    /// - [`ByteStringError::FormatInvalid`] when a [`std::fmt::Display`] impl in
    ///   `args` fails. The logical size is left as it was before the call.
    /// - [`ByteStringError::AllocationFailure`] when growth fails.
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> ByteStringResult<()> {
        if self.is_null() {
            return Err(ByteStringError::NullBufferFormat);
        }

        // Measure.
        let mut measure = MeasuringWriter::default();
        measure
            .write_fmt(args)
            .map_err(|_| ByteStringError::FormatInvalid)?;
        let required = measure.required;

        let old_size = self.size();
        self.ensure_capacity(old_size + required)?;

        let Some(storage) = self.buf_mut() else {
            return Err(ByteStringError::NullBufferFormat);
        };

        // Commit.
        storage.pop();
        let outcome = {
            let mut commit = CommitWriter {
                storage: &mut *storage,
            };
            commit.write_fmt(args)
        };
        match outcome {
            Ok(()) => {
                storage.push(0);
                ok!()
            }
            Err(_) => {
                // Discard the partial render, restore the previous size.
                storage.truncate(old_size);
                storage.push(0);
                Err(ByteStringError::FormatInvalid)
            }
        }
    }

    /// Replaces the content with formatted output: resets to the empty allocated
    /// state, then appends. Works on a string in the null state (the reset
    /// allocates). The variadic entry point is the [`formatf!`](crate::formatf)
    /// macro.
    ///
    /// # Errors
    ///
    /// Same as [`append_fmt`](Self::append_fmt), minus
    /// [`ByteStringError::NullBufferFormat`].
    pub fn set_fmt(&mut self, args: fmt::Arguments<'_>) -> ByteStringResult<()> {
        self.set_str("")?;
        self.append_fmt(args)
    }
}

/// Lets a [`ByteString`] be the target of [`write!`] / [`writeln!`]. Raw string
/// fragments take the lightweight [`ByteString::append_str`] path; formatted writes
/// go through the measured [`ByteString::append_fmt`] protocol. The null state
/// surfaces as [`std::fmt::Error`] (the richer error taxonomy is only available
/// through the inherent methods).
impl fmt::Write for ByteString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s).map_err(|_| fmt::Error)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.append_fmt(args).map_err(|_| fmt::Error)
    }
}
