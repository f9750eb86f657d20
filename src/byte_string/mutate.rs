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

use super::{byte_string::{ByteString, ByteStringContent},
            sizes::ByteStorage};
use crate::{ByteStringError, ByteStringResult, ok};

impl ByteString {
    /// Guarantees room for `target_capacity` bytes of content plus the terminator.
    /// Growing never shrinks and never truncates existing content; calling with a
    /// capacity at or below the current one is a no-op. A string in the null state
    /// transitions to the empty allocated state with the requested capacity.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::AllocationFailure`] when the backing store cannot reserve
    /// the requested memory.
    pub fn ensure_capacity(&mut self, target_capacity: usize) -> ByteStringResult<()> {
        if self.is_null() {
            let mut storage = ByteStorage::new();
            storage.push(0);
            self.content = ByteStringContent::Buf(storage);
        }

        let Some(storage) = self.buf_mut() else {
            return ok!();
        };

        let required_raw = target_capacity + 1;
        if storage.capacity() < required_raw {
            let additional = required_raw - storage.len();
            storage.try_reserve(additional).map_err(|_| {
                ByteStringError::AllocationFailure {
                    requested: target_capacity,
                }
            })?;
        }

        ok!()
    }

    /// Replaces the entire content with an exact copy of `bytes` (overwrite, not
    /// append) and re-terminates. Embedded NUL bytes are preserved.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::AllocationFailure`] when growth fails.
    pub fn set_bytes(&mut self, bytes: &[u8]) -> ByteStringResult<()> {
        self.ensure_capacity(bytes.len())?;
        if let Some(storage) = self.buf_mut() {
            storage.clear();
            storage.extend_from_slice(bytes);
            storage.push(0);
        }
        ok!()
    }

    /// Convenience over [`set_bytes`](Self::set_bytes) for UTF-8 content.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::AllocationFailure`] when growth fails.
    pub fn set_str(&mut self, arg: &str) -> ByteStringResult<()> {
        self.set_bytes(arg.as_bytes())
    }

    /// Transitions to the null state, releasing nothing eagerly (the storage drops
    /// with the old variant). This is **not** the same as `set_bytes(b"")`: after
    /// `clear()` the string holds no content at all and
    /// [`as_bytes`](Self::as_bytes) yields [None], whereas `set_bytes(b"")` leaves
    /// an allocated zero-length string.
    pub fn clear(&mut self) { self.content = ByteStringContent::Null; }

    /// Sets the logical size directly, growing if needed and re-terminating at the
    /// new size. Bytes between the previous and the new size are unspecified by
    /// contract; callers who grow via `resize` must overwrite that region (eg via
    /// [`as_mut_bytes`](Self::as_mut_bytes)) before reading it. A string in the
    /// null state transitions to the allocated state.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::AllocationFailure`] when growth fails.
    pub fn resize(&mut self, size: usize) -> ByteStringResult<()> {
        self.ensure_capacity(size)?;
        if let Some(storage) = self.buf_mut() {
            storage.resize(size + 1, 0);
            storage[size] = 0;
        }
        ok!()
    }

    /// Overwrites this string with the content of `src`. A null `src` makes this
    /// string null as well.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::AllocationFailure`] when growth fails.
    pub fn copy_from(&mut self, src: &ByteString) -> ByteStringResult<()> {
        match src.as_bytes() {
            Some(bytes) => self.set_bytes(bytes),
            None => {
                self.clear();
                ok!()
            }
        }
    }

    /// Appends raw bytes to the content, growing as needed and re-terminating.
    /// This is the lightweight path: prefer it over [`append_fmt`] when no
    /// formatting is required.
    ///
    /// # Errors
    ///
    /// - [`ByteStringError::NullBufferFormat`] in the null state; appending does
    ///   not silently allocate, set content first.
    /// - [`ByteStringError::AllocationFailure`] when growth fails.
    ///
    /// [`append_fmt`]: Self::append_fmt
    pub fn append_bytes(&mut self, bytes: &[u8]) -> ByteStringResult<()> {
        if self.is_null() {
            return Err(ByteStringError::NullBufferFormat);
        }

        let size = self.size();
        self.ensure_capacity(size + bytes.len())?;

        if let Some(storage) = self.buf_mut() {
            storage.pop();
            storage.extend_from_slice(bytes);
            storage.push(0);
        }
        ok!()
    }

    /// Convenience over [`append_bytes`](Self::append_bytes) for UTF-8 content.
    ///
    /// # Errors
    ///
    /// Same as [`append_bytes`](Self::append_bytes).
    pub fn append_str(&mut self, arg: &str) -> ByteStringResult<()> {
        self.append_bytes(arg.as_bytes())
    }
}
