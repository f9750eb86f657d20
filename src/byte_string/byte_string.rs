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

use std::ffi::CStr;

use super::sizes::ByteStorage;

/// A mutable, owned, binary-safe byte string with a maintained NUL terminator.
///
/// The content may contain embedded NUL bytes; the logical [`size`](Self::size) is
/// tracked explicitly and never derived by scanning. One extra byte of storage is
/// always reserved for the trailing terminator so that
/// [`as_c_str`](Self::as_c_str) / [`as_ptr`](Self::as_ptr) hand out valid C string
/// views without copying.
///
/// A `ByteString` is either *allocated* (possibly zero-length) or *null* (no content
/// at all). The two are deliberately distinct; see [`clear`](Self::clear).
///
/// # Example
///
/// ```
/// use r3bl_byte_string::ByteString;
///
/// let mut my_string = ByteString::from_bytes(b"bin\0ary");
/// assert_eq!(my_string.size(), 7);
/// assert_eq!(my_string.as_bytes(), Some(&b"bin\0ary"[..]));
///
/// my_string.clear();
/// assert_eq!(my_string.as_bytes(), None);
/// ```
#[derive(Clone)]
pub struct ByteString {
    pub(super) content: ByteStringContent,
}

/// The null / allocated distinction, as a first-class variant. In the [`Buf`]
/// variant the storage always holds the content followed by one `b'\0'`, so its
/// length is `size + 1` and is never zero.
///
/// [`Buf`]: Self::Buf
#[derive(Clone)]
pub(super) enum ByteStringContent {
    Null,
    Buf(ByteStorage),
}

impl ByteString {
    /// Creates an empty string in the allocated state: size 0, with storage holding
    /// just the terminator.
    #[must_use]
    pub fn new() -> Self {
        let mut storage = ByteStorage::new();
        storage.push(0);
        Self {
            content: ByteStringContent::Buf(storage),
        }
    }

    /// Creates a string in the null state: no content at all, distinct from an empty
    /// string. See [`clear`](Self::clear).
    #[must_use]
    pub fn null() -> Self {
        Self {
            content: ByteStringContent::Null,
        }
    }

    /// Creates a string holding an exact copy of `bytes` (embedded NUL bytes are
    /// preserved), with storage sized for the content plus the terminator.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut storage = ByteStorage::with_capacity(bytes.len() + 1);
        storage.extend_from_slice(bytes);
        storage.push(0);
        Self {
            content: ByteStringContent::Buf(storage),
        }
    }

    pub(super) fn buf(&self) -> Option<&ByteStorage> {
        match &self.content {
            ByteStringContent::Buf(storage) => Some(storage),
            ByteStringContent::Null => None,
        }
    }

    pub(super) fn buf_mut(&mut self) -> Option<&mut ByteStorage> {
        match &mut self.content {
            ByteStringContent::Buf(storage) => Some(storage),
            ByteStringContent::Null => None,
        }
    }

    /// Returns true when this string is in the null state.
    #[must_use]
    pub fn is_null(&self) -> bool { matches!(self.content, ByteStringContent::Null) }

    /// Logical content length in bytes. The terminator is not counted. Reports 0 in
    /// the null state.
    #[must_use]
    pub fn size(&self) -> usize { self.buf().map_or(0, |storage| storage.len() - 1) }

    /// Returns true when [`size`](Self::size) is 0. Note that both the null state
    /// and the empty allocated state are "empty".
    #[must_use]
    pub fn is_empty(&self) -> bool { self.size() == 0 }

    /// Content capacity in bytes, excluding the slot reserved for the terminator.
    /// Reports 0 in the null state.
    #[must_use]
    pub fn capacity(&self) -> usize {
        match self.buf() {
            Some(storage) => {
                let raw_capacity = storage.capacity();
                if raw_capacity > 0 { raw_capacity - 1 } else { 0 }
            }
            None => 0,
        }
    }

    /// Exact-length view of the content (embedded NUL bytes included). Returns
    /// [None] in the null state.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.buf().map(|storage| &storage[..storage.len() - 1])
    }

    /// Content plus the trailing terminator byte. Returns [None] in the null state.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> Option<&[u8]> {
        self.buf().map(|storage| &storage[..])
    }

    /// C string view of the content up to (and excluding) the first NUL byte.
    /// Content with embedded NUL bytes is truncated at the first one, exactly like a
    /// C consumer reading through the raw pointer would see it. Returns [None] in
    /// the null state.
    #[must_use]
    pub fn as_c_str(&self) -> Option<&CStr> {
        let bytes = self.as_bytes_with_nul()?;
        CStr::from_bytes_until_nul(bytes).ok()
    }

    /// Raw pointer to the content, for C interop. Returns a null pointer in the
    /// null state. Any mutating call invalidates the pointer.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        match self.buf() {
            Some(storage) => storage.as_ptr(),
            None => std::ptr::null(),
        }
    }

    /// Mutable view of the current content, for in-place edits. The view covers
    /// [`size`](Self::size) bytes; to make room first, call
    /// [`resize`](Self::resize). Returns [None] in the null state.
    #[must_use]
    pub fn as_mut_bytes(&mut self) -> Option<&mut [u8]> {
        self.buf_mut().map(|storage| {
            let size = storage.len() - 1;
            &mut storage[..size]
        })
    }

    /// Copies the content plus the terminator (`size() + 1` bytes) into `dst` and
    /// returns the logical size. In the null state nothing is copied and 0 is
    /// returned; this is the one operation that treats the null state as valid
    /// zero-length input instead of an error.
    ///
    /// # Panics
    ///
    /// Panics if `dst` holds fewer than `size() + 1` bytes.
    pub fn put_into(&self, dst: &mut [u8]) -> usize {
        match self.buf() {
            Some(storage) => {
                dst[..storage.len()].copy_from_slice(storage);
                storage.len() - 1
            }
            None => 0,
        }
    }
}

impl Default for ByteString {
    fn default() -> Self { Self::new() }
}

impl From<&str> for ByteString {
    fn from(arg: &str) -> Self { Self::from_bytes(arg.as_bytes()) }
}

impl From<&[u8]> for ByteString {
    fn from(arg: &[u8]) -> Self { Self::from_bytes(arg) }
}

impl From<&String> for ByteString {
    fn from(arg: &String) -> Self { Self::from_bytes(arg.as_bytes()) }
}

/// Construction from a NUL-terminated C string: the length comes from the
/// scan-to-NUL the [`CStr`] already performed.
impl From<&CStr> for ByteString {
    fn from(arg: &CStr) -> Self { Self::from_bytes(arg.to_bytes()) }
}
