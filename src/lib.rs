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

//! # `r3bl_byte_string`
//!
//! A dynamically-resizable, binary-safe byte string. [`ByteString`] is the fundamental
//! text / data representation used by our messaging plumbing: an owned,
//! capacity-tracked byte sequence that keeps a NUL terminator after its content for
//! C-string interop, while the logical content itself may contain embedded NUL bytes.
//!
//! The two properties that make this type different from [`String`] / [`Vec<u8>`]:
//!
//! 1. **The null state**. A [`ByteString`] can hold "no content at all", which is
//!    distinct from holding a zero-length content. The null state is a meaningful
//!    "absent" marker: [`ByteString::as_bytes`] yields [None], and formatted appends
//!    refuse to run until the caller explicitly sets content. See
//!    [`ByteString::clear`] and [`ByteString::null`].
//!
//! 2. **Measure-then-commit formatting**. [`ByteString::append_fmt`] renders its
//!    [`std::fmt::Arguments`] twice: once through a counting writer to learn the exact
//!    byte length, then once into storage that has been grown to exactly fit. A single
//!    measured allocation replaces guess-and-double growth.
//!
//! # Example
//!
//! ```
//! use r3bl_byte_string::{ByteString, addf};
//!
//! let mut acc = ByteString::new();
//! addf!(acc, "Hello, ").unwrap();
//! addf!(acc, "{}!", "World").unwrap();
//!
//! assert_eq!(acc.as_bytes(), Some(&b"Hello, World!"[..]));
//! assert_eq!(acc.size(), 13);
//! ```

// Attach sources.
pub mod byte_string;
pub mod common;
pub mod decl_macros;

// Re-export.
pub use byte_string::*;
pub use common::*;
