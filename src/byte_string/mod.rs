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

//! A mutable, owned, capacity-tracked byte sequence with a maintained NUL terminator.
//!
//! # Invariants
//!
//! These hold after every operation on a [`ByteString`]:
//!
//! 1. In the allocated state the backing store holds the logical content plus exactly
//!    one trailing `b'\0'`. Reading the byte at offset [`ByteString::size`] through
//!    [`ByteString::as_bytes_with_nul`] always yields `0`.
//! 2. [`ByteString::capacity`] never reports the slot reserved for the terminator:
//!    it is the raw capacity of the backing store minus one.
//! 3. The null state reports size `0`, [None] content, and a null
//!    [`ByteString::as_ptr`]. It is distinct from a zero-length allocated string;
//!    see [`ByteString::clear`] for the sharp asymmetry.
//! 4. Embedded NUL bytes in the content are preserved exactly. The logical size is
//!    whatever the caller (or the formatter) supplied; it is never recomputed by
//!    scanning for a NUL byte.
//!
//! # File layout
//!
//! | File                | Contents                                               |
//! | :------------------ | :----------------------------------------------------- |
//! | `byte_string.rs`    | The type, its content enum, constructors, accessors    |
//! | `sizes.rs`          | Backing storage alias and inline-capacity tuning       |
//! | `mutate.rs`         | Growth, overwrite, resize, clear, append               |
//! | `format.rs`         | Measure-then-commit formatted append protocol          |
//! | `order_and_hash.rs` | Stable hashcode, total order, equality                 |
//! | `inspect.rs`        | Escaped, human-readable debug rendering                |

// Attach sources.
pub mod byte_string;
pub mod format;
pub mod inspect;
pub mod mutate;
pub mod order_and_hash;
pub mod sizes;

// Re-export.
pub use byte_string::*;
pub use sizes::*;

// Tests.
mod test_byte_string;
