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

//! Tuning parameters for the byte string backing store. The rule of thumb is that
//! smaller static allocation sizes are better than larger: huge inline buffers bloat
//! every enum variant that carries one, and spilling to the heap is cheap for the
//! message payloads this type carries.

use smallvec::SmallVec;

/// Backing storage for [`crate::ByteString`] content. Holds the content bytes plus
/// one trailing NUL byte. When this gets larger than
/// [`DEFAULT_BYTE_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type ByteStorage = SmallVec<[u8; DEFAULT_BYTE_STORAGE_SIZE]>;

// PERF: If you make this number too large, eg: more than 16, then moving a
// ByteString around gets slower than the heap spill it avoids.
pub const DEFAULT_BYTE_STORAGE_SIZE: usize = 16;
