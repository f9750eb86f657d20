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

/// Appends formatted content to a [`crate::ByteString`], growing it exactly as much
/// as the render requires. This is the variadic entry point over
/// [`crate::ByteString::append_fmt`].
///
/// Returns a [`crate::ByteStringResult`], so the call site can propagate failures
/// with `?`.
///
/// # Example
///
/// ```
/// use r3bl_byte_string::{ByteString, addf};
///
/// let mut acc = ByteString::new();
/// addf!(acc, "x = {}", 42).unwrap();
/// assert_eq!(acc.as_bytes(), Some(&b"x = 42"[..]));
/// ```
#[macro_export]
macro_rules! addf {
    ($dst:expr, $($arg:tt)*) => {
        $dst.append_fmt(core::format_args!($($arg)*))
    };
}

/// Replaces the content of a [`crate::ByteString`] with formatted output. This is
/// the variadic entry point over [`crate::ByteString::set_fmt`].
///
/// # Example
///
/// ```
/// use r3bl_byte_string::{ByteString, formatf};
///
/// let mut acc = ByteString::from("old content");
/// formatf!(acc, "{}-{}", 42, "ok").unwrap();
/// assert_eq!(acc.as_bytes(), Some(&b"42-ok"[..]));
/// ```
#[macro_export]
macro_rules! formatf {
    ($dst:expr, $($arg:tt)*) => {
        $dst.set_fmt(core::format_args!($($arg)*))
    };
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic
/// sugar that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

#[cfg(test)]
mod tests_decl_macros {
    use crate::{ByteString, ByteStringError, ByteStringResult, assert_eq2};

    #[test]
    fn test_addf_appends() -> ByteStringResult<()> {
        let mut acc = ByteString::new();
        addf!(acc, "one")?;
        addf!(acc, ", {}", "two")?;
        assert_eq2!(acc.as_bytes(), Some(&b"one, two"[..]));
        ok!()
    }

    #[test]
    fn test_formatf_replaces() -> ByteStringResult<()> {
        let mut acc = ByteString::from("stale");
        formatf!(acc, "fresh {}", 1)?;
        assert_eq2!(acc.as_bytes(), Some(&b"fresh 1"[..]));
        ok!()
    }

    #[test]
    fn test_addf_surfaces_null_state() {
        let mut acc = ByteString::null();
        assert_eq2!(
            addf!(acc, "refused"),
            Err(ByteStringError::NullBufferFormat)
        );
    }
}
