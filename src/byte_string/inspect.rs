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

//! Human-readable rendering of (possibly binary) content. Printable ASCII bytes are
//! emitted literally inside double quotes; everything else becomes a `\xHH`
//! lowercase hex escape. The null state renders as the bare literal `null`.

use std::fmt;

use super::byte_string::ByteString;
use crate::ByteStringResult;

/// Printable ASCII, space through tilde.
fn is_printable(byte: u8) -> bool { (0x20..=0x7e).contains(&byte) }

impl ByteString {
    /// Appends the escaped rendering of `self` to `dst`. A null `self` appends the
    /// literal text `null` (unquoted); otherwise the content is emitted between
    /// double quotes with non-printable bytes escaped as `\xHH`.
    ///
    /// # Errors
    ///
    /// The first failure from appending to `dst` is propagated immediately,
    /// including [`crate::ByteStringError::NullBufferFormat`] when `dst` itself is
    /// in the null state.
    pub fn inspect_into(&self, dst: &mut ByteString) -> ByteStringResult<()> {
        let Some(bytes) = self.as_bytes() else {
            return dst.append_str("null");
        };

        dst.append_str("\"")?;
        for &byte in bytes {
            if is_printable(byte) {
                dst.append_bytes(&[byte])?;
            } else {
                dst.append_fmt(format_args!("\\x{byte:02x}"))?;
            }
        }
        dst.append_str("\"")
    }
}

/// Debug formatting uses the same escaped rendering as
/// [`ByteString::inspect_into`].
impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(bytes) = self.as_bytes() else {
            return f.write_str("null");
        };

        f.write_str("\"")?;
        for &byte in bytes {
            if is_printable(byte) {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        f.write_str("\"")
    }
}

#[cfg(test)]
mod tests_inspect {
    use test_case::test_case;

    use crate::{ByteString, assert_eq2};

    fn inspect_to_string(arg: &ByteString) -> String {
        let mut dst = ByteString::new();
        arg.inspect_into(&mut dst).unwrap();
        String::from_utf8(dst.as_bytes().unwrap().to_vec()).unwrap()
    }

    #[test_case(&[0x41, 0x09, 0x42], "\"A\\x09B\""; "tab escaped between letters")]
    #[test_case(b"plain text", "\"plain text\""; "printable passes through")]
    #[test_case(&[0x00], "\"\\x00\""; "embedded nul escaped")]
    #[test_case(&[0xff, 0x7f], "\"\\xff\\x7f\""; "high and del bytes escaped")]
    #[test_case(b"", "\"\""; "empty content renders as bare quotes")]
    fn test_inspect_escaping(content: &[u8], expected: &str) {
        let my_string = ByteString::from_bytes(content);
        assert_eq2!(inspect_to_string(&my_string), expected);
    }

    #[test]
    fn test_inspect_null_renders_unquoted_null() {
        assert_eq2!(inspect_to_string(&ByteString::null()), "null");
    }

    #[test]
    fn test_inspect_appends_to_existing_content() {
        let mut dst = ByteString::from("value: ");
        ByteString::from("ok").inspect_into(&mut dst).unwrap();
        assert_eq2!(dst.as_bytes(), Some(&b"value: \"ok\""[..]));
    }

    #[test]
    fn test_inspect_into_null_dst_is_an_error() {
        let mut dst = ByteString::null();
        let result = ByteString::from("content").inspect_into(&mut dst);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_matches_inspect() {
        let my_string = ByteString::from_bytes(&[0x41, 0x09, 0x42]);
        assert_eq2!(format!("{my_string:?}"), "\"A\\x09B\"");
        assert_eq2!(format!("{:?}", ByteString::null()), "null");
    }
}
