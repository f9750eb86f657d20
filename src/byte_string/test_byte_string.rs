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

//! End-to-end coverage of the documented [`crate::ByteString`] contract: binary
//! round-trips, the terminator invariant, null vs empty asymmetry, the formatted
//! append protocol, ordering, hashing, escaping, and capacity accounting.

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::{ByteString, ByteStringResult, addf, assert_eq2, formatf, ok};

    #[test_case(b""; "empty")]
    #[test_case(b"ascii"; "plain ascii")]
    #[test_case(b"emb\0edded"; "embedded nul")]
    #[test_case(&[0x00, 0x00, 0x00]; "all nul bytes")]
    #[test_case(&[0xde, 0xad, 0xbe, 0xef]; "arbitrary binary")]
    fn test_round_trip(content: &[u8]) {
        let my_string = ByteString::from_bytes(content);
        assert_eq2!(my_string.as_bytes(), Some(content));
        assert_eq2!(my_string.size(), content.len());
    }

    /// After any mutation of an allocated string, the byte just past the logical
    /// content is the terminator.
    #[test]
    fn test_terminator_invariant_across_mutations() -> ByteStringResult<()> {
        let mut my_string = ByteString::from("seed");

        let check = |my_string: &ByteString| {
            let with_nul = my_string.as_bytes_with_nul().unwrap();
            assert_eq2!(with_nul[my_string.size()], 0);
        };

        check(&my_string);

        my_string.set_bytes(b"over\0written")?;
        check(&my_string);

        my_string.append_bytes(b" more")?;
        check(&my_string);

        my_string.resize(3)?;
        check(&my_string);

        my_string.resize(20)?;
        check(&my_string);

        addf!(my_string, " fmt {}", 1)?;
        check(&my_string);

        formatf!(my_string, "replaced")?;
        check(&my_string);

        my_string.ensure_capacity(200)?;
        check(&my_string);

        my_string.copy_from(&ByteString::from("copied"))?;
        check(&my_string);

        ok!()
    }

    #[test]
    fn test_null_vs_empty_asymmetry() -> ByteStringResult<()> {
        let mut my_string = ByteString::from("content");

        my_string.clear();
        assert!(my_string.as_bytes().is_none());
        assert!(my_string.as_ptr().is_null());

        my_string.set_bytes(b"")?;
        assert_eq2!(my_string.as_bytes(), Some(&b""[..]));
        assert!(!my_string.as_ptr().is_null());

        ok!()
    }

    #[test]
    fn test_format_replacing_from_tiny_and_large_capacity() -> ByteStringResult<()> {
        // Fits in the inline storage: single-pass commit, no heap spill.
        let mut small = ByteString::new();
        formatf!(small, "{}-{}", 42, "ok")?;
        assert_eq2!(small.as_bytes(), Some(&b"42-ok"[..]));
        assert_eq2!(small.size(), 5);

        // Forces the grow path before the commit pass.
        let mut large = ByteString::new();
        let initial_capacity = large.capacity();
        formatf!(large, "{}-{}-{:>100}", 42, "ok", "pad")?;
        assert_eq2!(large.size(), 106);
        assert!(large.capacity() > initial_capacity);
        assert_eq2!(&large.as_bytes().unwrap()[..6], b"42-ok-");

        ok!()
    }

    #[test]
    fn test_hash_stability() {
        assert_eq2!(
            ByteString::from("abc").hashcode(),
            ByteString::from("abc").hashcode()
        );
        assert_eq2!(ByteString::null().hashcode(), 0);
    }

    #[test]
    fn test_capacity_accounting_excludes_terminator() -> ByteStringResult<()> {
        let mut my_string = ByteString::new();
        my_string.ensure_capacity(100)?;
        assert!(my_string.capacity() >= 100);

        // Filling the string to the reported capacity must not shrink it below the
        // requested room: the terminator lives in its own reserved slot.
        let fill = vec![b'z'; 100];
        my_string.set_bytes(&fill)?;
        assert!(my_string.capacity() >= 100);
        assert_eq2!(my_string.size(), 100);
        ok!()
    }

    #[test]
    fn test_e2e_hello_world() -> ByteStringResult<()> {
        let mut acc = ByteString::new();
        addf!(acc, "Hello, ")?;
        addf!(acc, "{}!", "World")?;
        assert_eq2!(acc.as_bytes(), Some(&b"Hello, World!"[..]));
        assert_eq2!(acc.size(), 13);
        assert_eq2!(acc.as_c_str().unwrap().to_bytes(), b"Hello, World!");
        ok!()
    }

    #[test]
    fn test_clone_is_deep() -> ByteStringResult<()> {
        let original = ByteString::from("shared?");
        let mut cloned = original.clone();
        cloned.set_bytes(b"changed")?;
        assert_eq2!(original.as_bytes(), Some(&b"shared?"[..]));
        assert_eq2!(cloned.as_bytes(), Some(&b"changed"[..]));
        ok!()
    }

    #[test]
    fn test_resize_then_write_in_place() -> ByteStringResult<()> {
        let mut my_string = ByteString::new();
        my_string.resize(5)?;
        my_string
            .as_mut_bytes()
            .unwrap()
            .copy_from_slice(b"writ\0");
        assert_eq2!(my_string.as_bytes(), Some(&b"writ\0"[..]));
        assert_eq2!(my_string.size(), 5);
        ok!()
    }

    #[test]
    fn test_default_matches_new() {
        let defaulted = ByteString::default();
        assert!(!defaulted.is_null());
        assert_eq2!(defaulted.size(), 0);
    }
}
