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

use std::{cmp::Ordering,
          hash::{Hash, Hasher}};

use super::byte_string::ByteString;

impl ByteString {
    /// Multiplicative running hash over the content: seed 1, multiplier 31, one
    /// step per byte. Returns 0 in the null state.
    ///
    /// The seed and multiplier are fixed; identical content always produces the
    /// same value, across runs and across processes (no randomized seeding). Use
    /// this when a hash value is persisted or compared out of process; in-process
    /// containers should just use the [Hash] impl.
    #[must_use]
    pub fn hashcode(&self) -> u64 {
        match self.as_bytes() {
            None => 0,
            Some(bytes) => {
                let mut hashcode: u64 = 1;
                for &byte in bytes {
                    hashcode = hashcode.wrapping_mul(31).wrapping_add(u64::from(byte));
                }
                hashcode
            }
        }
    }

    /// Content bytes with the null state flattened to the empty slice. Ordering and
    /// equality look through the null / empty distinction on purpose: a null string
    /// and an empty string compare as equal.
    pub(super) fn content_bytes(&self) -> &[u8] { self.as_bytes().unwrap_or_default() }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.content_bytes() == other.content_bytes()
    }
}

impl Eq for ByteString {}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for ByteString {
    /// Total order: primarily by **descending** content length (longer sorts
    /// first), with byte-wise lexicographic comparison only breaking ties between
    /// equal lengths.
    ///
    /// The descending-length rule is kept for compatibility with existing sorted
    /// data. It carries no semantic meaning; do not write new code that relies on
    /// the relative order of unequal-length strings.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .size()
            .cmp(&self.size())
            .then_with(|| self.content_bytes().cmp(other.content_bytes()))
    }
}

impl Hash for ByteString {
    /// Feeds length plus content so that [Eq]-equal values (including null vs
    /// empty) hash identically. For a seed-stable value use
    /// [`ByteString::hashcode`] instead.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        self.content_bytes().hash(state);
    }
}

#[cfg(test)]
mod tests_order_and_hash {
    use std::cmp::Ordering;

    use crate::{ByteString, assert_eq2};

    #[test]
    fn test_hashcode_is_stable_across_calls() {
        let my_string = ByteString::from("abc");
        assert_eq2!(my_string.hashcode(), my_string.hashcode());
        assert_eq2!(my_string.hashcode(), ByteString::from("abc").hashcode());
    }

    #[test]
    fn test_hashcode_known_values() {
        assert_eq2!(ByteString::null().hashcode(), 0);
        assert_eq2!(ByteString::new().hashcode(), 1);
        // h = ((1 * 31 + 'a') * 31 + 'b') = (31 + 97) * 31 + 98 = 4066.
        assert_eq2!(ByteString::from("ab").hashcode(), 4066);
    }

    #[test]
    fn test_longer_sorts_first() {
        let longer = ByteString::from("xx");
        let shorter = ByteString::from("x");
        assert_eq2!(longer.cmp(&shorter), Ordering::Less);
        assert_eq2!(shorter.cmp(&longer), Ordering::Greater);
        assert!(longer < shorter);
    }

    #[test]
    fn test_equal_length_falls_back_to_byte_order() {
        let ab = ByteString::from("ab");
        let ac = ByteString::from("ac");
        assert_eq2!(ab.cmp(&ac), Ordering::Less);
        assert!(ab < ac);
    }

    #[test]
    fn test_null_compares_equal_to_empty() {
        let null_string = ByteString::null();
        let empty_string = ByteString::new();
        assert_eq2!(null_string.cmp(&empty_string), Ordering::Equal);
        assert_eq2!(null_string, empty_string);
    }

    #[test]
    fn test_eq_requires_same_length_and_bytes() {
        assert_eq2!(ByteString::from("abc"), ByteString::from("abc"));
        assert_ne!(ByteString::from("abc"), ByteString::from("abd"));
        assert_ne!(ByteString::from("abc"), ByteString::from("ab"));
    }

    #[test]
    fn test_embedded_nul_participates_in_order_and_eq() {
        let a = ByteString::from_bytes(b"a\0b");
        let b = ByteString::from_bytes(b"a\0c");
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq2!(a, ByteString::from_bytes(b"a\0b"));
    }

    #[test]
    fn test_sorting_a_vec_of_byte_strings() {
        let mut items = vec![
            ByteString::from("b"),
            ByteString::from("aaa"),
            ByteString::from("a"),
            ByteString::from("cc"),
        ];
        items.sort();
        let rendered: Vec<&[u8]> =
            items.iter().filter_map(ByteString::as_bytes).collect();
        // Longest first, ties broken byte-wise.
        assert_eq2!(rendered, vec![&b"aaa"[..], &b"cc"[..], &b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn test_usable_as_hash_map_key() {
        use std::collections::HashMap;

        let mut map: HashMap<ByteString, usize> = HashMap::new();
        map.insert(ByteString::from("key"), 7);
        assert_eq2!(map.get(&ByteString::from("key")), Some(&7));
        assert_eq2!(map.get(&ByteString::from("other")), None);
    }
}
