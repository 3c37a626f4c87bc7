//! Test utilities for the Lanai TST library.
//!
//! This module provides the proptest strategies shared by the property
//! test suites. Generated keys deliberately avoid the wildcard characters
//! `*` and `.` so that wildcard-pattern properties can build patterns from
//! keys without accidental wildcards.

use proptest::prelude::*;

/// Maximum length (in code points) for generated keys.
const MAX_KEY_LENGTH: usize = 16;

/// Strategy for non-empty lowercase ASCII keys.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[a-z]{{1,{MAX_KEY_LENGTH}}}")).unwrap()
}

/// Strategy for non-empty keys mixing single-byte and multi-byte code points.
pub fn unicode_key_strategy() -> impl Strategy<Value = String> {
    let code_point = prop_oneof![
        prop::char::range('a', 'f'),
        prop::char::range('α', 'ω'),
        prop::char::range('一', '十'),
    ];
    prop::collection::vec(code_point, 1..MAX_KEY_LENGTH).prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for a non-empty batch of key-value entries.
///
/// Duplicate keys are allowed on purpose; suites use them to exercise
/// last-write-wins overwrite semantics.
pub fn entries_strategy() -> impl Strategy<Value = Vec<(String, u32)>> {
    prop::collection::vec((key_strategy(), any::<u32>()), 1..32)
}
