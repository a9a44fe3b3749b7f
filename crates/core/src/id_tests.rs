// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashSet;

#[test]
fn sequential_ids_are_prefixed_and_counted() {
    let ids = SequentialIdGen::new("step");
    let handle = ids.clone();
    assert_eq!(ids.next(), "step-1");
    assert_eq!(ids.next(), "step-2");
    assert_eq!(handle.issued(), 2);
    assert_eq!(handle.next(), "step-3");
}

#[yare::parameterized(
    zero      = { 0, "--------" },
    last_char = { 63, "-------z" },
    carry     = { 64, "------0-" },
)]
fn time_prefix_encoding(millis: u64, expected: &str) {
    assert_eq!(encode_time(millis), expected);
}

#[test]
fn increment_carries() {
    let mut digits = [0u8; RANDOM_DIGITS];
    digits[RANDOM_DIGITS - 1] = 63;
    increment(&mut digits);
    assert_eq!(digits[RANDOM_DIGITS - 1], 0);
    assert_eq!(digits[RANDOM_DIGITS - 2], 1);
}

#[test]
fn keys_use_the_push_key_alphabet() {
    let key = KeyGen::new().next();
    assert_eq!(key.len(), TIME_DIGITS + RANDOM_DIGITS);
    assert!(key.bytes().all(|b| ALPHABET.contains(&b)));
}

#[test]
fn keys_are_unique_and_ordered() {
    let keys = KeyGen::new();
    let generated: Vec<String> = (0..500).map(|_| keys.next()).collect();

    let mut sorted = generated.clone();
    sorted.sort();
    assert_eq!(sorted, generated);
    assert_eq!(generated.iter().collect::<HashSet<_>>().len(), 500);
}
