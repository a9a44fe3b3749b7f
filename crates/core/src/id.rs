// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entity key generation.
//!
//! Keys use the store's push-key format: 8 characters of millisecond
//! timestamp followed by 12 random characters, drawn from an alphabet whose
//! ASCII order matches its digit order. A key generated later always sorts
//! after one generated earlier by the same [`KeyGen`], even within the same
//! millisecond or when the clock steps backwards.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh entity keys.
pub trait IdGen: Send + Sync {
    fn next(&self) -> String;
}

const ALPHABET: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";
const TIME_DIGITS: usize = 8;
const RANDOM_DIGITS: usize = 12;

#[derive(Debug, Default)]
struct KeyState {
    millis: u64,
    random: [u8; RANDOM_DIGITS],
}

/// Time-ordered push-key generator used for production ids.
#[derive(Debug, Default)]
pub struct KeyGen {
    state: Mutex<KeyState>,
}

impl KeyGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGen for KeyGen {
    fn next(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));

        let mut state = self.state.lock();
        if now > state.millis {
            state.millis = now;
            state.random = random_digits();
        } else {
            increment(&mut state.random);
        }

        let mut key = encode_time(state.millis);
        key.extend(state.random.iter().map(|&d| char::from(ALPHABET[usize::from(d)])));
        key
    }
}

/// The low 48 bits of `millis` as 8 alphabet characters, most significant first.
fn encode_time(mut millis: u64) -> String {
    let mut digits = [0u8; TIME_DIGITS];
    for digit in digits.iter_mut().rev() {
        *digit = ALPHABET[(millis % 64) as usize];
        millis /= 64;
    }
    digits.iter().map(|&b| char::from(b)).collect()
}

fn random_digits() -> [u8; RANDOM_DIGITS] {
    // Bytes 6 and 8 carry the UUID version and variant bits.
    let bytes = uuid::Uuid::new_v4().into_bytes();
    let mut digits = [0u8; RANDOM_DIGITS];
    for (digit, byte) in digits
        .iter_mut()
        .zip(bytes[..6].iter().chain(&bytes[10..]))
    {
        *digit = byte & 63;
    }
    digits
}

/// Add one to a base-64 digit string, carrying leftwards.
fn increment(digits: &mut [u8; RANDOM_DIGITS]) {
    for digit in digits.iter_mut().rev() {
        if *digit < 63 {
            *digit += 1;
            return;
        }
        *digit = 0;
    }
}

/// Predictable ids for tests: `prefix-1`, `prefix-2`, ...
///
/// Clones share one counter, so a test can keep a handle and check how many
/// ids the code under test asked for.
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: String,
    issued: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{n}", self.prefix)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
