//! Bidirectional registry mapping string keys to non-zero numeric ids.
//!
//! `NameRegistry` keeps a strict one-to-one correspondence between non-empty
//! string keys and non-zero `u64` numbers, with O(1) lookup in both
//! directions and paginated enumeration in insertion order.
//!
//! ## Invariants
//!
//! - `forward[key] == n` iff `reverse[n] == key` for every live association
//! - No two keys share a live number; each key has exactly one live number
//! - Number 0 and the empty key are reserved sentinels, never stored
//! - The insertion-order vectors only grow by append and are index-aligned;
//!   `update` never moves or rewrites an entry
//!
//! ## Entries are append-only
//!
//! A key, once added, is never removed. `update` re-associates a key with a
//! new number (freeing the old one for a future `add`/`update`), but the
//! insertion-order vectors keep the number recorded at insertion time.
//! Callers that page through [`NameRegistry::entries`] and need live numbers
//! must cross-reference [`NameRegistry::get_number`].
//!
//! ## Concurrency
//!
//! Single-writer: no internal locking. The host must serialize mutating
//! calls (`add`, `update`); reads may interleave with each other freely.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{RegistryError, Result};

/// Sentinel returned by [`NameRegistry::get_number`] for unregistered keys.
/// Never a valid stored number.
pub const UNASSIGNED_NUMBER: u64 = 0;

/// Sentinel returned by [`NameRegistry::get_key`] for unassigned numbers.
/// Never a valid stored key.
pub const UNASSIGNED_KEY: &str = "";

/// Bidirectional, append-only key ↔ number registry.
///
/// Constructed empty and owned by the host; there is no process-wide
/// instance. Keys are interned as `Arc<str>` shared between the forward
/// map, the reverse map, and the insertion-order list, so `Clone` on the
/// registry is cheap relative to re-allocating every key.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    /// Forward map: key → live number.
    forward: HashMap<Arc<str>, u64>,
    /// Reverse map: live number → key.
    reverse: HashMap<u64, Arc<str>>,
    /// Keys in insertion order.
    keys: Vec<Arc<str>>,
    /// Numbers at insertion time, index-aligned with `keys`.
    /// NOT rewritten by `update` (see module docs).
    numbers: Vec<u64>,
}

impl NameRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(key, number)` pairs, applying [`add`] in
    /// order with full validation.
    ///
    /// [`add`]: NameRegistry::add
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, u64)>,
        K: AsRef<str>,
    {
        let mut registry = Self::new();
        for (key, number) in pairs {
            registry.add(key.as_ref(), number)?;
        }
        Ok(registry)
    }

    /// Register a new `(key, number)` association.
    ///
    /// Appends the pair to the insertion-order vectors and inserts it into
    /// both maps. Validation completes before any mutation, so a failed
    /// call leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidArgument`] if `key` is empty or `number` is 0
    /// - [`RegistryError::DuplicateKey`] if `key` is already registered
    /// - [`RegistryError::DuplicateNumber`] if `number` is live-assigned
    pub fn add(&mut self, key: &str, number: u64) -> Result<()> {
        if key.is_empty() {
            return Err(RegistryError::invalid_argument("key must not be empty"));
        }
        if number == UNASSIGNED_NUMBER {
            return Err(RegistryError::invalid_argument(
                "number must be non-zero (0 is the unassigned sentinel)",
            ));
        }
        if self.forward.contains_key(key) {
            return Err(RegistryError::duplicate_key(key));
        }
        if self.reverse.contains_key(&number) {
            return Err(RegistryError::DuplicateNumber(number));
        }

        let interned: Arc<str> = Arc::from(key);
        self.forward.insert(interned.clone(), number);
        self.reverse.insert(number, interned.clone());
        self.keys.push(interned);
        self.numbers.push(number);
        Ok(())
    }

    /// Re-associate an existing key with a new number.
    ///
    /// The key's prior number is removed from the reverse map and becomes
    /// unassigned until a future `add`/`update` claims it. The
    /// insertion-order vectors are untouched: the entry keeps its original
    /// position and its insertion-time number.
    ///
    /// Re-asserting the number a key already holds is a no-op success; the
    /// duplicate check only rejects numbers held by a *different* key.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidArgument`] if `key` is empty or `new_number` is 0
    /// - [`RegistryError::UnknownKey`] if `key` was never registered
    /// - [`RegistryError::DuplicateNumber`] if `new_number` is live-assigned
    ///   to another key
    pub fn update(&mut self, key: &str, new_number: u64) -> Result<()> {
        if key.is_empty() {
            return Err(RegistryError::invalid_argument("key must not be empty"));
        }
        if new_number == UNASSIGNED_NUMBER {
            return Err(RegistryError::invalid_argument(
                "number must be non-zero (0 is the unassigned sentinel)",
            ));
        }
        let Some((interned, current)) = self
            .forward
            .get_key_value(key)
            .map(|(k, &n)| (k.clone(), n))
        else {
            return Err(RegistryError::unknown_key(key));
        };
        if new_number == current {
            // Idempotent re-assert of the live association.
            return Ok(());
        }
        if self.reverse.contains_key(&new_number) {
            return Err(RegistryError::DuplicateNumber(new_number));
        }

        let freed = self.reverse.remove(&current);
        debug_assert!(freed.is_some(), "reverse map out of sync with forward map");
        self.reverse.insert(new_number, interned.clone());
        self.forward.insert(interned, new_number);
        Ok(())
    }

    /// Forward lookup: the number currently associated with `key`, or
    /// [`UNASSIGNED_NUMBER`] (0) if the key was never registered.
    pub fn get_number(&self, key: &str) -> u64 {
        self.forward.get(key).copied().unwrap_or(UNASSIGNED_NUMBER)
    }

    /// Reverse lookup: the key currently associated with `number`, or
    /// [`UNASSIGNED_KEY`] (`""`) if the number is unassigned.
    pub fn get_key(&self, number: u64) -> &str {
        self.reverse
            .get(&number)
            .map(|k| &**k)
            .unwrap_or(UNASSIGNED_KEY)
    }

    /// True if `key` is registered.
    pub fn contains_key(&self, key: &str) -> bool {
        self.forward.contains_key(key)
    }

    /// Paginated enumeration: index-aligned slices of keys and
    /// insertion-time numbers, from `start` for up to `count` entries,
    /// clipped to the end of the registry.
    ///
    /// Position `i` in both slices refers to the same entry. Numbers are
    /// the values recorded at insertion time; cross-reference
    /// [`get_number`] for live associations.
    ///
    /// # Errors
    ///
    /// [`RegistryError::IndexOutOfRange`] if `start >= self.len()`,
    /// including any `start` against an empty registry.
    ///
    /// [`get_number`]: NameRegistry::get_number
    pub fn entries(&self, start: usize, count: usize) -> Result<(&[Arc<str>], &[u64])> {
        let size = self.keys.len();
        if start >= size {
            return Err(RegistryError::IndexOutOfRange { start, size });
        }
        let end = start.saturating_add(count).min(size);
        Ok((&self.keys[start..end], &self.numbers[start..end]))
    }

    /// Iterate all entries in insertion order as `(key, insertion-time number)`.
    pub fn iter_entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.keys
            .iter()
            .zip(self.numbers.iter())
            .map(|(k, &n)| (&**k, n))
    }

    /// Total number of entries ever added (monotonically non-decreasing).
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // Internal accessors for snapshot construction/restore.

    pub(crate) fn parts(&self) -> (&[Arc<str>], &[u64], &HashMap<Arc<str>, u64>) {
        (&self.keys, &self.numbers, &self.forward)
    }

    pub(crate) fn from_parts(
        forward: HashMap<Arc<str>, u64>,
        reverse: HashMap<u64, Arc<str>>,
        keys: Vec<Arc<str>>,
        numbers: Vec<u64>,
    ) -> Self {
        Self {
            forward,
            reverse,
            keys,
            numbers,
        }
    }
}
