//! Snapshot wire type for host-side persistence.
//!
//! The registry itself owns no persistence format; hosts serialize a
//! [`RegistrySnapshot`] with whatever codec they use elsewhere. The snapshot
//! captures both the insertion-order vectors (with insertion-time numbers)
//! and the index-aligned live associations, so a restore reproduces the
//! registry exactly: pagination order, historical numbers, and the live
//! forward/reverse maps.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::registry::NameRegistry;

/// Serializable snapshot of a [`NameRegistry`].
///
/// All three vectors are index-aligned: position `i` holds one entry's key,
/// its number at insertion time, and its current live number. `numbers` may
/// contain duplicates (a number freed by `update` can be re-added under a
/// later key); `live` never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Keys in insertion order.
    pub keys: Vec<String>,
    /// Numbers at insertion time, index-aligned with `keys`.
    pub numbers: Vec<u64>,
    /// Live numbers, index-aligned with `keys`.
    pub live: Vec<u64>,
}

impl NameRegistry {
    /// Capture the full registry state as a serializable snapshot.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let (keys, numbers, forward) = self.parts();
        let live = keys
            .iter()
            .map(|k| forward.get(k).copied().unwrap_or_default())
            .collect();
        RegistrySnapshot {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            numbers: numbers.to_vec(),
            live,
        }
    }

    /// Rebuild a registry from a snapshot, validating every row.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidArgument`] on misaligned vector lengths,
    ///   an empty key, or a zero number (insertion-time or live)
    /// - [`RegistryError::DuplicateKey`] on a repeated key
    /// - [`RegistryError::DuplicateNumber`] on a repeated live number
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Result<Self> {
        let RegistrySnapshot { keys, numbers, live } = snapshot;
        if keys.len() != numbers.len() || keys.len() != live.len() {
            return Err(RegistryError::invalid_argument(format!(
                "snapshot vectors misaligned: {} keys, {} numbers, {} live",
                keys.len(),
                numbers.len(),
                live.len()
            )));
        }

        let mut forward: HashMap<Arc<str>, u64> = HashMap::with_capacity(keys.len());
        let mut reverse: HashMap<u64, Arc<str>> = HashMap::with_capacity(keys.len());
        let mut interned_keys: Vec<Arc<str>> = Vec::with_capacity(keys.len());

        for (i, key) in keys.iter().enumerate() {
            if key.is_empty() {
                return Err(RegistryError::invalid_argument(format!(
                    "snapshot: empty key at index {}",
                    i
                )));
            }
            if numbers[i] == 0 || live[i] == 0 {
                return Err(RegistryError::invalid_argument(format!(
                    "snapshot: zero number at index {}",
                    i
                )));
            }
            let arc: Arc<str> = Arc::from(key.as_str());
            if forward.contains_key(&arc) {
                return Err(RegistryError::duplicate_key(key.as_str()));
            }
            if reverse.contains_key(&live[i]) {
                return Err(RegistryError::DuplicateNumber(live[i]));
            }
            forward.insert(arc.clone(), live[i]);
            reverse.insert(live[i], arc.clone());
            interned_keys.push(arc);
        }

        Ok(Self::from_parts(forward, reverse, interned_keys, numbers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> NameRegistry {
        let mut reg = NameRegistry::new();
        reg.add("alice", 1).unwrap();
        reg.add("bob", 2).unwrap();
        reg.update("alice", 7).unwrap();
        reg.add("carol", 1).unwrap(); // reuses the freed 1
        reg
    }

    #[test]
    fn test_snapshot_captures_insertion_and_live_state() {
        let snap = sample_registry().snapshot();
        assert_eq!(snap.keys, vec!["alice", "bob", "carol"]);
        assert_eq!(snap.numbers, vec![1, 2, 1]);
        assert_eq!(snap.live, vec![7, 2, 1]);
    }

    #[test]
    fn test_restore_reproduces_registry() {
        let reg = sample_registry();
        let restored = NameRegistry::from_snapshot(reg.snapshot()).unwrap();

        assert_eq!(restored.len(), 3);
        assert_eq!(restored.get_number("alice"), 7);
        assert_eq!(restored.get_key(7), "alice");
        assert_eq!(restored.get_key(1), "carol");
        assert_eq!(restored.get_key(2), "bob");

        // Insertion-order vectors carry the historical numbers.
        let (keys, numbers) = restored.entries(0, 3).unwrap();
        assert_eq!(&*keys[0], "alice");
        assert_eq!(numbers, &[1, 2, 1]);
    }

    #[test]
    fn test_restore_rejects_misaligned_vectors() {
        let snap = RegistrySnapshot {
            keys: vec!["a".into()],
            numbers: vec![1, 2],
            live: vec![1],
        };
        let err = NameRegistry::from_snapshot(snap).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument(_)));
    }

    #[test]
    fn test_restore_rejects_empty_key() {
        let snap = RegistrySnapshot {
            keys: vec!["a".into(), "".into()],
            numbers: vec![1, 2],
            live: vec![1, 2],
        };
        let err = NameRegistry::from_snapshot(snap).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument(_)));
    }

    #[test]
    fn test_restore_rejects_zero_numbers() {
        let snap = RegistrySnapshot {
            keys: vec!["a".into()],
            numbers: vec![1],
            live: vec![0],
        };
        let err = NameRegistry::from_snapshot(snap).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument(_)));
    }

    #[test]
    fn test_restore_rejects_duplicate_key() {
        let snap = RegistrySnapshot {
            keys: vec!["a".into(), "a".into()],
            numbers: vec![1, 2],
            live: vec![1, 2],
        };
        let err = NameRegistry::from_snapshot(snap).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateKey("a".to_string()));
    }

    #[test]
    fn test_restore_rejects_duplicate_live_number() {
        let snap = RegistrySnapshot {
            keys: vec!["a".into(), "b".into()],
            numbers: vec![1, 2],
            live: vec![3, 3],
        };
        let err = NameRegistry::from_snapshot(snap).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateNumber(3));
    }

    #[test]
    fn test_restore_allows_duplicate_insertion_time_numbers() {
        // add(a,1); update(a,2); add(b,1) legitimately records numbers [1, 1].
        let snap = RegistrySnapshot {
            keys: vec!["a".into(), "b".into()],
            numbers: vec![1, 1],
            live: vec![2, 1],
        };
        let reg = NameRegistry::from_snapshot(snap).unwrap();
        assert_eq!(reg.get_number("a"), 2);
        assert_eq!(reg.get_key(1), "b");
    }
}
