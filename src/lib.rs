//! # name-registry
//!
//! Bidirectional, append-only registry mapping non-empty string keys to
//! non-zero numeric ids, for embedding in registry/directory hosts.
//!
//! This crate provides:
//! - `NameRegistry`: O(1) forward and reverse lookup with strict one-to-one
//!   uniqueness over live associations
//! - Paginated enumeration in insertion order
//! - A serde snapshot type for host-side persistence
//!
//! ## Design Principles
//!
//! 1. **Instance-owned state**: constructed empty, owned by the host; no
//!    process-wide singleton
//! 2. **Append-only**: keys persist for the registry's lifetime; only their
//!    numeric association can change (via `update`)
//! 3. **Single-writer**: no internal locking; the host serializes mutations
//!
//! ## Example
//!
//! ```
//! use name_registry::NameRegistry;
//!
//! let mut reg = NameRegistry::new();
//! reg.add("alice", 1)?;
//! reg.add("bob", 2)?;
//! assert_eq!(reg.get_number("alice"), 1);
//! assert_eq!(reg.get_key(2), "bob");
//!
//! reg.update("alice", 7)?;
//! assert_eq!(reg.get_number("alice"), 7);
//! assert_eq!(reg.get_key(1), ""); // 1 is unassigned again
//! # Ok::<(), name_registry::RegistryError>(())
//! ```

pub mod error;
pub mod registry;
pub mod snapshot;

// Re-export main types
pub use error::{RegistryError, Result};
pub use registry::{NameRegistry, UNASSIGNED_KEY, UNASSIGNED_NUMBER};
pub use snapshot::RegistrySnapshot;
