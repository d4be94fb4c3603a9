//! BLAKE3 content digests for table comparison
//!
//! Provides:
//! - Per-entry BLAKE3 hashes
//! - Order-independent XOR combination into a root
//! - O(1) table equality checks
//!
//! Diagnostic only, like the slot checksum; not an integrity guarantee.

use blake3::Hasher;

use crate::table::{Entry, GhostTable};

/// Digest root (32-byte BLAKE3 hash)
pub type DigestRoot = [u8; 32];

/// Content digest over a table's occupied entries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDigest {
    /// Combined root hash
    root: DigestRoot,

    /// Number of entries digested
    count: usize,
}

impl TableDigest {
    /// Create the digest of zero entries
    pub fn empty() -> Self {
        TableDigest {
            root: [0u8; 32],
            count: 0,
        }
    }

    /// Digest every occupied slot of a table
    ///
    /// Entry hashes combine by byte-wise XOR, so the root is independent of
    /// slot order and insertion order.
    pub fn from_table(table: &GhostTable) -> Self {
        let mut root = [0u8; 32];
        let mut count = 0;

        for (_, entry) in table.iter() {
            let hash = Self::hash_entry(entry);
            for (i, byte) in hash.iter().enumerate() {
                root[i] ^= byte;
            }
            count += 1;
        }

        TableDigest { root, count }
    }

    /// Hash a single entry: key bytes, value, then weight bit pattern
    pub fn hash_entry(entry: &Entry) -> DigestRoot {
        let mut hasher = Hasher::new();
        hasher.update(entry.key.as_bytes());
        hasher.update(&entry.value.to_le_bytes());
        hasher.update(&entry.weight.to_le_bytes());
        *hasher.finalize().as_bytes()
    }

    /// Get root hash
    pub fn root(&self) -> &DigestRoot {
        &self.root
    }

    /// Get entry count
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if two digests agree (O(1))
    pub fn is_identical(&self, other: &Self) -> bool {
        self.root == other.root && self.count == other.count
    }
}

impl Default for TableDigest {
    fn default() -> Self {
        Self::empty()
    }
}
