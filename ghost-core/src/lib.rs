//! Ghost Daemon core - fixed-capacity hash table with slot checksums
//!
//! Core library providing:
//! - Open-addressing table with distinct insert/lookup probe strides
//! - Entropy estimate over integer frequency data
//! - BLAKE3 content digests for table comparison
//! - Demo buffer fill

pub mod buffer;
pub mod digest;
pub mod entropy;
pub mod table;

pub use digest::TableDigest;
pub use table::{Entry, GhostTable, TableError};
