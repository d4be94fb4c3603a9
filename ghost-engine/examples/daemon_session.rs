//! Demo of a full daemon table session
//!
//! Demonstrates:
//! - Inserting the canonical entries
//! - Looking up a key
//! - Entropy over a frequency sample
//! - Buffer fill and sample window
//! - Final count and checksum

use ghost_core::{buffer, entropy, GhostTable};

fn main() {
    println!("=== Ghost Daemon Session Demo ===\n");

    let mut table = GhostTable::new();
    for (key, value) in [
        ("alpha", 100),
        ("beta", 200),
        ("gamma", 348),
        ("delta", 474),
        ("epsilon", 580),
    ] {
        match table.insert(key, value) {
            Ok(slot) => println!("insert {} -> slot {}", key, slot),
            Err(err) => println!("insert {} failed: {}", key, err),
        }
    }
    println!();

    // a miss maps to the -1 sentinel at the printing edge
    let found = table.lookup("gamma").unwrap_or(-1);
    println!("Lookup gamma: {}", found);

    let freq = [13, 45, 7, 23, 56, 3, 89, 34];
    println!("Entropy: {:.4}", entropy::compute(&freq));

    let buf = buffer::fill(buffer::BUFFER_SIZE);
    println!("Buffer[2..18]: {}", buffer::sample(&buf, 2, 16));

    println!("Table count: {} checksum: {:x}", table.len(), table.checksum());
}
