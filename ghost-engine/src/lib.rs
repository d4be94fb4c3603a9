//! Ghost Daemon engine - simulation layer over ghost-core
//!
//! Provides:
//! - Parameterized drift engine
//! - Sorted sequence generation and RMS metric
//! - Seeded Markov chain
//! - Sample statistics and small integer series
//! - Fingerprint-cached processing

pub mod chain;
pub mod engine;
pub mod processor;
pub mod sequence;
pub mod stats;

pub use chain::MarkovChain;
pub use engine::{Engine, EngineParams};
pub use processor::DataProcessor;
pub use stats::SampleStats;
