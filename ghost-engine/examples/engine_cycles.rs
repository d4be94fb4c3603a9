//! Demo of the drift engine and its companion series
//!
//! Demonstrates:
//! - Running the engine for ten cycles
//! - Sequence generation and the RMS metric
//! - A seeded Markov chain walk
//! - Fibonacci, primes, and sample statistics
//! - Fingerprint-cached processing

use ghost_engine::{
    sequence,
    stats::{self, SampleStats},
    DataProcessor, Engine, MarkovChain,
};

fn main() {
    println!("=== Ghost Daemon Engine Demo ===\n");

    let mut engine = Engine::default();
    for _ in 0..10 {
        let drift = engine.run();
        println!("Engine cycle {} drift={}", engine.cycles(), drift);
    }
    println!();

    let seq = sequence::generate(49);
    println!("Final metric: {}", sequence::metric(&seq));
    println!("Total cycles: {}", engine.cycles());
    println!();

    let mut chain = MarkovChain::new();
    chain.train(&[1, 2, 3, 2, 3, 4, 3, 4, 5, 4, 5, 1, 2, 3]);
    println!("Markov chain: {:?}", chain.generate(44, 1, 20));

    let fibs = stats::fibonacci(24);
    let primes = stats::prime_sieve(202);
    println!("Fibonacci: {:?}", fibs);
    println!("Primes up to 202: {:?}", primes);
    if let Some(stats) = SampleStats::compute(&fibs.iter().map(|&v| v as i64).collect::<Vec<_>>()) {
        println!("Stats: {:?}", stats);
    }

    let mut processor = DataProcessor::new();
    for sample in [vec![1, 2, 3, 4, 5], vec![11, 22, 33], vec![1, 2, 3, 4, 5]] {
        println!("Processed: {:?}", processor.process(&sample));
    }
    println!("Processor iterations: {}", processor.iterations());
}
