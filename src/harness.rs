//! Wall-clock timing for the benchmark binaries.
//!
//! [`Stopwatch`] samples the monotonic clock around the kernel under test
//! and reports the millisecond delta. The measured result goes to stdout
//! as a single `<integer> ms` line while [`banner`] writes a timestamped
//! run header to stderr.

use std::time::Instant;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Monotonic start/stop pair reporting elapsed whole milliseconds.
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Starts the clock.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since [`Stopwatch::start`].
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

/// Times a single closure call and returns the elapsed milliseconds.
pub fn time_ms<F: FnOnce()>(f: F) -> u128 {
    let stopwatch = Stopwatch::start();
    f();
    stopwatch.elapsed_ms()
}

/// Prints a timestamped run header to stderr.
///
/// Diagnostics stay on stderr so the stdout of the timing binaries remains
/// exactly the single `<integer> ms` result line.
pub fn banner(name: &str) {
    eprintln!("[{}] {}", Local::now().format("%H:%M:%S"), name);
}

/// Fills a vector with seeded pseudo-random values.
///
/// A fixed seed keeps benchmark inputs identical across runs so timings
/// stay comparable. Values span negatives to exercise signed arithmetic.
pub fn fill_random(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..len).map(|_| rng.random_range(-1_000..1_000)).collect()
}
