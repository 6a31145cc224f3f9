//! Times repeated bubble sorts over the fixed benchmark array.
//!
//! Prints a single `<integer> ms` line to stdout. Each repetition sorts a
//! fresh copy so every run does the full quadratic work.

use std::hint::black_box;

use intbench::harness::{banner, fill_random, time_ms};
use intbench::{bubble_sort, ARRAY_LEN, SORT_REPS};

fn main() {
    banner("bubble sort, 256 elements x 10_000 reps");

    let input = fill_random(ARRAY_LEN, 42);

    let mut passes = 0usize;
    let elapsed = time_ms(|| {
        for _ in 0..SORT_REPS {
            let mut xs = input.clone();
            passes += bubble_sort(black_box(&mut xs));
            black_box(&xs);
        }
    });
    black_box(passes);

    println!("{elapsed} ms");
}
