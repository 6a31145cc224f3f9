//! Times repeated element-wise adds over the fixed benchmark arrays.
//!
//! Prints a single `<integer> ms` line to stdout.

use std::hint::black_box;

use intbench::harness::{banner, fill_random, Stopwatch};
use intbench::{add_into, ADD_REPS, ARRAY_LEN};

fn main() {
    banner("array add, 256 elements x 1_000_000 reps");

    let b = fill_random(ARRAY_LEN, 42);
    let c = fill_random(ARRAY_LEN, 43);
    let mut a = vec![0i32; ARRAY_LEN];

    let stopwatch = Stopwatch::start();
    for _ in 0..ADD_REPS {
        add_into(black_box(&b), black_box(&c), &mut a);
    }
    black_box(&a);

    println!("{} ms", stopwatch.elapsed_ms());
}
