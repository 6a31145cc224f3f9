//! Correctness tests for the in-place bubble sort.

use std::cmp::Ordering;

use intbench::{bubble_sort, ARRAY_LEN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vec(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-1_000..1_000)).collect()
}

#[test]
fn test_concrete_case() {
    let mut xs = [5, 1, 4, 2, 8];
    bubble_sort(&mut xs);
    assert_eq!(xs, [1, 2, 4, 5, 8]);
}

/// The result must be non-decreasing and a permutation of the input;
/// comparing against a std-sorted copy checks both at once.
#[test]
fn test_sorts_random_inputs() {
    for seed in 0..16 {
        let original = random_vec(ARRAY_LEN, seed);

        let mut expected = original.clone();
        expected.sort_unstable();

        let mut xs = original;
        bubble_sort(&mut xs);

        assert_eq!(xs, expected, "mismatch for seed {seed}");
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
    }
}

/// Sorting a sorted sequence is a no-op that finishes in one clean pass.
#[test]
fn test_idempotence() {
    let mut xs = random_vec(512, 99);
    bubble_sort(&mut xs);

    let once = xs.clone();
    let passes = bubble_sort(&mut xs);

    assert_eq!(xs, once);
    assert_eq!(passes, 1);
}

#[test]
fn test_boundary_cases() {
    let mut empty: Vec<i32> = Vec::new();
    assert_eq!(bubble_sort(&mut empty), 1);
    assert!(empty.is_empty());

    let mut single = vec![-3];
    assert_eq!(bubble_sort(&mut single), 1);
    assert_eq!(single, [-3]);

    let mut sorted: Vec<i32> = (0..100).collect();
    assert_eq!(bubble_sort(&mut sorted), 1);

    // A strictly decreasing sequence needs a dirty pass per element
    // before the final clean one.
    let mut reversed: Vec<i32> = (0..100).rev().collect();
    assert_eq!(bubble_sort(&mut reversed), 100);
    assert_eq!(reversed, (0..100).collect::<Vec<i32>>());
}

#[derive(Clone, Copy, Debug)]
struct Keyed {
    key: i32,
    tag: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Strict-less comparisons never swap equal keys, so their original
/// relative order survives.
#[test]
fn test_equal_keys_keep_relative_order() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut xs: Vec<Keyed> = (0..200)
        .map(|tag| Keyed {
            key: rng.random_range(0..10),
            tag,
        })
        .collect();

    bubble_sort(&mut xs);

    for pair in xs.windows(2) {
        assert!(pair[0].key <= pair[1].key);
        if pair[0].key == pair[1].key {
            assert!(
                pair[0].tag < pair[1].tag,
                "equal keys reordered: tag {} before {}",
                pair[0].tag,
                pair[1].tag
            );
        }
    }
}
