use std::ops::{Add, AddAssign};

mod algorithms;
mod linked_sequence;

pub use linked_sequence::{Iter, LinkedSequence, NONE};

/// Comparisons and element moves tallied by one sort invocation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Stats {
    pub comparisons: u64,
    pub moves: u64,
}

impl Stats {
    pub const fn new(comparisons: u64, moves: u64) -> Self {
        Self { comparisons, moves }
    }

    /// Per-run average of a sum over `runs` invocations, truncated.
    pub fn averaged(self, runs: u64) -> Self {
        assert!(runs > 0, "averaged: zero runs");
        Self {
            comparisons: self.comparisons / runs,
            moves: self.moves / runs,
        }
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats {
            comparisons: self.comparisons + rhs.comparisons,
            moves: self.moves + rhs.moves,
        }
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        self.comparisons += rhs.comparisons;
        self.moves += rhs.moves;
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    Insertion,
    Comb,
    Quick,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::Insertion,
    SortAlgorithm::Comb,
    SortAlgorithm::Quick,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::Insertion => "insertion",
        SortAlgorithm::Comb => "comb",
        SortAlgorithm::Quick => "quick",
    }
}

impl SortAlgorithm {
    /// Resolves a name token. Anything other than `"insertion"` or `"comb"`
    /// selects quicksort.
    pub fn from_name(name: &str) -> Self {
        match name {
            "insertion" => SortAlgorithm::Insertion,
            "comb" => SortAlgorithm::Comb,
            _ => SortAlgorithm::Quick,
        }
    }
}

pub fn sort_i32(algo: SortAlgorithm, data: &mut Vec<i32>) -> Stats {
    match algo {
        SortAlgorithm::Insertion => insertion_sort(data),
        SortAlgorithm::Comb => comb_sort(data),
        SortAlgorithm::Quick => quick_sort(data),
    }
}

pub fn sort_by_name(name: &str, data: &mut Vec<i32>) -> Stats {
    sort_i32(SortAlgorithm::from_name(name), data)
}

/// Loads `data` into a [`LinkedSequence`], insertion-sorts the nodes and
/// drains them back. Load and drain moves are included in the result.
pub fn insertion_sort(data: &mut Vec<i32>) -> Stats {
    sort_through_list(data, algorithms::insertion_sort::sort)
}

/// Loads `data` into a [`LinkedSequence`], comb-sorts the nodes and drains
/// them back. Node relocations are not counted as moves.
pub fn comb_sort(data: &mut Vec<i32>) -> Stats {
    sort_through_list(data, algorithms::comb_sort::sort)
}

pub fn quick_sort(data: &mut [i32]) -> Stats {
    algorithms::quick_sort::sort(data)
}

fn sort_through_list(data: &mut Vec<i32>, sort: fn(&mut LinkedSequence) -> Stats) -> Stats {
    let mut stats = Stats::default();
    let mut list = LinkedSequence::with_capacity(data.len());
    list.load_from(data, &mut stats);
    stats += sort(&mut list);
    debug_assert!(list.check_links());
    list.drain_to(data, &mut stats);
    stats
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[i32]) {
        for &algo in all_algorithms() {
            let mut actual = data.to_vec();
            sort_i32(algo, &mut actual);

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
        }
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn from_name_round_trips_and_defaults_to_quick() {
        for &algo in all_algorithms() {
            assert_eq!(SortAlgorithm::from_name(algorithm_name(algo)), algo);
        }
        assert_eq!(SortAlgorithm::from_name("bubble"), SortAlgorithm::Quick);
        assert_eq!(SortAlgorithm::from_name(""), SortAlgorithm::Quick);
        assert_eq!(SortAlgorithm::from_name("Insertion"), SortAlgorithm::Quick);
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i32::MIN, 1, i32::MAX, 0, i32::MAX - 1, -2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn empty_input_has_zero_counts() {
        for &algo in all_algorithms() {
            let mut data = Vec::new();
            assert_eq!(sort_i32(algo, &mut data), Stats::default());
            assert!(data.is_empty());
        }
    }

    #[test]
    fn single_element_counts() {
        let mut data = vec![9];
        assert_eq!(insertion_sort(&mut data), Stats::new(0, 2));
        assert_eq!(comb_sort(&mut data), Stats::new(0, 2));
        assert_eq!(quick_sort(&mut data), Stats::new(0, 0));
        assert_eq!(data, vec![9]);
    }

    #[test]
    fn list_sorts_count_load_and_drain() {
        let mut data = vec![5, 4, 3, 2, 1];
        let stats = insertion_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
        assert_eq!(stats, Stats::new(4, 10));

        let mut data = vec![2, 1];
        let stats = comb_sort(&mut data);
        assert_eq!(data, vec![1, 2]);
        // gap 1 pass with a swap, then a clean gap 1 pass.
        assert_eq!(stats, Stats::new(2, 4));
    }

    #[test]
    fn sort_by_name_dispatches() {
        let mut a = vec![3, 1, 2];
        let mut b = a.clone();
        assert_eq!(sort_by_name("comb", &mut a), comb_sort(&mut b));
        assert_eq!(a, b);

        let mut a = vec![3, 1, 2];
        let mut b = a.clone();
        assert_eq!(sort_by_name("unknown", &mut a), quick_sort(&mut b));
        assert_eq!(a, vec![1, 2, 3]);
    }

    #[test]
    fn sorting_sorted_input_is_idempotent() {
        let sorted: Vec<i32> = (-50..50).collect();
        for &algo in all_algorithms() {
            let mut data = sorted.clone();
            sort_i32(algo, &mut data);
            assert_eq!(data, sorted, "algorithm={}", algorithm_name(algo));
        }
    }

    #[test]
    fn stats_add_and_average() {
        let mut total = Stats::new(3, 4);
        total += Stats::new(4, 5);
        assert_eq!(total + Stats::new(3, 0), Stats::new(10, 9));
        assert_eq!(Stats::new(10, 9).averaged(3), Stats::new(3, 3));
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511, 2048] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random_range(-1_000_000..=1_000_000));
            }
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random_range(0..16) * 17 - 100);
            }
            assert_sorts_like_std(&data);
        }
    }
}
