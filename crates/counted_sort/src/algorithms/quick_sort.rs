use crate::Stats;

/// An exchange through a temporary: three element moves.
const SWAP_MOVES: u64 = 3;

/// Quicksort with the last element of each range as pivot.
///
/// Ranges are kept on an explicit stack instead of the call stack: sorted and
/// reverse-sorted inputs split off one element per partition, which would
/// otherwise recurse once per element. The left range is always finished
/// before the right one, matching the recursive order.
pub fn sort(data: &mut [i32]) -> Stats {
    let mut stats = Stats::default();
    if data.len() < 2 {
        return stats;
    }

    let mut pending = vec![(0usize, data.len() - 1)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let split = partition(data, low, high, &mut stats);
        if split + 1 < high {
            pending.push((split + 1, high));
        }
        if split > low + 1 {
            pending.push((low, split - 1));
        }
    }
    stats
}

/// Lomuto partition of `data[low..=high]` around `data[high]`. Returns the
/// pivot's final position.
fn partition(data: &mut [i32], low: usize, high: usize, stats: &mut Stats) -> usize {
    let pivot = data[high];
    let mut i = low;
    for j in low..high {
        stats.comparisons += 1;
        if data[j] < pivot {
            data.swap(i, j);
            stats.moves += SWAP_MOVES;
            i += 1;
        }
    }
    data.swap(i, high);
    stats.moves += SWAP_MOVES;
    i
}
