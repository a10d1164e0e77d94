use crate::Stats;
use crate::linked_sequence::{LinkedSequence, NONE};

const SHRINK_NUM: usize = 10;
const SHRINK_DEN: usize = 13;

/// Comb sort over a handle index that mirrors the chain order. Each exchange
/// relocates the two nodes in the chain and swaps their index entries.
/// Only comparisons are counted; relocations leave `moves` at zero.
pub fn sort(list: &mut LinkedSequence) -> Stats {
    sort_with_pass_hook(list, |_, _| {})
}

/// Same as [`sort`], calling `after_pass` with the chain and the index once
/// every pass over the index is complete.
pub(crate) fn sort_with_pass_hook<F>(list: &mut LinkedSequence, mut after_pass: F) -> Stats
where
    F: FnMut(&LinkedSequence, &[usize]),
{
    let mut stats = Stats::default();
    if list.head == NONE {
        return stats;
    }

    let mut index = Vec::with_capacity(list.len());
    let mut node = list.head;
    while node != NONE {
        index.push(node);
        node = list.next[node];
    }

    let n = index.len();
    let mut gap = n;
    let mut swapped = true;
    while gap > 1 || swapped {
        gap = (gap * SHRINK_NUM / SHRINK_DEN).max(1);
        swapped = false;

        let mut i = 0;
        while i + gap < n {
            stats.comparisons += 1;
            if list.value[index[i]] > list.value[index[i + gap]] {
                list.relocate(index[i], index[i + gap]);
                index.swap(i, i + gap);
                swapped = true;
            }
            i += 1;
        }

        after_pass(list, &index);
    }

    list.head = index[0];
    list.tail = index[n - 1];
    stats
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{sort, sort_with_pass_hook};
    use crate::{LinkedSequence, NONE, Stats};

    fn build(values: &[i32]) -> LinkedSequence {
        let mut list = LinkedSequence::new();
        for &x in values {
            list.append(x);
        }
        list
    }

    fn assert_index_matches_chain(list: &LinkedSequence, index: &[usize]) {
        assert!(list.check_links());
        let mut node = list.head();
        for (hops, &expected) in index.iter().enumerate() {
            assert_eq!(node, expected, "index[{hops}] is not {hops} hops from head");
            node = list.next(node);
        }
        assert_eq!(node, NONE);
    }

    #[test]
    fn empty_and_single() {
        let mut list = LinkedSequence::new();
        assert_eq!(sort(&mut list), Stats::default());

        let mut list = build(&[4]);
        assert_eq!(sort(&mut list), Stats::default());
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn moves_stay_zero() {
        let mut list = build(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let stats = sort(&mut list);
        assert_eq!(list.iter().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
        assert!(stats.comparisons > 0);
        assert_eq!(stats.moves, 0);
    }

    #[test]
    fn sorted_input_comparisons() {
        // n=5: gaps 3, 2, 1 each compare n - gap pairs; the gap 1 pass is clean.
        let mut list = build(&[1, 2, 3, 4, 5]);
        assert_eq!(sort(&mut list), Stats::new(2 + 3 + 4, 0));
    }

    #[test]
    fn index_tracks_chain_after_every_pass() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for &size in &[2_usize, 3, 13, 100, 257] {
            let values: Vec<i32> = (0..size).map(|_| rng.random_range(-50..=50)).collect();
            let mut list = build(&values);
            let mut passes = 0;
            sort_with_pass_hook(&mut list, |list, index| {
                assert_index_matches_chain(list, index);
                passes += 1;
            });
            assert!(passes > 0);

            let mut expected = values.clone();
            expected.sort_unstable();
            assert_eq!(list.iter().collect::<Vec<_>>(), expected);
            assert!(list.check_links());
        }
    }
}
