use crate::Stats;
use crate::linked_sequence::{LinkedSequence, NONE};

/// Rebuilds the chain by inserting each node, in original order, into a
/// growing sorted chain scanned from its head. Every scanned node costs one
/// comparison; the scan stops at the first strictly greater value, so equal
/// values keep their relative order. No moves are counted.
pub fn sort(list: &mut LinkedSequence) -> Stats {
    let mut stats = Stats::default();
    if list.head == NONE {
        return stats;
    }

    let mut sorted = NONE;
    let mut cur = list.head;
    while cur != NONE {
        let rest = list.next[cur];
        list.prev[cur] = NONE;
        list.next[cur] = NONE;

        let key = list.value[cur];
        let mut pos = sorted;
        let mut prev_pos = NONE;
        while pos != NONE {
            stats.comparisons += 1;
            if key < list.value[pos] {
                break;
            }
            prev_pos = pos;
            pos = list.next[pos];
        }

        if prev_pos == NONE {
            list.next[cur] = sorted;
            if sorted != NONE {
                list.prev[sorted] = cur;
            }
            sorted = cur;
        } else {
            list.next[cur] = pos;
            list.prev[cur] = prev_pos;
            list.next[prev_pos] = cur;
            if pos != NONE {
                list.prev[pos] = cur;
            }
        }

        cur = rest;
    }

    list.head = sorted;
    let mut tail = sorted;
    while list.next[tail] != NONE {
        tail = list.next[tail];
    }
    list.tail = tail;
    stats
}
