use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry. `Ord` is reversed so that `BinaryHeap` behaves as a min-heap,
/// with ties on `priority` broken by the item's own ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<T> {
    priority: u32,
    item: T,
}

impl<T: Ord> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.item.cmp(&self.item))
    }
}

/// Min-priority queue without decrease-key.
///
/// Improving an item's priority means pushing it again; the older entry stays
/// in the heap and it is up to the caller to recognise it as stale when it
/// comes out.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, priority: u32, item: T) {
        self.heap.push(Entry { priority, item });
    }

    /// Removes the entry with the lowest priority (smallest item on ties),
    /// returning it together with the priority it was pushed with.
    pub fn pop(&mut self) -> Option<(u32, T)> {
        self.heap.pop().map(|entry| (entry.priority, entry.item))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut queue = PriorityQueue::new();
        queue.push(30, 'c');
        queue.push(10, 'a');
        queue.push(20, 'b');

        assert_eq!(queue.pop(), Some((10, 'a')));
        assert_eq!(queue.pop(), Some((20, 'b')));
        assert_eq!(queue.pop(), Some((30, 'c')));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_break_on_item_order_not_insertion_order() {
        let mut forward = PriorityQueue::new();
        let mut backward = PriorityQueue::new();
        let items = [(2, 1), (0, 3), (1, 1), (0, 2)];

        for item in items {
            forward.push(5, item);
        }
        for item in items.iter().rev() {
            backward.push(5, *item);
        }

        let drain = |queue: &mut PriorityQueue<(i32, i32)>| {
            std::iter::from_fn(|| queue.pop().map(|(_, item)| item)).collect::<Vec<_>>()
        };
        let expected = vec![(0, 2), (0, 3), (1, 1), (2, 1)];
        assert_eq!(drain(&mut forward), expected);
        assert_eq!(drain(&mut backward), expected);
    }

    #[test]
    fn duplicate_items_are_kept_as_separate_entries() {
        let mut queue = PriorityQueue::new();
        queue.push(40, 7);
        queue.push(25, 7);

        assert_eq!(queue.pop(), Some((25, 7)));
        assert_eq!(queue.pop(), Some((40, 7)));
        assert!(queue.is_empty());
    }
}
