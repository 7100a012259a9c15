use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use super::common::{Reversal, candidate_reversals, is_sorted, reverse};

type Priority = (usize, usize);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum QueueOrder {
    Steps,
    Swaps,
}

impl QueueOrder {
    #[inline]
    fn priority(self, steps: usize, swaps: usize) -> Priority {
        match self {
            Self::Steps => (steps, 0),
            Self::Swaps => (swaps, steps),
        }
    }
}

#[derive(Clone, Debug)]
struct SearchNode<T> {
    state: Vec<T>,
    steps: Vec<Reversal>,
    swaps: usize,
}

struct Queued<T> {
    priority: Priority,
    order: u64,
    node: SearchNode<T>,
}

impl<T> PartialEq for Queued<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.order == other.order
    }
}

impl<T> Eq for Queued<T> {}

impl<T> PartialOrd for Queued<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Queued<T> {
    // Reversed: the max-heap pops the lowest priority, oldest first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.order.cmp(&self.order))
    }
}

fn best_first<T: Ord + Clone + Hash>(seq: &[T], order: QueueOrder) -> Vec<Reversal> {
    let mut heap = BinaryHeap::new();
    // States waiting in the heap with the priority they were pushed at.
    // Membership ends on pop, so a state can be reached again later.
    let mut queued: HashMap<Vec<T>, Priority> = HashMap::new();
    let mut pushed = 0_u64;
    let mut popped = 0_usize;

    heap.push(Queued {
        priority: order.priority(0, 0),
        order: pushed,
        node: SearchNode {
            state: seq.to_vec(),
            steps: Vec::new(),
            swaps: 0,
        },
    });

    while let Some(Queued { priority, node, .. }) = heap.pop() {
        popped += 1;
        if queued.get(node.state.as_slice()) == Some(&priority) {
            queued.remove(node.state.as_slice());
        }

        if is_sorted(&node.state) {
            tracing::debug!(
                steps = node.steps.len(),
                swaps = node.swaps,
                popped,
                pushed,
                "sorted state reached"
            );
            return node.steps;
        }

        for step in candidate_reversals(node.state.len()) {
            let mut state = node.state.clone();
            reverse(&mut state, step.start, step.end);

            let swaps = node.swaps + step.swap_cost();
            let priority = order.priority(node.steps.len() + 1, swaps);
            if queued
                .get(state.as_slice())
                .is_some_and(|&waiting| waiting <= priority)
            {
                continue;
            }
            queued.insert(state.clone(), priority);

            let mut steps = Vec::with_capacity(node.steps.len() + 1);
            steps.extend_from_slice(&node.steps);
            steps.push(step);

            pushed += 1;
            tracing::trace!(?priority, %step, "queued");
            heap.push(Queued {
                priority,
                order: pushed,
                node: SearchNode {
                    state,
                    steps,
                    swaps,
                },
            });
        }
    }

    tracing::debug!(popped, pushed, "queue exhausted without a sorted state");
    Vec::new()
}

/// Best-first search popping the node with the fewest reversals so far.
pub fn best_first_by_steps<T: Ord + Clone + Hash>(seq: &[T]) -> Vec<Reversal> {
    let _span = tracing::debug_span!("best_first_by_steps", len = seq.len()).entered();
    best_first(seq, QueueOrder::Steps)
}

/// Best-first search popping the node with the fewest element swaps so far,
/// then the fewest reversals.
///
/// Adjacent swaps cost nothing, so the result has zero swap cost and one step
/// per inversion rather than a minimal step count.
pub fn best_first_by_swaps<T: Ord + Clone + Hash>(seq: &[T]) -> Vec<Reversal> {
    let _span = tracing::debug_span!("best_first_by_swaps", len = seq.len()).entered();
    best_first(seq, QueueOrder::Swaps)
}
