use std::collections::HashMap;
use std::hash::Hash;

use super::common::{Reversal, candidate_reversals, is_sorted, reverse};

enum Branch {
    Solved(Vec<Reversal>),
    // No list within the remaining budget down this branch.
    Dead,
}

/// Outcome of searching one state with a given budget.
///
/// `best` is the minimal list when it exists; `None` means the state needs
/// more than `budget` reversals.
struct MemoEntry {
    best: Option<Vec<Reversal>>,
    budget: usize,
}

impl MemoEntry {
    fn lookup(&self, budget: usize) -> Option<Branch> {
        match &self.best {
            Some(steps) if steps.len() <= budget => Some(Branch::Solved(steps.clone())),
            Some(_) => Some(Branch::Dead),
            None if budget <= self.budget => Some(Branch::Dead),
            None => None,
        }
    }
}

struct TopDownMemo<T> {
    memo: HashMap<Vec<T>, MemoEntry>,
    calls: usize,
}

impl<T: Ord + Clone + Hash> TopDownMemo<T> {
    fn new() -> Self {
        Self {
            memo: HashMap::new(),
            calls: 0,
        }
    }

    /// Shortest list sorting `state` in at most `budget` reversals.
    ///
    /// `state` is reversed in place per branch and restored before returning.
    fn search(&mut self, state: &mut [T], budget: usize) -> Branch {
        self.calls += 1;
        if is_sorted(state) {
            return Branch::Solved(Vec::new());
        }
        if let Some(hit) = self
            .memo
            .get(&*state)
            .and_then(|entry| entry.lookup(budget))
        {
            return hit;
        }
        if budget == 0 {
            return Branch::Dead;
        }

        let mut best: Option<Vec<Reversal>> = None;
        for step in candidate_reversals(state.len()) {
            reverse(state, step.start, step.end);
            let child = self.search(state, budget - 1);
            reverse(state, step.start, step.end);

            if let Branch::Solved(rest) = child {
                if best.as_ref().is_none_or(|b| rest.len() + 1 < b.len()) {
                    let mut steps = Vec::with_capacity(rest.len() + 1);
                    steps.push(step);
                    steps.extend(rest);
                    best = Some(steps);
                }
            }
        }

        tracing::trace!(budget, found = best.is_some(), "state searched");
        self.memo.insert(
            state.to_vec(),
            MemoEntry {
                best: best.clone(),
                budget,
            },
        );
        best.map_or(Branch::Dead, Branch::Solved)
    }
}

/// Minimum reversal list by memoized recursion over a private copy of `seq`.
///
/// Every branch is bounded by the reversals still allowed, which rules out
/// cycles. Exponential in `seq.len()`.
pub fn top_down_memo<T: Ord + Clone + Hash>(seq: &[T]) -> Vec<Reversal> {
    let _span = tracing::debug_span!("top_down_memo", len = seq.len()).entered();
    if is_sorted(seq) {
        return Vec::new();
    }

    let mut state = seq.to_vec();
    let mut ctx = TopDownMemo::new();
    // Placing each element with one reversal sorts within `len - 1` steps.
    match ctx.search(&mut state, seq.len() - 1) {
        Branch::Solved(steps) => {
            tracing::debug!(
                steps = steps.len(),
                calls = ctx.calls,
                memo = ctx.memo.len(),
                "top-down search solved"
            );
            steps
        }
        Branch::Dead => {
            tracing::debug!(calls = ctx.calls, "top-down search found no list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::common::apply_steps;

    #[test]
    fn fully_reversed_needs_one_step() {
        for len in 2..7_u32 {
            let seq: Vec<u32> = (0..len).rev().collect();
            let steps = top_down_memo(&seq);
            assert_eq!(steps, vec![Reversal::new(0, len as usize - 1)], "len={len}");
        }
    }

    #[test]
    fn restores_working_copy_between_branches() {
        let seq = vec![3_u32, 1, 4, 2];
        let mut state = seq.clone();
        let mut ctx = TopDownMemo::new();
        assert!(matches!(ctx.search(&mut state, 3), Branch::Solved(_)));
        assert_eq!(state, seq);
        assert!(!ctx.memo.is_empty());
    }

    #[test]
    fn tight_budget_is_dead() {
        let mut state = vec![2_u32, 3, 1];
        let mut ctx = TopDownMemo::new();
        assert!(matches!(ctx.search(&mut state, 1), Branch::Dead));
        assert!(matches!(ctx.search(&mut state, 2), Branch::Solved(steps) if steps.len() == 2));
    }

    #[test]
    fn memo_entries_answer_other_budgets() {
        let entry = MemoEntry {
            best: Some(vec![Reversal::new(0, 1), Reversal::new(1, 2)]),
            budget: 2,
        };
        assert!(matches!(entry.lookup(4), Some(Branch::Solved(steps)) if steps.len() == 2));
        assert!(matches!(entry.lookup(1), Some(Branch::Dead)));

        let unsolved = MemoEntry {
            best: None,
            budget: 2,
        };
        assert!(matches!(unsolved.lookup(2), Some(Branch::Dead)));
        assert!(unsolved.lookup(3).is_none());
    }

    #[test]
    fn three_element_cases() {
        let cases: [([u32; 3], usize); 6] = [
            ([1, 2, 3], 0),
            ([2, 1, 3], 1),
            ([1, 3, 2], 1),
            ([3, 2, 1], 1),
            ([2, 3, 1], 2),
            ([3, 1, 2], 2),
        ];
        for (seq, expected) in cases {
            let steps = top_down_memo(&seq);
            assert_eq!(steps.len(), expected, "seq={seq:?}");
            let mut sorted = seq;
            apply_steps(&mut sorted, &steps);
            assert_eq!(sorted, [1, 2, 3], "seq={seq:?} steps={steps:?}");
        }
    }
}
