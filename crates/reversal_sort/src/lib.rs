mod algorithms;
pub mod generator;
pub mod harness;

use std::hash::Hash;

pub use algorithms::best_first::{best_first_by_steps, best_first_by_swaps};
pub use algorithms::bottom_up::bottom_up_prefix;
pub use algorithms::common::{
    Reversal, apply_steps, candidate_reversals, is_sorted, is_sorted_range, is_valid_step,
    reverse, total_swap_cost,
};
pub use algorithms::top_down_memo::top_down_memo;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ReversalAlgorithm {
    TopDownMemo,
    BestFirstSteps,
    BestFirstSwaps,
    BottomUpPrefix,
}

pub const ALL_ALGORITHMS: [ReversalAlgorithm; 4] = [
    ReversalAlgorithm::TopDownMemo,
    ReversalAlgorithm::BestFirstSteps,
    ReversalAlgorithm::BestFirstSwaps,
    ReversalAlgorithm::BottomUpPrefix,
];

pub fn all_algorithms() -> &'static [ReversalAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: ReversalAlgorithm) -> &'static str {
    match algo {
        ReversalAlgorithm::TopDownMemo => "top_down_memo",
        ReversalAlgorithm::BestFirstSteps => "best_first_steps",
        ReversalAlgorithm::BestFirstSwaps => "best_first_swaps",
        ReversalAlgorithm::BottomUpPrefix => "bottom_up_prefix",
    }
}

/// Exclusive upper bounds on input length for the exponential searches.
#[derive(Clone, Copy, Debug)]
pub struct SizeLimits {
    pub top_down_memo: usize,
    pub best_first_steps: usize,
    pub best_first_swaps: usize,
}

pub const SIZE_LIMITS: SizeLimits = SizeLimits {
    top_down_memo: 7,
    best_first_steps: 10,
    best_first_swaps: 5,
};

/// Whether `algo` is expected to finish on inputs of length `len`.
///
/// Not enforced by [`solve`]; the searches simply run out of memory or time.
pub fn supports_size(algo: ReversalAlgorithm, len: usize) -> bool {
    match algo {
        ReversalAlgorithm::TopDownMemo => len < SIZE_LIMITS.top_down_memo,
        ReversalAlgorithm::BestFirstSteps => len < SIZE_LIMITS.best_first_steps,
        ReversalAlgorithm::BestFirstSwaps => len < SIZE_LIMITS.best_first_swaps,
        ReversalAlgorithm::BottomUpPrefix => true,
    }
}

/// Reversals that sort `seq` when applied in order. `seq` itself is untouched.
pub fn solve<T: Ord + Clone + Hash>(algo: ReversalAlgorithm, seq: &[T]) -> Vec<Reversal> {
    match algo {
        ReversalAlgorithm::TopDownMemo => top_down_memo(seq),
        ReversalAlgorithm::BestFirstSteps => best_first_by_steps(seq),
        ReversalAlgorithm::BestFirstSwaps => best_first_by_swaps(seq),
        ReversalAlgorithm::BottomUpPrefix => bottom_up_prefix(seq),
    }
}
