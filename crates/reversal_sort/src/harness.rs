//! Randomized round-trip checks over every solver.
//!
//! Failures are collected rather than raised: one bad case never stops the
//! rest of the run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::generator::{ScrambleCase, generate_cases};
use crate::{
    Reversal, ReversalAlgorithm, algorithm_name, all_algorithms, apply_steps, is_sorted,
    is_valid_step, solve, supports_size,
};

pub const DEFAULT_SIZES: [usize; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 20, 50, 100];
pub const DEFAULT_CASES_PER_SIZE: usize = 10;
pub const DEFAULT_SEED: u64 = 0x2EE5_2026;

#[derive(Clone, Debug)]
pub struct HarnessConfig {
    pub sizes: Vec<usize>,
    pub cases_per_size: usize,
    pub seed: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            cases_per_size: DEFAULT_CASES_PER_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl HarnessConfig {
    /// Small sweep that stays fast in debug builds.
    pub fn quick() -> Self {
        Self {
            sizes: vec![2, 3, 4, 5, 6, 7, 10, 20],
            cases_per_size: 3,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CheckFailure {
    #[error("{algorithm}: input mutated from {expected:?} to {observed:?}")]
    InputMutated {
        algorithm: &'static str,
        expected: Vec<u32>,
        observed: Vec<u32>,
    },

    #[error("{algorithm}: step {step} is out of range for input {input:?}")]
    InvalidStep {
        algorithm: &'static str,
        input: Vec<u32>,
        step: Reversal,
    },

    #[error("{algorithm}: {actual} steps exceed the scramble bound {bound} for input {input:?}")]
    StepBoundExceeded {
        algorithm: &'static str,
        input: Vec<u32>,
        actual: usize,
        bound: usize,
    },

    #[error("{algorithm}: steps {steps:?} leave input {input:?} unsorted as {result:?}")]
    NotSorted {
        algorithm: &'static str,
        input: Vec<u32>,
        steps: Vec<Reversal>,
        result: Vec<u32>,
    },
}

#[derive(Clone, Debug, Default)]
pub struct HarnessReport {
    pub checked: usize,
    pub failures: Vec<CheckFailure>,
}

impl HarnessReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Solves `case` with `algo` and returns every check that failed.
pub fn check_case(algo: ReversalAlgorithm, case: &ScrambleCase) -> Vec<CheckFailure> {
    let algorithm = algorithm_name(algo);
    let input = case.sequence.clone();
    let steps = solve(algo, &input);
    let mut failures = Vec::new();

    if input != case.sequence {
        failures.push(CheckFailure::InputMutated {
            algorithm,
            expected: case.sequence.clone(),
            observed: input.clone(),
        });
    }

    if steps.len() > case.step_bound() {
        failures.push(CheckFailure::StepBoundExceeded {
            algorithm,
            input: input.clone(),
            actual: steps.len(),
            bound: case.step_bound(),
        });
    }

    if let Some(&step) = steps.iter().find(|step| !is_valid_step(step, input.len())) {
        failures.push(CheckFailure::InvalidStep {
            algorithm,
            input,
            step,
        });
        return failures;
    }

    let mut result = input.clone();
    apply_steps(&mut result, &steps);
    if !is_sorted(&result) {
        failures.push(CheckFailure::NotSorted {
            algorithm,
            input,
            steps,
            result,
        });
    }

    failures
}

pub fn run(config: &HarnessConfig) -> HarnessReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    run_with_rng(config, &mut rng)
}

/// Checks every supported algorithm against `config.cases_per_size`
/// scrambles of each size in `config.sizes`.
pub fn run_with_rng<R: Rng + ?Sized>(config: &HarnessConfig, rng: &mut R) -> HarnessReport {
    let _span = tracing::info_span!("harness", sizes = config.sizes.len()).entered();
    let cases = generate_cases(&config.sizes, config.cases_per_size, rng);
    let mut report = HarnessReport::default();

    for case in &cases {
        for &algo in all_algorithms() {
            if !supports_size(algo, case.size()) {
                continue;
            }
            tracing::debug!(
                algorithm = algorithm_name(algo),
                size = case.size(),
                bound = case.step_bound(),
                "checking case"
            );

            let failures = check_case(algo, case);
            for failure in &failures {
                tracing::warn!(%failure, "check failed");
            }
            report.checked += 1;
            report.failures.extend(failures);
        }
    }

    tracing::info!(
        cases = cases.len(),
        checked = report.checked,
        failed = report.failures.len(),
        "harness finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::scramble;

    #[test]
    fn quick_sweep_is_clean() {
        let report = run(&HarnessConfig::quick());
        assert!(report.checked > 0);
        assert!(report.is_clean(), "failures={:#?}", report.failures);
    }

    #[test]
    fn every_algorithm_meets_the_scramble_bound() {
        let mut rng = StdRng::seed_from_u64(0x2EE5_3001);
        for &size in &[2_usize, 3, 4] {
            for _ in 0..5 {
                let case = scramble(size, &mut rng);
                for &algo in all_algorithms() {
                    let failures = check_case(algo, &case);
                    assert!(failures.is_empty(), "failures={failures:#?}");
                }
            }
        }
    }

    #[test]
    fn bound_violation_is_reported_and_checks_continue() {
        let case = ScrambleCase {
            sequence: vec![3, 1, 2],
            scramble: vec![Reversal::new(0, 1)],
        };
        let failures = check_case(ReversalAlgorithm::BestFirstSwaps, &case);
        assert_eq!(
            failures,
            vec![CheckFailure::StepBoundExceeded {
                algorithm: "best_first_swaps",
                input: vec![3, 1, 2],
                actual: 2,
                bound: 1,
            }]
        );
    }

    #[test]
    fn failure_messages_carry_context() {
        let failure = CheckFailure::NotSorted {
            algorithm: "bottom_up_prefix",
            input: vec![2, 1],
            steps: Vec::new(),
            result: vec![2, 1],
        };
        assert_eq!(
            failure.to_string(),
            "bottom_up_prefix: steps [] leave input [2, 1] unsorted as [2, 1]"
        );

        let invalid = CheckFailure::InvalidStep {
            algorithm: "top_down_memo",
            input: vec![1, 2],
            step: Reversal::new(1, 2),
        };
        assert_eq!(
            invalid.to_string(),
            "top_down_memo: step (1, 2) is out of range for input [1, 2]"
        );
    }

    #[test]
    fn default_config_matches_full_sweep() {
        let config = HarnessConfig::default();
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(config.cases_per_size, 10);
    }

    #[test]
    #[ignore = "full sweep; slow without optimizations"]
    fn default_sweep_is_clean() {
        let report = run(&HarnessConfig::default());
        assert!(report.is_clean(), "failures={:#?}", report.failures);
    }
}
