use rand::Rng;

use crate::{Reversal, reverse};

/// A scrambled `1..=size` sequence and the reversals that scrambled it.
///
/// Undoing the scramble in reverse order sorts the sequence again, so its
/// length is an upper bound on any minimal solution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScrambleCase {
    pub sequence: Vec<u32>,
    pub scramble: Vec<Reversal>,
}

impl ScrambleCase {
    pub fn size(&self) -> usize {
        self.sequence.len()
    }

    pub fn step_bound(&self) -> usize {
        self.scramble.len()
    }
}

/// Length of the random walk used for a sequence of `size` elements.
pub fn scramble_len(size: usize) -> usize {
    let m = size.saturating_sub(1);
    (m * (m + 1) * (2 * m + 1) / 6).min(size * 2)
}

/// Scrambles `1..=size` by [`scramble_len`] random reversals, none equal to
/// the one right before it.
pub fn scramble<R: Rng + ?Sized>(size: usize, rng: &mut R) -> ScrambleCase {
    let mut sequence: Vec<u32> = (1..=size as u32).collect();
    let target = scramble_len(size);
    let mut scramble = Vec::with_capacity(target);

    while scramble.len() < target {
        let start = rng.random_range(0..=(size - 2));
        let end = rng.random_range((start + 1)..=(size - 1));
        let step = Reversal::new(start, end);
        if scramble.last() == Some(&step) {
            continue;
        }
        reverse(&mut sequence, start, end);
        scramble.push(step);
    }

    ScrambleCase { sequence, scramble }
}

pub fn generate_cases<R: Rng + ?Sized>(
    sizes: &[usize],
    cases_per_size: usize,
    rng: &mut R,
) -> Vec<ScrambleCase> {
    let mut cases = Vec::with_capacity(sizes.len() * cases_per_size);
    for &size in sizes {
        for _ in 0..cases_per_size {
            cases.push(scramble(size, rng));
        }
    }
    cases
}
