use std::fmt;

/// Reverses the inclusive index range `[start, end]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Reversal {
    pub start: usize,
    pub end: usize,
}

impl Reversal {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty reversal ({start}, {end})");
        Self { start, end }
    }

    /// Element exchanges performed by this reversal.
    #[inline]
    pub fn swap_cost(self) -> usize {
        (self.end - self.start) / 2
    }
}

impl fmt::Display for Reversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

#[inline]
pub fn reverse<T>(seq: &mut [T], start: usize, end: usize) {
    seq[start..=end].reverse();
}

pub fn apply_steps<T>(seq: &mut [T], steps: &[Reversal]) {
    for step in steps {
        reverse(seq, step.start, step.end);
    }
}

#[inline]
pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Checks `seq[start + 1..=end]` against each predecessor.
#[inline]
pub fn is_sorted_range<T: Ord>(seq: &[T], start: usize, end: usize) -> bool {
    seq[start..=end].windows(2).all(|pair| pair[0] <= pair[1])
}

#[inline]
pub fn is_valid_step(step: &Reversal, len: usize) -> bool {
    step.start < step.end && step.end < len
}

pub fn total_swap_cost(steps: &[Reversal]) -> usize {
    steps.iter().map(|step| step.swap_cost()).sum()
}

/// Every reversal of a sequence of length `len`, by start then end.
pub fn candidate_reversals(len: usize) -> impl Iterator<Item = Reversal> {
    (0..len.saturating_sub(1))
        .flat_map(move |start| ((start + 1)..len).map(move |end| Reversal { start, end }))
}
