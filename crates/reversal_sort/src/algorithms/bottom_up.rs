use super::common::{Reversal, is_sorted_range, reverse};

/// Best known way to sort the first `i + 1` elements. `snapshot` is the whole
/// sequence after `steps`; only indices `0..=i` have been touched.
#[derive(Clone, Debug)]
struct SortedPrefix<T> {
    snapshot: Vec<T>,
    steps: Vec<Reversal>,
}

impl<T: Ord> SortedPrefix<T> {
    #[inline]
    fn apply(&mut self, step: Reversal) {
        reverse(&mut self.snapshot, step.start, step.end);
        self.steps.push(step);
    }

    /// Moves element `i` into the sorted prefix `0..i`, after any equal keys.
    fn insert_last(&mut self, i: usize) {
        let (prefix, rest) = self.snapshot.split_at(i);
        let key = &rest[0];
        let j = prefix.iter().position(|x| key < x).unwrap_or(i);

        if j + 1 < i {
            self.apply(Reversal::new(j, i));
            self.apply(Reversal::new(j + 1, i));
        } else if j + 1 == i {
            self.apply(Reversal::new(j, i));
        }
    }
}

/// Finds an earlier prefix that a single reversal ending at `i` extends into
/// a sorted prefix of length `i + 1` with fewer than `best_len` steps.
///
/// Each snapshot is reversed in place and restored before moving on.
fn cross_reference<T: Ord>(
    prefixes: &mut [SortedPrefix<T>],
    i: usize,
    mut best_len: usize,
) -> Option<(usize, Reversal)> {
    let mut best = None;
    for (j, prefix) in prefixes.iter_mut().enumerate() {
        let candidate_len = prefix.steps.len() + 1;
        if candidate_len >= best_len {
            continue;
        }
        for k in 0..i {
            reverse(&mut prefix.snapshot, k, i);
            let sorted = is_sorted_range(&prefix.snapshot, 0, i);
            reverse(&mut prefix.snapshot, k, i);

            if sorted && candidate_len < best_len {
                best_len = candidate_len;
                best = Some((j, Reversal::new(k, i)));
            }
        }
    }
    best
}

/// Sorts prefixes of growing length, each from the previous prefix by
/// insertion or from any earlier prefix by one reversal, whichever is shorter.
///
/// Always terminates; at most two reversals per element.
pub fn bottom_up_prefix<T: Ord + Clone>(seq: &[T]) -> Vec<Reversal> {
    let _span = tracing::debug_span!("bottom_up_prefix", len = seq.len()).entered();
    let n = seq.len();
    if n < 2 {
        return Vec::new();
    }

    let mut prefixes: Vec<SortedPrefix<T>> = Vec::with_capacity(n);
    prefixes.push(SortedPrefix {
        snapshot: seq.to_vec(),
        steps: Vec::new(),
    });

    for i in 1..n {
        let mut next = prefixes[i - 1].clone();
        next.insert_last(i);

        if let Some((j, step)) = cross_reference(&mut prefixes, i, next.steps.len()) {
            tracing::trace!(i, from = j, %step, "prefix improved by cross reference");
            next = prefixes[j].clone();
            next.apply(step);
        }
        prefixes.push(next);
    }

    let steps = prefixes.pop().map(|prefix| prefix.steps).unwrap_or_default();
    tracing::debug!(steps = steps.len(), "bottom-up construction finished");
    steps
}
