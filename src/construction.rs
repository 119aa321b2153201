//! Construction heuristics: nearest-neighbor seeding and 2-opt local search
//! (`spec.md` §4.5). Both are pure greedy baselines, out of the engine's own
//! termination/correctness claims; they only produce inputs for it.

use crate::tour::Tour;

/// Builds a visit order by repeatedly appending the unvisited point nearest
/// (by `duration`) to the current tail, starting from `depot`. Ties are
/// broken by first-encountered order, matching `spec.md` §4.5.
pub fn nearest_neighbor<T: Clone + PartialEq>(
    depot: &T,
    visits: &[T],
    duration: &impl Fn(&T, &T) -> f64,
) -> Vec<T> {
    let mut remaining: Vec<T> = visits.to_vec();
    let mut ordered = Vec::with_capacity(visits.len());
    let mut tail = depot.clone();

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_cost = duration(&tail, &remaining[0]);
        for (idx, candidate) in remaining.iter().enumerate().skip(1) {
            let c = duration(&tail, candidate);
            if c < best_cost {
                best_cost = c;
                best_idx = idx;
            }
        }
        let next = remaining.remove(best_idx);
        tail = next.clone();
        ordered.push(next);
    }

    ordered
}

/// First-improvement 2-opt local search: enumerates segment reversals
/// `(i, k)` with `i < k`, accepts and restarts from the first one that
/// strictly reduces total cost, and terminates when no improving reversal
/// exists (`spec.md` §4.5, invariant 5 in §8).
pub fn opt2<T: Clone + PartialEq>(initial: Tour<T>) -> Tour<T> {
    let mut current = initial;
    loop {
        let n = current.visits().len();
        let mut improved = None;
        'search: for i in 0..n {
            for k in (i + 1)..n {
                let candidate = current.reverse_segment(i, k);
                if candidate.cost() < current.cost() {
                    improved = Some(candidate);
                    break 'search;
                }
            }
        }
        match improved {
            Some(next) => current = next,
            None => return current,
        }
    }
}
