//! TSP tour state: depot, ordered visit sequence, cached cost, and the three
//! neighbor/local-search moves the annealing engines and construction
//! heuristics consume (`spec.md` §3, §4.4).

use crate::errors::AnnealingError;
use crate::rng::Rng;
use std::fmt;
use std::rc::Rc;

/// An ordered tour starting and ending at a fixed depot.
///
/// Cloning a `Tour` is cheap: the visit sequence is the only part that costs
/// `O(n)`, and `serviceTime`/`duration` are held behind `Rc` so the engine can
/// hold `current`, `next`, and `best` simultaneously (`spec.md` §5) without
/// re-boxing the cost model on every iteration.
#[derive(Clone)]
pub struct Tour<T> {
    depot: T,
    visits: Vec<T>,
    service_time: Rc<dyn Fn(&T) -> f64>,
    duration: Rc<dyn Fn(&T, &T) -> f64>,
    cost: f64,
}

impl<T: Clone + PartialEq> Tour<T> {
    /// Builds a tour from a depot and a set of visit points.
    ///
    /// # Errors
    /// Returns [`AnnealingError::EmptyTour`] if `visits` is empty (moves are
    /// undefined on a depot-only tour, per `spec.md` §7), or
    /// [`AnnealingError::InvalidTour`] if `depot` appears among `visits`.
    pub fn new(
        depot: T,
        visits: Vec<T>,
        service_time: impl Fn(&T) -> f64 + 'static,
        duration: impl Fn(&T, &T) -> f64 + 'static,
    ) -> Result<Self, AnnealingError> {
        if visits.is_empty() {
            return Err(AnnealingError::EmptyTour);
        }
        if visits.iter().any(|v| *v == depot) {
            return Err(AnnealingError::InvalidTour);
        }
        let service_time: Rc<dyn Fn(&T) -> f64> = Rc::new(service_time);
        let duration: Rc<dyn Fn(&T, &T) -> f64> = Rc::new(duration);
        let cost = Self::compute_cost(&depot, &visits, &service_time, &duration);
        Ok(Self {
            depot,
            visits,
            service_time,
            duration,
            cost,
        })
    }

    /// The fixed start/end vertex, excluded from the permutable sequence.
    pub fn depot(&self) -> &T {
        &self.depot
    }

    /// The current visit order.
    pub fn visits(&self) -> &[T] {
        &self.visits
    }

    /// The cached total tour cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Recomputes the total cost from scratch, for invariant checking
    /// (`spec.md` §8 invariant 3: cached cost matches the recomputed total
    /// within `1e-9 * |cost|`).
    pub fn recompute_cost(&self) -> f64 {
        Self::compute_cost(&self.depot, &self.visits, &self.service_time, &self.duration)
    }

    fn compute_cost(
        depot: &T,
        visits: &[T],
        service_time: &Rc<dyn Fn(&T) -> f64>,
        duration: &Rc<dyn Fn(&T, &T) -> f64>,
    ) -> f64 {
        let mut total = service_time(depot);
        let mut prev = depot;
        for v in visits {
            total += duration(prev, v);
            total += service_time(v);
            prev = v;
        }
        total += duration(prev, depot);
        total
    }

    fn with_visits(&self, visits: Vec<T>) -> Self {
        let cost = Self::compute_cost(&self.depot, &visits, &self.service_time, &self.duration);
        Self {
            depot: self.depot.clone(),
            visits,
            service_time: self.service_time.clone(),
            duration: self.duration.clone(),
            cost,
        }
    }

    /// **Swap** move: pick two indices uniformly and exchange their visits.
    /// The SA neighbor for plain TSP (`spec.md` §4.4).
    ///
    /// # Panics
    /// Panics if the tour has no visits (the move is undefined on an empty
    /// tour, per `spec.md` §7 `EmptyTour`).
    pub fn swap_move(&self, rng: &mut Rng) -> Self {
        let n = self.visits.len();
        assert!(n > 0, "swap move is undefined on an empty tour");
        let i = rng.bounded(n);
        let j = rng.bounded(n);
        let mut visits = self.visits.clone();
        visits.swap(i, j);
        self.with_visits(visits)
    }

    /// **Shift-1** move: pick two indices uniformly, remove the visit at the
    /// first, and re-insert it at the second. The CA neighbor for TSPTW
    /// (`spec.md` §4.4).
    ///
    /// # Panics
    /// Panics if the tour has no visits.
    pub fn shift1_move(&self, rng: &mut Rng) -> Self {
        let n = self.visits.len();
        assert!(n > 0, "shift-1 move is undefined on an empty tour");
        let i = rng.bounded(n);
        let j = rng.bounded(n);
        let mut visits = self.visits.clone();
        let v = visits.remove(i);
        visits.insert(j, v);
        self.with_visits(visits)
    }

    /// **2-opt reversal**: reverses the subsequence `visits[i..=k]`.
    /// Deterministic, used as the local-search step in [`crate::construction::opt2`].
    pub fn reverse_segment(&self, i: usize, k: usize) -> Self {
        assert!(i <= k && k < self.visits.len(), "reversal range out of bounds");
        let mut visits = self.visits.clone();
        visits[i..=k].reverse();
        self.with_visits(visits)
    }

    /// Randomized 2-opt reversal: picks `i <= k` uniformly and reverses
    /// `visits[i..=k]`. An alternative neighbor to [`Tour::swap_move`],
    /// matching the reversal-based neighbor lambda in the original driver.
    ///
    /// # Panics
    /// Panics if the tour has no visits.
    pub fn two_opt_move(&self, rng: &mut Rng) -> Self {
        let n = self.visits.len();
        assert!(n > 0, "2-opt move is undefined on an empty tour");
        let a = rng.bounded(n);
        let b = rng.bounded(n);
        let (i, k) = if a <= b { (a, b) } else { (b, a) };
        self.reverse_segment(i, k)
    }
}

impl<T: fmt::Display> fmt::Display for Tour<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.depot)?;
        for v in &self.visits {
            write!(f, " -> {v}")?;
        }
        write!(f, " -> {} | cost = {:.4}", self.depot, self.cost)
    }
}
