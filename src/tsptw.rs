//! TSP tour extended with a departure time and per-point time windows
//! (`spec.md` §3). Penalty uses the corrected formula that includes the
//! destination's service time; `spec.md` §9 flags a variant of the original
//! source that omits it as buggy.

use crate::errors::AnnealingError;
use crate::rng::Rng;
use crate::tour::Tour;
use std::fmt;
use std::rc::Rc;

/// A tour with a departure time and a time-window constraint per point.
///
/// Composed from a plain [`Tour`] (same cost, same moves) plus the
/// time-window machinery; this mirrors `spec.md` §3's framing of TSPTW as
/// "extends TSP with departureTime ... and a time-window function". The
/// service-time and duration closures are kept here too (alongside the
/// copies the wrapped `Tour` already holds) so penalty can be recomputed
/// after any move without reaching into `Tour`'s private cost model.
#[derive(Clone)]
pub struct TsptwTour<T> {
    tour: Tour<T>,
    service_time: Rc<dyn Fn(&T) -> f64>,
    duration: Rc<dyn Fn(&T, &T) -> f64>,
    departure_time: f64,
    time_window: Rc<dyn Fn(&T) -> (f64, f64)>,
    penalty: f64,
}

impl<T: Clone + PartialEq> TsptwTour<T> {
    /// Builds a TSPTW tour from a depot, visits, service/duration functions,
    /// a departure time, and a per-point time-window function.
    ///
    /// # Errors
    /// Returns [`AnnealingError::InvalidTour`] if `depot` appears among
    /// `visits`.
    pub fn new(
        depot: T,
        visits: Vec<T>,
        service_time: impl Fn(&T) -> f64 + 'static,
        duration: impl Fn(&T, &T) -> f64 + 'static,
        departure_time: f64,
        time_window: impl Fn(&T) -> (f64, f64) + 'static,
    ) -> Result<Self, AnnealingError> {
        let service_time: Rc<dyn Fn(&T) -> f64> = Rc::new(service_time);
        let duration: Rc<dyn Fn(&T, &T) -> f64> = Rc::new(duration);
        let time_window: Rc<dyn Fn(&T) -> (f64, f64)> = Rc::new(time_window);

        let tour = {
            let service_time = service_time.clone();
            let duration = duration.clone();
            Tour::new(
                depot,
                visits,
                move |t: &T| service_time(t),
                move |a: &T, b: &T| duration(a, b),
            )?
        };

        let penalty = Self::penalty_of(
            tour.depot(),
            tour.visits(),
            departure_time,
            &service_time,
            &duration,
            &time_window,
        );

        Ok(Self {
            tour,
            service_time,
            duration,
            departure_time,
            time_window,
            penalty,
        })
    }

    pub fn depot(&self) -> &T {
        self.tour.depot()
    }

    pub fn visits(&self) -> &[T] {
        self.tour.visits()
    }

    pub fn cost(&self) -> f64 {
        self.tour.cost()
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    pub fn departure_time(&self) -> f64 {
        self.departure_time
    }

    pub fn recompute_cost(&self) -> f64 {
        self.tour.recompute_cost()
    }

    /// Recomputes the penalty from scratch, for invariant checking
    /// (`spec.md` §8 invariants 3/4).
    pub fn recompute_penalty(&self) -> f64 {
        Self::penalty_of(
            self.tour.depot(),
            self.tour.visits(),
            self.departure_time,
            &self.service_time,
            &self.duration,
            &self.time_window,
        )
    }

    /// Total penalty for a tour over `depot, visits[..], depot`: walks the
    /// cumulative arrival/start-of-service recurrence from `spec.md` §3,
    /// including the closing return edge to the depot.
    fn penalty_of(
        depot: &T,
        visits: &[T],
        departure_time: f64,
        service_time: &Rc<dyn Fn(&T) -> f64>,
        duration: &Rc<dyn Fn(&T, &T) -> f64>,
        time_window: &Rc<dyn Fn(&T) -> (f64, f64)>,
    ) -> f64 {
        let mut prev = depot;
        let mut start_of_service = departure_time;
        let mut penalty = 0.0;
        for next in visits.iter().chain(std::iter::once(depot)) {
            let arrival = start_of_service + service_time(prev) + duration(prev, next);
            let (earliest, latest) = time_window(next);
            let start = arrival.max(earliest);
            penalty += (start + service_time(next) - latest).max(0.0);
            prev = next;
            start_of_service = start;
        }
        penalty
    }

    fn rebuilt(&self, next_tour: Tour<T>) -> Self {
        let penalty = Self::penalty_of(
            next_tour.depot(),
            next_tour.visits(),
            self.departure_time,
            &self.service_time,
            &self.duration,
            &self.time_window,
        );
        Self {
            tour: next_tour,
            service_time: self.service_time.clone(),
            duration: self.duration.clone(),
            departure_time: self.departure_time,
            time_window: self.time_window.clone(),
            penalty,
        }
    }

    /// **Swap** move, delegating to [`Tour::swap_move`] and recomputing the
    /// penalty for the resulting sequence.
    pub fn swap_move(&self, rng: &mut Rng) -> Self {
        self.rebuilt(self.tour.swap_move(rng))
    }

    /// **Shift-1** move, the CA neighbor for TSPTW (`spec.md` §4.4).
    pub fn shift1_move(&self, rng: &mut Rng) -> Self {
        self.rebuilt(self.tour.shift1_move(rng))
    }

    /// **2-opt reversal**, deterministic variant used by local search.
    pub fn reverse_segment(&self, i: usize, k: usize) -> Self {
        self.rebuilt(self.tour.reverse_segment(i, k))
    }
}

impl<T: fmt::Display> fmt::Display for TsptwTour<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tour)?;
        write!(f, " | penalty = {:.4}", self.penalty)
    }
}
