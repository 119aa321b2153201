//! Compressed Annealing (Ohlmann & Thomas 2007): parameter calibration,
//! warm-up, and the main nested cooling/pressure loop (`spec.md` §4.3).
//!
//! Unlike SA, CA never re-heats (`spec.md` §9). The only escape from a bad
//! calibration is the `CalibrationDegenerate` error reported up front.

use crate::errors::AnnealingError;
use crate::models::{CaOutcome, CaParams, CaRunStats, LoggingOptions};
use crate::rng::Rng;
use std::time::Instant;

/// Runs Compressed Annealing from `initial` and returns the best state
/// observed, lexicographically preferring non-increasing penalty and then
/// strictly decreasing cost (`spec.md` §4.3.3, §8 invariant 2).
///
/// - `neighbor(current, rng)` proposes a random perturbation of `current`.
/// - `cost`/`penalty` are both non-negative scalar functions of state.
/// - `params` bundles the ten tunables (`spec.md` §4.3).
/// - `deadline`, if set, is checked once per outer step; the loop returns the
///   best state found so far once it has passed (`spec.md` §5, an optional
///   extension beyond the core spec).
///
/// # Errors
/// Returns [`AnnealingError::CalibrationDegenerate`] if Phase 1 calibration
/// cannot derive a finite starting temperature (`Δv = 0` or `χ₀ ∉ (0,1)`).
pub fn compressed_annealing<S, N, C, P>(
    initial: S,
    neighbor: N,
    cost: C,
    penalty: P,
    params: &CaParams,
    rng: &mut Rng,
) -> Result<CaOutcome<S>, AnnealingError>
where
    S: Clone,
    N: Fn(&S, &mut Rng) -> S,
    C: Fn(&S) -> f64,
    P: Fn(&S) -> f64,
{
    compressed_annealing_with(
        initial,
        neighbor,
        cost,
        penalty,
        params,
        rng,
        None,
        &LoggingOptions::default(),
    )
}

/// As [`compressed_annealing`], with an optional deadline and logging
/// verbosity. Split out so the common case stays a five-argument call.
pub fn compressed_annealing_with<S, N, C, P>(
    initial: S,
    neighbor: N,
    cost: C,
    penalty: P,
    params: &CaParams,
    rng: &mut Rng,
    deadline: Option<Instant>,
    logging: &LoggingOptions,
) -> Result<CaOutcome<S>, AnnealingError>
where
    S: Clone,
    N: Fn(&S, &mut Rng) -> S,
    C: Fn(&S) -> f64,
    P: Fn(&S) -> f64,
{
    let (mut temperature, pmax) = calibrate(&initial, &neighbor, &cost, &penalty, params, rng)?;
    if logging.log_calibration {
        log::debug!(
            "CA calibration: T0 = {temperature:.6}, Pmax = {pmax:.6}"
        );
    }

    warm_up(&initial, &neighbor, &cost, &penalty, params, &mut temperature, rng, logging);

    let mut current = initial;
    let mut ccost = cost(&current);
    let mut cpnlt = penalty(&current);
    let mut best = current.clone();
    let mut bcost = ccost;
    let mut bpnlt = cpnlt;

    let mut pressure = params.p0;
    let mut k = 0u64;
    let mut idle = 0u64;

    loop {
        for _ in 0..params.ipt {
            let next = neighbor(&current, rng);
            let ncost = cost(&next);
            let npnlt = penalty(&next);

            let ce = ccost + pressure * cpnlt;
            let ne = ncost + pressure * npnlt;

            if ne < ce || super::sa::metropolis_accept(ce - ne, temperature, rng) {
                current = next;
                ccost = ncost;
                cpnlt = npnlt;
            }

            if cpnlt <= bpnlt && ccost < bcost {
                best = current.clone();
                bcost = ccost;
                bpnlt = cpnlt;
                idle = 0;
                if logging.log_best_updates {
                    log::debug!("CA new best: cost = {bcost:.6}, penalty = {bpnlt:.6}");
                }
            }
        }

        k += 1;
        idle += 1;

        let deadline_hit = deadline.is_some_and(|d| Instant::now() >= d);
        if (k >= params.mtc && idle >= params.itc) || deadline_hit {
            if logging.log_termination {
                log::info!(
                    "CA terminating after {k} cooling steps (idle = {idle}, deadline hit = {deadline_hit})"
                );
            }
            break;
        }

        temperature *= params.alpha;
        // pmax <= p0 happens when calibration never saw a nonzero-penalty probe
        // (p0 == 0 and the instance is already feasible, e.g. S3): the pressure
        // schedule has nothing to rise towards, so it just holds at p0 rather
        // than dividing by a zero/degenerate span.
        pressure = if pmax <= params.p0 {
            params.p0
        } else {
            pmax * (1.0 - ((pmax - params.p0) / pmax) * (-params.beta * k as f64).exp())
        };
    }

    Ok(CaOutcome {
        best,
        best_cost: bcost,
        best_penalty: bpnlt,
        stats: CaRunStats {
            cooling_steps: k,
            final_temperature: temperature,
            final_pressure: pressure,
            idle_steps: idle,
        },
    })
}

/// Phase 1, parameter calibration (`spec.md` §4.3.1). Draws `2·TNP` neighbor
/// pairs from `initial`, derives the starting temperature from the average
/// observed uphill move, and tracks the maximum pressure candidate across
/// probes with nonzero penalty.
fn calibrate<S, N, C, P>(
    initial: &S,
    neighbor: &N,
    cost: &C,
    penalty: &P,
    params: &CaParams,
    rng: &mut Rng,
) -> Result<(f64, f64), AnnealingError>
where
    N: Fn(&S, &mut Rng) -> S,
    C: Fn(&S) -> f64,
    P: Fn(&S) -> f64,
{
    if !(0.0 < params.chi0 && params.chi0 < 1.0) {
        return Err(AnnealingError::CalibrationDegenerate(format!(
            "chi0 = {} is not in (0,1)",
            params.chi0
        )));
    }

    let mut delta_v = 0.0;
    let mut pmax = params.p0;

    for _ in 0..(2 * params.tnp) {
        let n1 = neighbor(initial, rng);
        let n2 = neighbor(&n1, rng);

        let c1 = cost(&n1);
        let p1 = penalty(&n1);
        let c2 = cost(&n2);
        let p2 = penalty(&n2);

        let e1 = c1 + params.p0 * p1;
        let e2 = c2 + params.p0 * p2;
        delta_v += (e2 - e1).abs();

        for (c, p) in [(c1, p1), (c2, p2)] {
            if p > 0.0 {
                let candidate = (c * params.kappa) / (p * (1.0 - params.kappa));
                if candidate > pmax {
                    pmax = candidate;
                }
            }
        }
    }

    if delta_v == 0.0 {
        return Err(AnnealingError::CalibrationDegenerate(
            "probe pairs produced no variation in composite evaluation (delta_v = 0)".to_string(),
        ));
    }

    let temperature = delta_v / (1.0 / params.chi0).ln();
    Ok((temperature, pmax))
}

/// Phase 2, warm-up (`spec.md` §4.3.2). Re-heats `temperature *= 1.5` until
/// the empirical acceptance ratio over `TLI` trial iterations at fixed
/// `pressure = P₀` meets `χ₀`.
fn warm_up<S, N, C, P>(
    initial: &S,
    neighbor: &N,
    cost: &C,
    penalty: &P,
    params: &CaParams,
    temperature: &mut f64,
    rng: &mut Rng,
    logging: &LoggingOptions,
) where
    N: Fn(&S, &mut Rng) -> S,
    C: Fn(&S) -> f64,
    P: Fn(&S) -> f64,
{
    let mut current = initial.clone();
    let mut ccost = cost(&current);
    let mut cpnlt = penalty(&current);

    loop {
        let mut accepted = 0u64;
        for _ in 0..params.tli {
            let next = neighbor(&current, rng);
            let ncost = cost(&next);
            let npnlt = penalty(&next);

            let ce = ccost + params.p0 * cpnlt;
            let ne = ncost + params.p0 * npnlt;

            if ne < ce || super::sa::metropolis_accept(ce - ne, *temperature, rng) {
                current = next;
                ccost = ncost;
                cpnlt = npnlt;
                accepted += 1;
            }
        }

        let ratio = accepted as f64 / params.tli as f64;
        if logging.log_warmup {
            log::debug!("CA warm-up: T = {:.6}, acceptance ratio = {ratio:.4}", *temperature);
        }
        if ratio >= params.chi0 {
            return;
        }
        *temperature *= 1.5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2D;
    use crate::tsptw::TsptwTour;

    fn params(overrides: impl FnOnce(&mut CaParams)) -> CaParams {
        let mut p = CaParams {
            alpha: 0.95,
            chi0: 0.9,
            p0: 1.0,
            beta: 0.2,
            kappa: 0.9999,
            ipt: 20,
            mtc: 5,
            itc: 5,
            tli: 20,
            tnp: 10,
        };
        overrides(&mut p);
        p
    }

    fn wide_open_instance() -> TsptwTour<Point2D> {
        let depot = Point2D::new(0.0, 0.0);
        let visits = vec![
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
            Point2D::new(5.0, 5.0),
        ];
        TsptwTour::new(
            depot,
            visits,
            |_| 0.0,
            |a, b| a.squared_distance(b),
            0.0,
            |_| (0.0, f64::INFINITY),
        )
        .unwrap()
    }

    #[test]
    fn no_time_constraints_yields_zero_penalty_best() {
        let mut rng = Rng::seeded(7);
        let outcome = compressed_annealing(
            wide_open_instance(),
            |t: &TsptwTour<Point2D>, rng: &mut Rng| t.shift1_move(rng),
            |t: &TsptwTour<Point2D>| t.cost(),
            |t: &TsptwTour<Point2D>| t.penalty(),
            &params(|_| {}),
            &mut rng,
        )
        .unwrap();
        assert_eq!(outcome.best_penalty, 0.0);
        assert_eq!(outcome.best.penalty(), 0.0);
    }

    #[test]
    fn zero_p0_on_always_feasible_instance_never_produces_nan_pressure() {
        // p0 == 0 and every probe has zero penalty (S3-style instance): pmax
        // stays at its p0 seed, so the pressure update must not divide 0 by 0.
        let mut rng = Rng::seeded(3);
        let outcome = compressed_annealing(
            wide_open_instance(),
            |t: &TsptwTour<Point2D>, rng: &mut Rng| t.shift1_move(rng),
            |t: &TsptwTour<Point2D>| t.cost(),
            |t: &TsptwTour<Point2D>| t.penalty(),
            &params(|p| p.p0 = 0.0),
            &mut rng,
        )
        .unwrap();
        assert!(outcome.stats.final_pressure.is_finite());
        assert!(outcome.best_cost.is_finite());
        assert!(outcome.best_cost <= wide_open_instance().cost() + 1e-9);
    }

    #[test]
    fn degenerate_calibration_is_reported() {
        let mut rng = Rng::seeded(1);
        let err = compressed_annealing(
            wide_open_instance(),
            // A neighbor that never perturbs the state collapses delta_v to 0.
            |t: &TsptwTour<Point2D>, _rng: &mut Rng| t.clone(),
            |t: &TsptwTour<Point2D>| t.cost(),
            |t: &TsptwTour<Point2D>| t.penalty(),
            &params(|p| {
                p.chi0 = 0.94;
                p.p0 = 0.0;
            }),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, AnnealingError::CalibrationDegenerate(_)));
    }

    #[test]
    fn invalid_chi0_is_reported() {
        let mut rng = Rng::seeded(1);
        let err = compressed_annealing(
            wide_open_instance(),
            |t: &TsptwTour<Point2D>, rng: &mut Rng| t.shift1_move(rng),
            |t: &TsptwTour<Point2D>| t.cost(),
            |t: &TsptwTour<Point2D>| t.penalty(),
            &params(|p| p.chi0 = 1.5),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, AnnealingError::CalibrationDegenerate(_)));
    }

    #[test]
    fn best_never_regresses_lexicographically() {
        let mut rng = Rng::seeded(99);
        let outcome = compressed_annealing(
            wide_open_instance(),
            |t: &TsptwTour<Point2D>, rng: &mut Rng| t.shift1_move(rng),
            |t: &TsptwTour<Point2D>| t.cost(),
            |t: &TsptwTour<Point2D>| t.penalty(),
            &params(|_| {}),
            &mut rng,
        )
        .unwrap();
        assert!(outcome.best_penalty >= 0.0);
        assert!(outcome.best_cost >= 0.0);
    }

    #[test]
    fn determinism_same_seed_same_outcome() {
        let run = |seed: u64| {
            let mut rng = Rng::seeded(seed);
            compressed_annealing(
                wide_open_instance(),
                |t: &TsptwTour<Point2D>, rng: &mut Rng| t.shift1_move(rng),
                |t: &TsptwTour<Point2D>| t.cost(),
                |t: &TsptwTour<Point2D>| t.penalty(),
                &params(|_| {}),
                &mut rng,
            )
            .unwrap()
            .best_cost
        };
        assert_eq!(run(2024), run(2024));
    }
}
