//! Demo driver for TSPTW: builds a random point cloud with a per-point time
//! window, seeds a tour with nearest-neighbor, then runs Compressed Annealing.
//!
//! CLI surface (`spec.md` §6): positional `MIN MAX SIZE`, defaulting to
//! `-100 100 24`; malformed arguments print to stderr and exit nonzero.
//! Grounded on `original_source/src/tsptw.cpp`'s random-instance generator
//! (departure at 07:30, windows drawn from `[07:15, 07:30)` to `[07:45, 08:00)`).

use compressed_annealing::clock::TimeOfDay;
use compressed_annealing::construction::nearest_neighbor;
use compressed_annealing::engine::compressed_annealing_with;
use compressed_annealing::geometry::Point2D;
use compressed_annealing::models::{CaParams, LoggingOptions};
use compressed_annealing::rng::Rng;
use compressed_annealing::tsptw::TsptwTour;
use std::collections::BTreeMap;

fn str2num<T: std::str::FromStr>(arg: &str) -> T {
    arg.parse().unwrap_or_else(|_| {
        eprintln!("<ERR>: malformed argument ({arg})");
        std::process::exit(1);
    })
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    let (min, max, size) = if args.len() > 3 {
        (
            str2num::<f64>(&args[1]),
            str2num::<f64>(&args[2]),
            str2num::<usize>(&args[3]),
        )
    } else {
        (-100.0, 100.0, 24)
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock is before the epoch")
        .as_nanos() as u64;
    let mut rng = Rng::seeded(seed);
    let mut windows: BTreeMap<Point2D, (f64, f64)> = BTreeMap::new();
    let points: Vec<Point2D> = (0..size)
        .map(|_| {
            let x = min + (max - min) * rng.uniform01();
            let y = min + (max - min) * rng.uniform01();
            let p = Point2D::new(x, y);
            let earliest = 7.0 * 3600.0 + 15.0 * 60.0 + 15.0 * 60.0 * rng.uniform01();
            let latest = 7.0 * 3600.0 + 45.0 * 60.0 + 15.0 * 60.0 * rng.uniform01();
            windows.insert(p, (earliest, latest));
            p
        })
        .collect();

    let depot = Point2D::new(0.0, 0.0);
    let duration = |a: &Point2D, b: &Point2D| a.squared_distance(b);
    let departure = TimeOfDay::new(7, 30).unwrap().seconds() as f64;
    // The depot is never among `points`, but the penalty recurrence closes the
    // tour with a return edge to it, so it needs a window too; wide open, since
    // the depot itself is never time-constrained in this demo.
    windows.insert(depot, (0.0, f64::INFINITY));
    let time_window = move |p: &Point2D| *windows.get(p).expect("every point has a window");

    let nn_order = nearest_neighbor(&depot, &points, &duration);
    let nn_tour = TsptwTour::new(depot, nn_order, |_| 30.0, duration, departure, time_window).unwrap();
    println!("NN:\n{nn_tour}");

    let params = CaParams {
        alpha: 0.97,
        chi0: 0.9,
        p0: 1.0,
        beta: 0.1,
        kappa: 0.9999,
        ipt: 50,
        mtc: 100,
        itc: 20,
        tli: 50,
        tnp: 30,
    };

    let logging = LoggingOptions {
        log_calibration: true,
        log_warmup: true,
        log_best_updates: true,
        log_termination: true,
    };

    let outcome = compressed_annealing_with(
        nn_tour,
        |t: &TsptwTour<Point2D>, rng: &mut Rng| t.shift1_move(rng),
        |t: &TsptwTour<Point2D>| t.cost(),
        |t: &TsptwTour<Point2D>| t.penalty(),
        &params,
        &mut rng,
        None,
        &logging,
    )
    .unwrap_or_else(|e| {
        eprintln!("<ERR>: {e}");
        std::process::exit(1);
    });

    println!("CA:\n{}", outcome.best);
}
