//! Demo driver for plain TSP: builds a random point cloud, seeds a tour with
//! nearest-neighbor, polishes it with 2-opt, then runs Simulated Annealing.
//!
//! CLI surface (`spec.md` §6): positional `MIN MAX SIZE`, defaulting to
//! `-100 100 8`; malformed arguments print to stderr and exit nonzero,
//! grounded on `original_source/src/tsp.cpp`'s `str2num` helper.

use compressed_annealing::construction::{nearest_neighbor, opt2};
use compressed_annealing::engine::simulated_annealing;
use compressed_annealing::geometry::Point2D;
use compressed_annealing::rng::Rng;
use compressed_annealing::tour::Tour;

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
        (-100.0, 100.0, 8)
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock is before the epoch")
        .as_nanos() as u64;
    let mut rng = Rng::seeded(seed);
    let points: Vec<Point2D> = (0..size)
        .map(|_| {
            let x = min + (max - min) * rng.uniform01();
            let y = min + (max - min) * rng.uniform01();
            Point2D::new(x, y)
        })
        .collect();

    let depot = Point2D::new(0.0, 0.0);
    let duration = |a: &Point2D, b: &Point2D| a.squared_distance(b);

    let nn_order = nearest_neighbor(&depot, &points, &duration);
    let nn_tour = Tour::new(depot, nn_order, |_| 0.0, duration).unwrap();
    println!("NN:\n{nn_tour}");

    let opt2_tour = opt2(nn_tour);
    println!("OPT2:\n{opt2_tour}");

    let sa_tour = simulated_annealing(
        opt2_tour,
        |t: &Tour<Point2D>, rng: &mut Rng| t.two_opt_move(rng),
        |t: &Tour<Point2D>| t.cost(),
        1_000_000.0,
        0.00003,
        1_000_000,
        &mut rng,
    );
    println!("SA:\n{sa_tour}");

    let final_tour = opt2(sa_tour);
    println!("OPT2:\n{final_tour}");
}
