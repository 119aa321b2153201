//! # compressed-annealing: simulated and compressed annealing for routing
//!
//! This crate provides two metaheuristic optimizers for combinatorial routing
//! problems: classical **Simulated Annealing** for unconstrained tour
//! optimization, and **Compressed Annealing** (Ohlmann & Thomas, 2007), a
//! pressure-augmented variant that solves the Traveling Salesman Problem with
//! Time Windows by relaxing hard time-window constraints into a penalty term
//! whose weight rises on a schedule as temperature falls.
//!
//! The engines are generic over any cheaply-clonable state and take the
//! neighbor/cost/penalty relationship as plain closures, rather than over a
//! fixed tour type: [`tour::Tour`] and [`tsptw::TsptwTour`] are the library's
//! own TSP/TSPTW state types, built on top of the engines rather than baked
//! into them.
//!
//! ## Quick example
//!
//! ```
//! use compressed_annealing::engine::simulated_annealing;
//! use compressed_annealing::geometry::Point2D;
//! use compressed_annealing::rng::Rng;
//! use compressed_annealing::tour::Tour;
//!
//! let depot = Point2D::new(0.0, 0.0);
//! let visits = vec![
//!     Point2D::new(10.0, 0.0),
//!     Point2D::new(10.0, 10.0),
//!     Point2D::new(0.0, 10.0),
//! ];
//! let tour = Tour::new(depot, visits, |_| 0.0, |a, b| a.squared_distance(b)).unwrap();
//!
//! let mut rng = Rng::seeded(42);
//! let best = simulated_annealing(
//!     tour,
//!     |t: &Tour<Point2D>, rng: &mut Rng| t.swap_move(rng),
//!     |t: &Tour<Point2D>| t.cost(),
//!     1_000.0,
//!     0.02,
//!     200,
//!     &mut rng,
//! );
//! println!("best cost: {}", best.cost());
//! ```

pub mod clock;
pub mod construction;
pub mod engine;
pub mod errors;
pub mod geometry;
pub mod models;
pub mod rng;
pub mod tour;
pub mod tsptw;

pub use engine::{compressed_annealing, compressed_annealing_with, simulated_annealing};
pub use errors::AnnealingError;
pub use models::{CaOutcome, CaParams, CaRunStats, LoggingOptions};
pub use rng::Rng;
pub use tour::Tour;
pub use tsptw::TsptwTour;
