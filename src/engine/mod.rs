//! The two annealing engines: classical Simulated Annealing and Compressed
//! Annealing (`spec.md` §4.2, §4.3).

pub mod ca;
pub mod sa;

pub use ca::{compressed_annealing, compressed_annealing_with};
pub use sa::simulated_annealing;
