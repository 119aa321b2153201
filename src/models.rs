//! Parameter and result types for the annealing engines.
//!
//! Grouped the way the teacher's `models.rs` groups algorithm parameters
//! (`SimulatedAnnealingParams`, `LoggingOptions`, `SolverResult`): plain,
//! `Copy`/`Clone` structs rather than a generic configuration trait.

/// The ten parameters Compressed Annealing's calibration, warm-up, and main
/// loop phases need (`spec.md` §4.3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaParams {
    /// Cooling coefficient `α`, `T ← T·α` per main-loop step (note the CA
    /// convention differs from SA's `T ← T·(1-α)`, per the glossary).
    pub alpha: f64,
    /// Target initial acceptance ratio `χ₀ ∈ (0,1)`.
    pub chi0: f64,
    /// Initial pressure `P₀ ≥ 0`.
    pub p0: f64,
    /// Compression shape parameter `β > 0`.
    pub beta: f64,
    /// Pressure cap ratio `κ ∈ (0,1)`, close to 1 (e.g. `0.9999`).
    pub kappa: f64,
    /// Inner iterations per temperature (`IPT`).
    pub ipt: u64,
    /// Minimum temperature changes before termination is considered (`MTC`).
    pub mtc: u64,
    /// Maximum idle temperature changes before termination (`ITC`).
    pub itc: u64,
    /// Trial-loop iterations per warm-up attempt (`TLI`).
    pub tli: u64,
    /// Trial neighbor pairs drawn during calibration (`TNP`).
    pub tnp: u64,
}

/// Logging verbosity for an annealing run, mirrors the teacher's
/// `LoggingOptions`: every field defaults to off, callers opt in to the
/// granularity they want. Emitted through the `log` facade rather than
/// `println!`, since a library has no business writing to stdout directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggingOptions {
    /// Log a message once calibration (CA Phase 1) completes.
    pub log_calibration: bool,
    /// Log a message on every warm-up re-heat attempt (CA Phase 2).
    pub log_warmup: bool,
    /// Log a message whenever a new best is recorded.
    pub log_best_updates: bool,
    /// Log a message when the engine terminates, with the reason.
    pub log_termination: bool,
}

/// Run statistics for a completed Compressed Annealing call, mirroring the
/// teacher's `SolverResult` pattern of returning the winning solution
/// alongside summary metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaRunStats {
    /// Number of outer cooling steps (`k`) completed.
    pub cooling_steps: u64,
    /// Final temperature at termination.
    pub final_temperature: f64,
    /// Final pressure at termination.
    pub final_pressure: f64,
    /// Idle counter at termination (cooling steps since the last best
    /// update).
    pub idle_steps: u64,
}

/// Return type of [`crate::engine::ca::compressed_annealing`].
#[derive(Debug, Clone)]
pub struct CaOutcome<S> {
    /// The best state observed (lexicographically dominant in
    /// `(penalty, cost)`, per `spec.md` §4.3.3).
    pub best: S,
    /// Cost of `best`.
    pub best_cost: f64,
    /// Penalty of `best`.
    pub best_penalty: f64,
    /// Run statistics for diagnostics/logging.
    pub stats: CaRunStats,
}
