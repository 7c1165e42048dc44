//! Core type aliases, traits, constants, and errors for Earth Mover's Distance.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the emd workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Masses, ground distances, transport costs, and sample values.
pub type Energy = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// EXTRA MASS PENALTY
// ============================================================================
/// Sentinel penalty meaning "charge extra mass at the largest ground distance".
/// Values equal to this are read as `Penalty::Diameter` by the pipeline.
pub const DEFAULT_EXTRA_MASS_PENALTY: Energy = -1.0;

// ============================================================================
// TRANSPORTATION SIMPLEX
// Exact minimum-cost transport over the residual (pre-flowed) problem.
// ============================================================================
/// Reduced costs above -tolerance × (1 + max cost) are treated as optimal.
pub const SIMPLEX_TOLERANCE: Energy = 1e-12;
/// Pivot budget per basic cell before the engine gives up.
pub const SIMPLEX_ITERATIONS: usize = 64;

// ============================================================================
// HISTOGRAM BINNING
// ============================================================================
/// Lower bound on the largest bin count searched by the "stone" estimator.
pub const STONE_BINS: usize = 100;
/// Half-width added on each side of a degenerate (zero-width) sample range.
pub const DEGENERATE_RANGE: Energy = 0.5;

// ============================================================================
// ERRORS
// ============================================================================
/// Every failure the pipeline can report.
///
/// All variants but [`Error::Solver`] are validation failures detected
/// before (or instead of) any transport computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Histogram lengths disagree, exceed the distance matrix, or the matrix is ragged.
    ShapeMismatch(String),
    /// A sample collection was empty.
    EmptyInput,
    /// A custom distance function returned a non-square or undersized matrix.
    MalformedDistance(String),
    /// Unrecognized transport backend identifier.
    UnknownBackend(String),
    /// Histogram range is not finite or not ordered.
    InvalidRange(String),
    /// Bin count is zero or the rule name is unknown.
    InvalidBins(String),
    /// Raised by a transport engine.
    Solver(String),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Solver(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShapeMismatch(s) => write!(f, "shape mismatch: {}", s),
            Self::EmptyInput => write!(f, "arrays of samples cannot be empty"),
            Self::MalformedDistance(s) => write!(f, "malformed distance matrix: {}", s),
            Self::UnknownBackend(s) => write!(f, "unknown backend: {}", s),
            Self::InvalidRange(s) => write!(f, "invalid range: {}", s),
            Self::InvalidBins(s) => write!(f, "invalid bins: {}", s),
            Self::Solver(s) => write!(f, "transport solver failed: {}", s),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO, or DEBUG when `verbose`.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn solver_errors_are_not_validation() {
        assert!(Error::EmptyInput.is_validation());
        assert!(Error::UnknownBackend("pot".into()).is_validation());
        assert!(!Error::Solver("infeasible".into()).is_validation());
    }
    #[test]
    fn messages_name_the_cause() {
        let e = Error::ShapeMismatch("histogram lengths must be equal".into());
        assert_eq!(e.to_string(), "shape mismatch: histogram lengths must be equal");
        assert_eq!(
            Error::EmptyInput.to_string(),
            "arrays of samples cannot be empty"
        );
    }
}
