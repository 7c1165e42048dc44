use emd_core::*;
use emd_transport::*;

/// Which transport engine solves the residual problem.
///
/// Both engines are exact; on the same problem their costs agree up to
/// floating-point tolerance, although the plans may differ when several
/// plans are optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// Native transportation simplex.
    #[default]
    Simplex,
    /// General-purpose linear program.
    Linear,
}

impl Backend {
    pub const fn all() -> [Self; 2] {
        [Self::Simplex, Self::Linear]
    }
}

impl Solver for Backend {
    fn solve(&self, problem: &Problem) -> Result<Flow, Error> {
        match self {
            Self::Simplex => Simplex.solve(problem),
            Self::Linear => Linear.solve(problem),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simplex" | "native" => Ok(Self::Simplex),
            "linear" | "lp" => Ok(Self::Linear),
            _ => Err(Error::UnknownBackend(s.to_string())),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simplex => write!(f, "simplex"),
            Self::Linear => write!(f, "linear"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parses_names() {
        assert_eq!("simplex".parse::<Backend>(), Ok(Backend::Simplex));
        assert_eq!("Native".parse::<Backend>(), Ok(Backend::Simplex));
        assert_eq!("LP".parse::<Backend>(), Ok(Backend::Linear));
        assert_eq!("linear".parse::<Backend>(), Ok(Backend::Linear));
        assert_eq!(
            "sinkhorn".parse::<Backend>(),
            Err(Error::UnknownBackend("sinkhorn".to_string()))
        );
    }
    #[test]
    fn display_parses_back() {
        for backend in Backend::all() {
            assert_eq!(backend.to_string().parse::<Backend>(), Ok(backend));
        }
    }
}
