use super::edges::Edges;
use super::estimator;
use emd_core::*;

/// Rule for choosing how many equal-width bins span a sample range.
///
/// Either an explicit count or one of the classic width estimators. The
/// estimators are evaluated on the union of both sample collections so the
/// two histograms always end up with identical edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bins {
    /// Exactly this many bins.
    Count(usize),
    /// Smaller of `Fd` and `Sturges`.
    #[default]
    Auto,
    /// Freedman–Diaconis, robust to outliers.
    Fd,
    /// Sturges with a skewness correction.
    Doane,
    /// Normal-reference rule.
    Scott,
    /// Cross-validated integrated squared error.
    Stone,
    /// Cube-root rule.
    Rice,
    /// Log-of-n rule.
    Sturges,
    /// Square-root rule.
    Sqrt,
}

impl Bins {
    /// Number of bins for `samples` over `range`.
    ///
    /// Estimators only see samples inside the range and fall back to one bin
    /// when their width collapses to zero.
    pub fn count(&self, samples: &[Energy], range: (Energy, Energy)) -> Result<usize, Error> {
        let (lo, hi) = range;
        let inside = samples
            .iter()
            .copied()
            .filter(|v| *v >= lo && *v <= hi)
            .collect::<Vec<_>>();
        let width = match self {
            Bins::Count(0) => return Err(Error::InvalidBins("`bins` must be positive".into())),
            Bins::Count(n) => return Ok(*n),
            _ if inside.is_empty() => return Ok(1),
            Bins::Auto => estimator::auto(&inside),
            Bins::Fd => estimator::fd(&inside),
            Bins::Doane => estimator::doane(&inside),
            Bins::Scott => estimator::scott(&inside),
            Bins::Stone => estimator::stone(&inside, range),
            Bins::Rice => estimator::rice(&inside),
            Bins::Sturges => estimator::sturges(&inside),
            Bins::Sqrt => estimator::sqrt(&inside),
        };
        match width > 0. {
            true => Ok(((hi - lo) / width).ceil() as usize),
            false => Ok(1),
        }
    }
    /// Shared edges for `samples` over `range`.
    pub fn edges(&self, samples: &[Energy], range: (Energy, Energy)) -> Result<Edges, Error> {
        self.count(samples, range)
            .map(|n| Edges::uniform(range, n))
            .inspect(|edges| log::debug!("{:?} selected {} bins over {:?}", self, edges.n(), range))
    }
}

impl std::str::FromStr for Bins {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Bins::Auto),
            "fd" => Ok(Bins::Fd),
            "doane" => Ok(Bins::Doane),
            "scott" => Ok(Bins::Scott),
            "stone" => Ok(Bins::Stone),
            "rice" => Ok(Bins::Rice),
            "sturges" => Ok(Bins::Sturges),
            "sqrt" => Ok(Bins::Sqrt),
            other => other
                .parse::<usize>()
                .map(Bins::Count)
                .map_err(|_| Error::InvalidBins(format!("unknown bin rule '{}'", s))),
        }
    }
}
