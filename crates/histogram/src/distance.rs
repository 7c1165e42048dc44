use emd_core::*;
use emd_transport::*;

/// Caller-supplied ground distance over bin centers.
pub type Custom = Box<dyn Fn(&[Energy]) -> Vec<Vec<Energy>> + Send + Sync>;

/// How to turn bin centers into a ground-distance matrix.
#[derive(Default)]
pub enum Distance {
    /// `|x - y|` between bin centers.
    #[default]
    Euclidean,
    /// Any function of the bin centers returning a square matrix with at
    /// least one row per bin.
    Custom(Custom),
}

impl Distance {
    /// Wraps a distance function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[Energy]) -> Vec<Vec<Energy>> + Send + Sync + 'static,
    {
        Distance::Custom(Box::new(f))
    }
    /// Ground-distance matrix between `centers`.
    ///
    /// Custom output is checked for shape after the function runs: it must
    /// be square and at least as large as the number of bins.
    pub fn metric(&self, centers: &[Energy]) -> Result<Metric, Error> {
        match self {
            Distance::Euclidean => Ok(Metric::euclidean(centers)),
            Distance::Custom(f) => {
                let rows = f(centers);
                if rows.is_empty() || rows.iter().any(|row| row.len() != rows.len()) {
                    return Err(Error::MalformedDistance(
                        "distance matrix must be square; check your `distance` function".into(),
                    ));
                }
                if rows.len() < centers.len() {
                    return Err(Error::MalformedDistance(format!(
                        "distance matrix must have at least as many rows/columns as there are \
                         bins in the histograms ({} < {}); check your `distance` function",
                        rows.len(),
                        centers.len()
                    )));
                }
                Metric::try_from(rows)
                    .map_err(|e| Error::MalformedDistance(e.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Euclidean => write!(f, "Euclidean"),
            Distance::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn euclidean_between_centers() {
        let metric = Distance::Euclidean.metric(&[1.5, 2.5]).unwrap();
        assert_eq!(metric.get(0, 1), 1.);
    }
    #[test]
    fn custom_output_must_be_square() {
        let ragged = Distance::custom(|x| vec![vec![0.; x.len() + 1]; x.len()]);
        assert!(matches!(
            ragged.metric(&[1., 2.]),
            Err(Error::MalformedDistance(_))
        ));
    }
    #[test]
    fn custom_output_must_cover_every_bin() {
        let small = Distance::custom(|_| vec![vec![0.]]);
        assert!(matches!(
            small.metric(&[1., 2.]),
            Err(Error::MalformedDistance(_))
        ));
    }
    #[test]
    fn custom_output_may_be_larger() {
        let squared = Distance::custom(|x| {
            let n = x.len() + 1;
            (0..n)
                .map(|i| (0..n).map(|j| ((i as Energy) - (j as Energy)).powi(2)).collect())
                .collect()
        });
        let metric = squared.metric(&[1., 2.]).unwrap();
        assert_eq!(metric.n(), 3);
        assert_eq!(metric.get(0, 2), 4.);
    }
}
