use super::measure::Measure;
use emd_core::*;

/// Square ground-distance matrix between histogram bins.
///
/// Stored densely in row-major order. The matrix may be larger than the
/// histograms it is paired with; only the top-left block indexed by the
/// histogram bins is ever read by the engines.
///
/// # Preconditions
///
/// Entries should be non-negative with a zero diagonal, symmetric, and
/// satisfy the triangle inequality. Only the shape is checked.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "Vec<Vec<Energy>>", try_from = "Vec<Vec<Energy>>")]
pub struct Metric {
    /// Number of rows (and columns).
    n: usize,
    /// Row-major distances.
    dx: Vec<Energy>,
}

impl Metric {
    /// An n×n matrix of zero distances.
    pub fn zeroes(n: usize) -> Self {
        Self {
            n,
            dx: vec![0.; n * n],
        }
    }
    /// Pairwise `|x - y|` between 1-dimensional points.
    pub fn euclidean(points: &[Energy]) -> Self {
        let n = points.len();
        let dx = points
            .iter()
            .flat_map(|x| points.iter().map(move |y| (x - y).abs()))
            .collect();
        Self { n, dx }
    }
    /// Number of rows (and columns).
    pub fn n(&self) -> usize {
        self.n
    }
    pub fn get(&self, i: usize, j: usize) -> Energy {
        debug_assert!(i < self.n && j < self.n, "({}, {}) outside {} bins", i, j, self.n);
        self.dx[i * self.n + j]
    }
    /// Largest entry of the whole matrix. Zero for an empty matrix.
    pub fn diameter(&self) -> Energy {
        self.dx.iter().copied().fold(0., Energy::max)
    }
    /// Iterates over matrix rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Energy]> + '_ {
        self.dx.chunks(self.n.max(1)).take(self.n)
    }
}

impl Measure for Metric {
    type X = usize;
    type Y = usize;
    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy {
        self.get(*x, *y)
    }
}

impl TryFrom<Vec<Vec<Energy>>> for Metric {
    type Error = Error;
    fn try_from(rows: Vec<Vec<Energy>>) -> Result<Self, Self::Error> {
        let n = rows.len();
        match rows.iter().position(|row| row.len() != n) {
            Some(i) => Err(Error::ShapeMismatch(format!(
                "distance matrix must be square: row {} has {} columns, expected {}",
                i,
                rows[i].len(),
                n
            ))),
            None => Ok(Self {
                n,
                dx: rows.into_iter().flatten().collect(),
            }),
        }
    }
}

impl From<Metric> for Vec<Vec<Energy>> {
    fn from(metric: Metric) -> Self {
        metric.rows().map(|row| row.to_vec()).collect()
    }
}

impl Arbitrary for Metric {
    /// Distances between random points on a line, which is always a metric.
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(2..=12);
        let points = (0..n)
            .map(|_| rng.random_range(0.0..10.0))
            .collect::<Vec<Energy>>();
        Self::euclidean(&points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn nested_rows_roundtrip() {
        let rows = vec![vec![0., 0.5], vec![0.5, 0.]];
        let metric = Metric::try_from(rows.clone()).unwrap();
        assert_eq!(metric.n(), 2);
        assert_eq!(metric.get(0, 1), 0.5);
        assert_eq!(Vec::<Vec<Energy>>::from(metric), rows);
    }
    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![0., 0.5, 3.], vec![0.5, 0.]];
        assert!(matches!(
            Metric::try_from(rows),
            Err(Error::ShapeMismatch(_))
        ));
    }
    #[test]
    fn euclidean_is_zero_on_diagonal() {
        let metric = Metric::euclidean(&[1.5, 2.5, 4.5]);
        assert_eq!(metric.get(0, 0), 0.);
        assert_eq!(metric.get(0, 2), 3.);
        assert_eq!(metric.get(2, 0), 3.);
        assert_eq!(metric.diameter(), 3.);
    }
}
