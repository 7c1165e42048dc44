use super::measure::Measure;
use emd_core::Energy;

/// A transport plan between two histograms of equal length.
///
/// Entry `(i, j)` is the mass moved from bin `i` of the source to bin `j`
/// of the target. Row sums never exceed the source bin masses and column
/// sums never exceed the target bin masses. When the two histograms carry
/// different total mass the surplus does not appear anywhere in the plan;
/// it is only ever charged as a scalar penalty.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(into = "Vec<Vec<Energy>>")]
pub struct Flow {
    /// Number of bins on each side.
    n: usize,
    /// Row-major transported mass.
    mass: Vec<Energy>,
}

impl Flow {
    /// An empty plan over n bins.
    pub fn zeroes(n: usize) -> Self {
        Self {
            n,
            mass: vec![0.; n * n],
        }
    }
    /// Number of bins on each side.
    pub fn n(&self) -> usize {
        self.n
    }
    /// Mass moved from `i` to `j`.
    pub fn get(&self, i: usize, j: usize) -> Energy {
        self.mass[i * self.n + j]
    }
    /// Adds `mass` to the `(i, j)` entry.
    pub fn increment(&mut self, i: usize, j: usize, mass: Energy) {
        self.mass[i * self.n + j] += mass;
    }
    /// Total transported mass.
    pub fn total(&self) -> Energy {
        self.mass.iter().sum()
    }
    /// Mass leaving source bin `i`.
    pub fn outflow(&self, i: usize) -> Energy {
        (0..self.n).map(|j| self.get(i, j)).sum()
    }
    /// Mass arriving at target bin `j`.
    pub fn inflow(&self, j: usize) -> Energy {
        (0..self.n).map(|i| self.get(i, j)).sum()
    }
    /// Σ flow(i, j) · distance(i, j) over the plan.
    ///
    /// # Panics
    ///
    /// When `measure` is a [`Metric`](crate::Metric) with fewer than `n`
    /// rows: out of bounds, or on the index assertion in debug builds.
    pub fn cost<M>(&self, measure: &M) -> Energy
    where
        M: Measure<X = usize, Y = usize>,
    {
        (0..self.n)
            .flat_map(|i| (0..self.n).map(move |j| (i, j)))
            .map(|(i, j)| self.get(i, j) * measure.distance(&i, &j))
            .inspect(|c| debug_assert!(c.is_finite()))
            .sum()
    }
    /// Iterates over plan rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Energy]> + '_ {
        self.mass.chunks(self.n.max(1)).take(self.n)
    }
}

impl std::ops::AddAssign<&Flow> for Flow {
    fn add_assign(&mut self, other: &Flow) {
        debug_assert!(self.n == other.n, "mismatched flow dimensions");
        self.mass
            .iter_mut()
            .zip(other.mass.iter())
            .for_each(|(a, b)| *a += b);
    }
}

impl std::ops::Add<&Flow> for Flow {
    type Output = Flow;
    fn add(mut self, other: &Flow) -> Self::Output {
        self += other;
        self
    }
}

impl From<Flow> for Vec<Vec<Energy>> {
    fn from(flow: Flow) -> Self {
        flow.rows().map(|row| row.to_vec()).collect()
    }
}
