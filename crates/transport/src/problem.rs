use super::density::Density;
use super::metric::Metric;
use emd_core::Energy;

/// A residual transport problem handed to an engine.
///
/// Holds the two (already pre-flowed) histograms, the ground metric, and
/// the exact amount of mass the plan must move:
/// `min(source.mass(), target.mass())`. The mass surplus on the heavier
/// side stays where it is.
#[derive(Debug, Clone, Copy)]
pub struct Problem<'a> {
    source: &'a [Energy],
    target: &'a [Energy],
    metric: &'a Metric,
    mass: Energy,
}

impl<'a> Problem<'a> {
    pub fn source(&self) -> &'a [Energy] {
        self.source
    }
    pub fn target(&self) -> &'a [Energy] {
        self.target
    }
    pub fn metric(&self) -> &'a Metric {
        self.metric
    }
    /// Mass the plan must move.
    pub fn mass(&self) -> Energy {
        self.mass
    }
    /// Number of bins on each side.
    pub fn n(&self) -> usize {
        self.source.len()
    }
}

impl<'a> From<(&'a [Energy], &'a [Energy], &'a Metric)> for Problem<'a> {
    fn from((source, target, metric): (&'a [Energy], &'a [Energy], &'a Metric)) -> Self {
        debug_assert!(source.len() == target.len());
        debug_assert!(source.len() <= metric.n());
        Self {
            source,
            target,
            metric,
            mass: Energy::min(source.mass(), target.mass()),
        }
    }
}
