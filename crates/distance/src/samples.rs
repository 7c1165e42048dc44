use super::backend::Backend;
use super::earthmover::Earthmover;
use super::penalty::Penalty;
use emd_core::*;
use emd_histogram::*;
use emd_transport::*;

/// Settings for comparing two raw sample collections.
///
/// Defaults: diameter penalty, euclidean distance, normalized histograms,
/// automatic bins over the span of both collections, simplex engine.
#[derive(Debug)]
pub struct Options {
    pub penalty: Penalty,
    pub distance: Distance,
    pub normalized: bool,
    pub bins: Bins,
    pub range: Option<(Energy, Energy)>,
    pub backend: Backend,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            penalty: Penalty::default(),
            distance: Distance::default(),
            normalized: true,
            bins: Bins::default(),
            range: None,
            backend: Backend::default(),
        }
    }
}

impl Options {
    pub fn penalty(mut self, penalty: impl Into<Penalty>) -> Self {
        self.penalty = penalty.into();
        self
    }
    pub fn distance(mut self, distance: Distance) -> Self {
        self.distance = distance;
        self
    }
    /// Compare fractions of each collection instead of raw counts.
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }
    pub fn bins(mut self, bins: Bins) -> Self {
        self.bins = bins;
        self
    }
    pub fn range(mut self, range: (Energy, Energy)) -> Self {
        self.range = Some(range);
        self
    }
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }
}

/// Two sample collections binned over shared edges, with the ground
/// distance between bin centers.
#[derive(Debug, Clone)]
pub struct Samples {
    first: Histogram,
    second: Histogram,
    edges: Edges,
    metric: Metric,
}

impl Samples {
    pub fn new<A, B>(first: &[A], second: &[B], options: &Options) -> Result<Self, Error>
    where
        A: Sample,
        B: Sample,
    {
        if first.is_empty() || second.is_empty() {
            return Err(Error::EmptyInput);
        }
        let ref first = values(first);
        let ref second = values(second);
        let ref union = first.iter().chain(second.iter()).copied().collect::<Vec<_>>();
        let range = Edges::outer(union, options.range)?;
        let edges = options.bins.edges(union, range)?;
        let first = Histogram::from((first.as_slice(), &edges));
        let second = Histogram::from((second.as_slice(), &edges));
        let (first, second) = match options.normalized {
            true => (first.normalize(), second.normalize()),
            false => (first, second),
        };
        let metric = options.distance.metric(&edges.centers())?;
        log::debug!("binned samples into {} bins over {:?}", edges.n(), range);
        Ok(Self {
            first,
            second,
            edges,
            metric,
        })
    }
    pub fn first(&self) -> &Histogram {
        &self.first
    }
    pub fn second(&self) -> &Histogram {
        &self.second
    }
    pub fn edges(&self) -> &Edges {
        &self.edges
    }
    pub fn metric(&self) -> &Metric {
        &self.metric
    }
    /// The histogram comparison, configured with the penalty and backend
    /// of `options`.
    pub fn earthmover(&self, options: &Options) -> Earthmover<'_> {
        Earthmover::from((self.first.counts(), self.second.counts(), &self.metric))
            .penalty(options.penalty)
            .backend(options.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn shares_edges_between_collections() {
        let options = Options::default().bins(Bins::Count(4));
        let samples = Samples::new(&[1, 2, 3, 4], &[2, 3, 4, 5], &options).unwrap();
        assert_eq!(samples.edges().edges(), &[1., 2., 3., 4., 5.]);
        assert_eq!(samples.first().counts(), &[0.25, 0.25, 0.25, 0.25]);
        assert_eq!(samples.second().counts(), &[0., 0.25, 0.25, 0.5]);
        assert_eq!(samples.metric().get(0, 3), 3.);
    }
    #[test]
    fn raw_counts_when_not_normalized() {
        let options = Options::default().bins(Bins::Count(2)).normalized(false);
        let samples = Samples::new(&[0., 0., 1.], &[1.], &options).unwrap();
        assert_eq!(samples.first().counts(), &[2., 1.]);
        assert_eq!(samples.second().counts(), &[0., 1.]);
    }
    #[test]
    fn empty_collections_are_rejected() {
        let options = Options::default();
        assert_eq!(
            Samples::new::<f64, f64>(&[], &[1.], &options).err(),
            Some(Error::EmptyInput)
        );
        assert_eq!(
            Samples::new::<i32, i32>(&[1], &[], &options).err(),
            Some(Error::EmptyInput)
        );
    }
}
