use emd_core::*;
use emd_transport::*;

/// Same-bin mass cancelled before any optimizer runs.
///
/// Moving mass within a bin costs nothing under a metric, so for every bin
/// the smaller of the two masses flows from `i` to `i` and is removed from
/// both sides. Afterwards every bin is empty on at least one side, and
/// the treatment of same-bin mass no longer depends on the engine.
#[derive(Debug, Clone)]
pub struct Preflow {
    /// First histogram with same-bin mass removed.
    source: Vec<Energy>,
    /// Second histogram with same-bin mass removed.
    target: Vec<Energy>,
    /// Diagonal plan of the cancelled mass.
    flow: Flow,
}

impl Preflow {
    pub fn source(&self) -> &[Energy] {
        &self.source
    }
    pub fn target(&self) -> &[Energy] {
        &self.target
    }
    pub fn flow(&self) -> &Flow {
        &self.flow
    }
    /// True when one side has nothing left: no transport is needed at all.
    pub fn cancelable(&self) -> bool {
        self.source.mass() == 0. || self.target.mass() == 0.
    }
}

impl From<Preflow> for Flow {
    fn from(preflow: Preflow) -> Self {
        preflow.flow
    }
}

impl From<(&[Energy], &[Energy])> for Preflow {
    fn from((first, second): (&[Energy], &[Energy])) -> Self {
        let mut source = first.to_vec();
        let mut target = second.to_vec();
        let mut flow = Flow::zeroes(first.len());
        for (i, (a, b)) in source.iter_mut().zip(target.iter_mut()).enumerate() {
            if *a < *b {
                flow.increment(i, i, *a);
                *b -= *a;
                *a = 0.;
            } else {
                flow.increment(i, i, *b);
                *a -= *b;
                *b = 0.;
            }
        }
        Self {
            source,
            target,
            flow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn cancels_the_smaller_side() {
        let preflow = Preflow::from((&[0., 2., 1., 2.][..], &[2., 1., 2., 1.][..]));
        assert_eq!(preflow.source(), &[0., 1., 0., 1.]);
        assert_eq!(preflow.target(), &[2., 0., 1., 0.]);
        assert_eq!(preflow.flow().total(), 3.);
        assert_eq!(preflow.flow().get(1, 1), 1.);
        assert_eq!(preflow.flow().get(0, 1), 0.);
        assert!(!preflow.cancelable());
    }
    #[test]
    fn nested_mass_is_cancelable() {
        let preflow = Preflow::from((&[0., 1.][..], &[5., 3.][..]));
        assert!(preflow.cancelable());
        assert_eq!(
            Vec::<Vec<Energy>>::from(Flow::from(preflow)),
            vec![vec![0., 0.], vec![0., 1.]]
        );
    }
    #[test]
    fn every_bin_is_empty_on_one_side() {
        let preflow = Preflow::from((&[0.3, 0.0, 0.7, 0.1][..], &[0.1, 0.4, 0.7, 0.2][..]));
        for (a, b) in preflow.source().iter().zip(preflow.target()) {
            assert!(*a == 0. || *b == 0.);
        }
    }
}
