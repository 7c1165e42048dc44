use emd_core::*;

/// Monotone bin edges shared by two histograms.
///
/// `n` bins are delimited by `n + 1` edges. Bin `k` holds values in
/// `[edges[k], edges[k + 1])`, except the last bin, which also holds its
/// upper edge. Values outside `[edges[0], edges[n]]` fall in no bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Edges(Vec<Energy>);

impl Edges {
    /// `n` equal-width bins spanning `range`. The last edge is exactly the
    /// upper end of the range.
    pub fn uniform((lo, hi): (Energy, Energy), n: usize) -> Self {
        let step = (hi - lo) / n as Energy;
        Self(
            (0..=n)
                .map(|k| match k == n {
                    true => hi,
                    false => lo + k as Energy * step,
                })
                .collect(),
        )
    }
    /// The range to bin over: the caller's, or the span of the samples.
    ///
    /// A zero-width range is widened by [`DEGENERATE_RANGE`] on both sides.
    pub fn outer(samples: &[Energy], range: Option<(Energy, Energy)>) -> Result<(Energy, Energy), Error> {
        let (lo, hi) = match range {
            Some((lo, hi)) if lo > hi => {
                return Err(Error::InvalidRange(
                    "max must be larger than min in range parameter".into(),
                ));
            }
            Some((lo, hi)) if !(lo.is_finite() && hi.is_finite()) => {
                return Err(Error::InvalidRange(format!(
                    "supplied range of [{}, {}] is not finite",
                    lo, hi
                )));
            }
            Some(range) => range,
            None => {
                let lo = samples.iter().copied().fold(Energy::INFINITY, Energy::min);
                let hi = samples.iter().copied().fold(Energy::NEG_INFINITY, Energy::max);
                if !(lo.is_finite() && hi.is_finite()) || samples.iter().any(|v| v.is_nan()) {
                    return Err(Error::InvalidRange(format!(
                        "autodetected range of [{}, {}] is not finite",
                        lo, hi
                    )));
                }
                (lo, hi)
            }
        };
        match lo == hi {
            true => Ok((lo - DEGENERATE_RANGE, hi + DEGENERATE_RANGE)),
            false => Ok((lo, hi)),
        }
    }
    /// Number of bins.
    pub fn n(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
    pub fn lo(&self) -> Energy {
        self.0[0]
    }
    pub fn hi(&self) -> Energy {
        self.0[self.n()]
    }
    pub fn edges(&self) -> &[Energy] {
        &self.0
    }
    /// Bin holding `value`, if any.
    pub fn index(&self, value: Energy) -> Option<usize> {
        if self.n() == 0 || !(value >= self.lo() && value <= self.hi()) {
            return None;
        }
        let k = self.0.partition_point(|edge| *edge <= value);
        Some((k - 1).min(self.n() - 1))
    }
    /// Midpoint of every bin.
    pub fn centers(&self) -> Vec<Energy> {
        self.0.windows(2).map(|w| (w[0] + w[1]) / 2.).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn uniform_edges_and_centers() {
        let edges = Edges::uniform((1., 5.), 4);
        assert_eq!(edges.edges(), &[1., 2., 3., 4., 5.]);
        assert_eq!(edges.centers(), vec![1.5, 2.5, 3.5, 4.5]);
    }
    #[test]
    fn last_bin_is_closed() {
        let edges = Edges::uniform((1., 5.), 4);
        assert_eq!(edges.index(1.), Some(0));
        assert_eq!(edges.index(2.), Some(1));
        assert_eq!(edges.index(4.999), Some(3));
        assert_eq!(edges.index(5.), Some(3));
        assert_eq!(edges.index(5.001), None);
        assert_eq!(edges.index(0.999), None);
    }
    #[test]
    fn outer_range_rules() {
        assert_eq!(Edges::outer(&[3., 1., 2.], None), Ok((1., 3.)));
        assert_eq!(Edges::outer(&[2., 2.], None), Ok((1.5, 2.5)));
        assert_eq!(Edges::outer(&[2.], Some((0., 10.))), Ok((0., 10.)));
        assert!(matches!(
            Edges::outer(&[2.], Some((3., 1.))),
            Err(Error::InvalidRange(_))
        ));
        assert!(matches!(
            Edges::outer(&[Energy::NAN, 1.], None),
            Err(Error::InvalidRange(_))
        ));
    }
}
