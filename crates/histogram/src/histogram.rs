use super::edges::Edges;
use emd_core::*;
use emd_transport::*;

/// Dense per-bin mass of one sample collection over shared [`Edges`].
///
/// Starts out as raw counts; [`normalize`](Histogram::normalize) turns it
/// into fractions of the collection so that collections of different sizes
/// compare on equal footing.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<Energy>,
}

impl Histogram {
    /// A histogram of `n` empty bins.
    pub fn empty(n: usize) -> Self {
        Self {
            counts: vec![0.; n],
        }
    }
    /// Number of bins.
    pub fn n(&self) -> usize {
        self.counts.len()
    }
    /// Per-bin mass.
    pub fn counts(&self) -> &[Energy] {
        &self.counts
    }
    /// insert one observation into the bin,
    /// incrementing its local weight.
    pub fn increment(mut self, bin: usize) -> Self {
        self.counts[bin] += 1.;
        self
    }
    /// Divide every bin by the total mass. A histogram with no mass is
    /// left as is.
    pub fn normalize(mut self) -> Self {
        let mass = self.counts.iter().sum::<Energy>();
        if mass > 0. {
            self.counts.iter_mut().for_each(|c| *c /= mass);
        }
        self
    }
}

impl From<(&[Energy], &Edges)> for Histogram {
    fn from((samples, edges): (&[Energy], &Edges)) -> Self {
        samples
            .iter()
            .filter_map(|v| edges.index(*v))
            .fold(Histogram::empty(edges.n()), Histogram::increment)
    }
}

impl Density for Histogram {
    type Support = usize;
    fn density(&self, x: &Self::Support) -> Energy {
        self.counts.density(x)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.counts.support()
    }
    fn mass(&self) -> Energy {
        self.counts.mass()
    }
}

impl std::fmt::Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1. scale each bin against the tallest one
        let peak = self.counts.iter().copied().fold(0., Energy::max);
        let ref bins = self
            .counts
            .iter()
            .map(|c| if peak > 0. { c / peak } else { 0. })
            .collect::<Vec<_>>();
        // 2. print one column per bin
        writeln!(f)?;
        let n_y_bins = 10;
        for y in (1..=n_y_bins).rev() {
            let level = y as Energy / n_y_bins as Energy;
            let step = 1. / n_y_bins as Energy;
            for bin in bins.iter().copied() {
                if bin >= level {
                    write!(f, "█")?;
                } else if bin >= level - 0.75 * step {
                    write!(f, "▆")?;
                } else if bin >= level - 0.50 * step {
                    write!(f, "▄")?;
                } else if bin >= level - 0.25 * step {
                    write!(f, "▂")?;
                } else {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        // 3. x-axis
        for _ in 0..bins.len() {
            write!(f, "-")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn counts_against_shared_edges() {
        let ref edges = Edges::uniform((1., 5.), 4);
        let first = Histogram::from((&[1., 2., 3., 4.][..], edges));
        let second = Histogram::from((&[2., 3., 4., 5.][..], edges));
        assert_eq!(first.counts(), &[1., 1., 1., 1.]);
        assert_eq!(second.counts(), &[0., 1., 1., 2.]);
    }
    #[test]
    fn normalized_mass_is_one() {
        let ref edges = Edges::uniform((0., 1.), 3);
        let histogram = Histogram::from((&[0., 0.1, 0.5, 0.9, 1.][..], edges)).normalize();
        assert!((histogram.mass() - 1.).abs() < 1e-12);
        assert_eq!(histogram.support().count(), 3);
    }
    #[test]
    fn out_of_range_samples_are_dropped() {
        let ref edges = Edges::uniform((0., 1.), 2);
        let histogram = Histogram::from((&[-1., 0.25, 2.][..], edges));
        assert_eq!(histogram.mass(), 1.);
        assert_eq!(Histogram::empty(2).normalize().mass(), 0.);
    }
    #[test]
    fn renders_one_column_per_bin() {
        let histogram = Histogram::from((&[0.1, 0.6, 0.7][..], &Edges::uniform((0., 1.), 2)));
        let plot = histogram.to_string();
        assert!(plot.ends_with("--"));
        assert_eq!(plot.lines().count(), 12);
    }
}
