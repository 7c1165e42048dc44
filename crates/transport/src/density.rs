use super::support::Support;
use emd_core::Energy;

/// A discrete, non-negative mass distribution over a support set.
///
/// Provides access to the mass at each point and iteration over the
/// points carrying positive mass. Engines only ever look at the support,
/// so empty bins never reach the optimizer.
///
/// # Required Methods
///
/// - [`density`](Density::density) — Query mass at a point
/// - [`support`](Density::support) — Iterate over points with positive mass
///
/// Masses are assumed non-negative. Nothing here rejects negative entries.
pub trait Density {
    /// The type of elements in the distribution's support.
    type Support: Support;
    /// Returns the mass at point `x`, or 0 if not in support.
    fn density(&self, x: &Self::Support) -> Energy;
    /// Iterates over all points with positive mass.
    fn support(&self) -> impl Iterator<Item = Self::Support>;
    /// Total mass of the distribution.
    fn mass(&self) -> Energy {
        self.support().map(|x| self.density(&x)).sum()
    }
}

impl Density for [Energy] {
    type Support = usize;
    fn density(&self, x: &Self::Support) -> Energy {
        self.get(*x).copied().unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.iter()
            .enumerate()
            .filter(|(_, m)| **m > 0.)
            .map(|(i, _)| i)
    }
    fn mass(&self) -> Energy {
        self.iter().sum()
    }
}

impl Density for Vec<Energy> {
    type Support = usize;
    fn density(&self, x: &Self::Support) -> Energy {
        self.as_slice().density(x)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.as_slice().support()
    }
    fn mass(&self) -> Energy {
        self.as_slice().mass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn support_skips_empty_bins() {
        let ref histogram = vec![0., 2., 0., 0.5];
        assert_eq!(histogram.support().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(histogram.density(&1), 2.);
        assert_eq!(histogram.density(&9), 0.);
        assert_eq!(histogram.mass(), 2.5);
    }
}
