use emd_core::*;
use emd_transport::*;

/// Price per unit of mass that cannot be matched between the histograms.
///
/// Extra mass never appears in the flow. It is charged once, as a scalar:
/// `|first.mass() - second.mass()| × penalty`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Penalty {
    /// The largest entry of the distance matrix.
    #[default]
    Diameter,
    /// A caller-chosen price.
    Fixed(Energy),
}

impl Penalty {
    /// The concrete price under this distance matrix.
    pub fn resolve(&self, metric: &Metric) -> Energy {
        match self {
            Self::Diameter => metric.diameter(),
            Self::Fixed(price) => *price,
        }
    }
}

/// [`DEFAULT_EXTRA_MASS_PENALTY`] reads as [`Penalty::Diameter`]; any other
/// value is taken literally.
impl From<Energy> for Penalty {
    fn from(price: Energy) -> Self {
        if price == DEFAULT_EXTRA_MASS_PENALTY {
            Self::Diameter
        } else {
            Self::Fixed(price)
        }
    }
}

impl From<Option<Energy>> for Penalty {
    fn from(price: Option<Energy>) -> Self {
        price.map(Self::from).unwrap_or_default()
    }
}

impl std::fmt::Display for Penalty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Diameter => write!(f, "diameter"),
            Self::Fixed(price) => write!(f, "{}", price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn sentinel_means_diameter() {
        assert_eq!(Penalty::from(-1.), Penalty::Diameter);
        assert_eq!(Penalty::from(None), Penalty::Diameter);
        assert_eq!(Penalty::from(2.5), Penalty::Fixed(2.5));
        assert_eq!(Penalty::from(0.), Penalty::Fixed(0.));
    }
    #[test]
    fn diameter_is_largest_entry() {
        let ref metric = Metric::euclidean(&[0., 1., 4.]);
        assert_eq!(Penalty::Diameter.resolve(metric), 4.);
        assert_eq!(Penalty::Fixed(0.5).resolve(metric), 0.5);
        assert_eq!(Penalty::Diameter.resolve(&Metric::zeroes(3)), 0.);
    }
}
