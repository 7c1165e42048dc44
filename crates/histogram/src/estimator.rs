//! Bin-width estimators over a sample collection.
//!
//! Each estimator returns a width. Zero means "no opinion", in which case
//! the caller falls back to a single bin.
use super::edges::Edges;
use super::histogram::Histogram;
use emd_core::*;

/// Peak-to-peak spread.
pub fn ptp(x: &[Energy]) -> Energy {
    let lo = x.iter().copied().fold(Energy::INFINITY, Energy::min);
    let hi = x.iter().copied().fold(Energy::NEG_INFINITY, Energy::max);
    hi - lo
}

pub fn mean(x: &[Energy]) -> Energy {
    x.iter().sum::<Energy>() / x.len() as Energy
}

/// Population standard deviation.
pub fn std(x: &[Energy]) -> Energy {
    let mu = mean(x);
    (x.iter().map(|v| (v - mu) * (v - mu)).sum::<Energy>() / x.len() as Energy).sqrt()
}

/// Linearly interpolated percentile, `q` in [0, 100].
///
/// # Panics
///
/// On an empty slice.
pub fn percentile(x: &[Energy], q: Energy) -> Energy {
    assert!(!x.is_empty(), "percentile of an empty slice");
    let mut sorted = x.to_vec();
    sorted.sort_by(Energy::total_cmp);
    let position = q / 100. * (sorted.len() - 1) as Energy;
    let lo = position.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let t = position - lo as Energy;
    let (a, b) = (sorted[lo], sorted[hi]);
    match t >= 0.5 {
        true => b - (b - a) * (1. - t),
        false => a + (b - a) * t,
    }
}

pub fn sqrt(x: &[Energy]) -> Energy {
    ptp(x) / (x.len() as Energy).sqrt()
}

pub fn sturges(x: &[Energy]) -> Energy {
    ptp(x) / ((x.len() as Energy).log2() + 1.)
}

pub fn rice(x: &[Energy]) -> Energy {
    ptp(x) / (2. * (x.len() as Energy).cbrt())
}

pub fn scott(x: &[Energy]) -> Energy {
    (24. * std::f64::consts::PI.sqrt() / x.len() as Energy).cbrt() * std(x)
}

/// Freedman–Diaconis: twice the interquartile range over the cube root of n.
pub fn fd(x: &[Energy]) -> Energy {
    let iqr = percentile(x, 75.) - percentile(x, 25.);
    2. * iqr * (x.len() as Energy).powf(-1. / 3.)
}

/// Sturges corrected for skewness.
pub fn doane(x: &[Energy]) -> Energy {
    let n = x.len() as Energy;
    if x.len() <= 2 {
        return 0.;
    }
    let sigma = std(x);
    if sigma <= 0. {
        return 0.;
    }
    let mu = mean(x);
    let sg1 = (6. * (n - 2.) / ((n + 1.) * (n + 3.))).sqrt();
    let g1 = x.iter().map(|v| ((v - mu) / sigma).powi(3)).sum::<Energy>() / n;
    ptp(x) / (1. + n.log2() + (1. + g1.abs() / sg1).log2())
}

/// Minimizes the leave-one-out cross-validation estimate of the integrated
/// squared error over bin counts `1..=max(STONE_BINS, √n)`.
pub fn stone(x: &[Energy], range: (Energy, Energy)) -> Energy {
    let n = x.len();
    let spread = ptp(x);
    if n <= 1 || spread == 0. {
        return 0.;
    }
    let upper = STONE_BINS.max((n as Energy).sqrt() as usize);
    let risk = |k: usize| {
        let width = spread / k as Energy;
        let histogram = Histogram::from((x, &Edges::uniform(range, k)));
        let squares = histogram
            .counts()
            .iter()
            .map(|c| c / n as Energy)
            .map(|p| p * p)
            .sum::<Energy>();
        (2. - (n + 1) as Energy * squares) / width
    };
    let best = (1..=upper)
        .map(|k| (k, risk(k)))
        .fold((1, Energy::INFINITY), |best, next| match next.1 < best.1 {
            true => next,
            false => best,
        })
        .0;
    if best == upper {
        log::warn!("stone estimator hit its upper bound of {} bins", upper);
    }
    spread / best as Energy
}

/// The smaller of Freedman–Diaconis and Sturges, or Sturges alone when the
/// interquartile range collapses.
pub fn auto(x: &[Energy]) -> Energy {
    let fd = fd(x);
    let sturges = sturges(x);
    match fd > 0. {
        true => fd.min(sturges),
        false => sturges,
    }
}
