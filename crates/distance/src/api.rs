use super::backend::Backend;
use super::earthmover::Earthmover;
use super::penalty::Penalty;
use super::samples::Options;
use super::samples::Samples;
use emd_core::*;
use emd_histogram::Sample;
use emd_transport::*;

/// Earth Mover's Distance between two histograms under `metric`.
///
/// Mass that has no counterpart on the other side is charged at `penalty`
/// per unit; pass [`Penalty::Diameter`] (or `-1.0`) to charge it at the
/// largest entry of the matrix.
pub fn emd(
    first: &[Energy],
    second: &[Energy],
    metric: &Metric,
    penalty: impl Into<Penalty>,
    backend: Backend,
) -> Result<Energy, Error> {
    Earthmover::from((first, second, metric))
        .penalty(penalty)
        .backend(backend)
        .distance()
}

/// Like [`emd`], also returning the optimal plan.
///
/// The plan covers only matched mass: its entries sum to
/// `min(first.mass(), second.mass())`.
pub fn emd_with_flow(
    first: &[Energy],
    second: &[Energy],
    metric: &Metric,
    penalty: impl Into<Penalty>,
    backend: Backend,
) -> Result<(Energy, Flow), Error> {
    Earthmover::from((first, second, metric))
        .penalty(penalty)
        .backend(backend)
        .transport()
}

/// Earth Mover's Distance between two raw sample collections, binned into
/// histograms over shared edges.
pub fn emd_samples<A, B>(first: &[A], second: &[B], options: &Options) -> Result<Energy, Error>
where
    A: Sample,
    B: Sample,
{
    Samples::new(first, second, options)?
        .earthmover(options)
        .distance()
}
