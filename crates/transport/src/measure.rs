use super::support::Support;
use emd_core::Energy;

/// Ground distance between elements of two support spaces.
///
/// Defines the cost of transporting one unit of mass from a bin of the
/// source distribution to a bin of the target distribution. This is the
/// "ground cost" that transport engines minimize over.
///
/// The pipeline's zero-cost preflow relies on `distance(x, x) == 0`.
/// Implementations are trusted to be metrics; nothing verifies symmetry
/// or the triangle inequality.
pub trait Measure {
    /// Source support space.
    type X: Support;
    /// Target support space.
    type Y: Support;
    /// Returns the cost of transporting mass from `x` to `y`.
    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy;
}
