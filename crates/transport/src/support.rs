/// Marker trait for types that index the bins of a mass distribution.
///
/// Histograms in this workspace are dense, so their support is a bin
/// index. The `Copy` bound lets engines pass indices around freely while
/// building transport plans.
pub trait Support: Copy {}

impl Support for usize {}
