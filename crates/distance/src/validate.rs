use emd_core::*;
use emd_transport::*;

/// Shape checks that run before anything else touches the inputs.
///
/// Both histograms must fit inside the distance matrix, and they must have
/// the same number of bins. Nothing about the matrix entries is checked.
pub fn validate(first: &[Energy], second: &[Energy], metric: &Metric) -> Result<(), Error> {
    if first.len() > metric.n() || second.len() > metric.n() {
        return Err(Error::ShapeMismatch(format!(
            "histogram lengths ({}, {}) cannot be greater than the number of rows or columns \
             of the distance matrix ({})",
            first.len(),
            second.len(),
            metric.n()
        )));
    }
    if first.len() != second.len() {
        return Err(Error::ShapeMismatch(format!(
            "histogram lengths must be equal ({} != {})",
            first.len(),
            second.len()
        )));
    }
    Ok(())
}
