//! Earth Mover's Distance between histograms and sample collections.
//!
//! Every computation runs the same pipeline:
//!
//! 1. [`validate`] the shapes of the histograms against the matrix
//! 2. [`Preflow`] cancels same-bin mass at zero cost
//! 3. a [`Backend`] solves the residual partial transport
//! 4. the two plans merge, and extra mass is charged at the [`Penalty`]
//!
//! [`emd_samples`] first bins two raw collections through [`Samples`].
mod api;
mod backend;
mod earthmover;
mod penalty;
mod preflow;
mod samples;
mod validate;

pub use api::*;
pub use backend::*;
pub use earthmover::*;
pub use penalty::*;
pub use preflow::*;
pub use samples::*;
pub use validate::*;
