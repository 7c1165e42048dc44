//! Earth Mover's Distance between histograms and sample collections.
//!
//! This facade crate re-exports all public emd crates for convenient access.
//! The top-level functions come from [`distance`].
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, errors, and shared traits
//! - [`transport`] — Partial transport engines and plans
//! - [`histogram`] — Binning of raw sample collections
//! - [`distance`] — The EMD pipeline: preflow, penalty, backend dispatch
//!
//! ## Example
//!
//! ```ignore
//! use emd::*;
//! let metric = Metric::try_from(vec![vec![0., 0.5], vec![0.5, 0.]])?;
//! let cost = emd(&[0., 1.], &[5., 3.], &metric, Penalty::default(), Backend::default())?;
//! assert_eq!(cost, 3.5);
//! ```

pub use emd_core        as core;
pub use emd_transport   as transport;
pub use emd_histogram   as histogram;
pub use emd_distance    as distance;

pub use emd_core::Energy;
pub use emd_core::Error;
pub use emd_distance::*;
pub use emd_histogram::Bins;
pub use emd_histogram::Distance;
pub use emd_transport::Flow;
pub use emd_transport::Metric;
