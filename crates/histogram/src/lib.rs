//! Histograms from raw sample collections.
//!
//! Two collections of scalar observations become comparable mass
//! distributions by binning both over the same edges. The edges come from
//! a [`Bins`] rule applied to the union of the collections, and the ground
//! distance comes from a [`Distance`] over the bin centers.
//!
//! ## Core Types
//!
//! - [`Sample`] — Numeric observation, widened to floating point
//! - [`Bins`] — Bin count or width estimator
//! - [`Edges`] — Shared bin boundaries
//! - [`Histogram`] — Per-bin mass of one collection
//! - [`Distance`] — Bin centers to ground-distance matrix
mod bins;
mod distance;
mod edges;
mod histogram;
mod sample;

pub mod estimator;

pub use bins::*;
pub use distance::*;
pub use edges::*;
pub use histogram::*;
pub use sample::*;
