//! Minimum-cost partial transport between histograms.
//!
//! This crate holds the optimizers the Earth Mover's Distance pipeline
//! consumes. The pipeline never looks inside an engine; it only builds a
//! [`Problem`] and asks a [`Solver`] for a [`Flow`].
//!
//! ## Engines
//!
//! - [`Simplex`] — Native transportation simplex (MODI potentials)
//! - [`Linear`] — General-purpose linear program via `minilp`
//!
//! ## Core Types
//!
//! - [`Density`] — A discrete mass distribution (histogram)
//! - [`Measure`] — Ground distance between support points
//! - [`Metric`] — Dense square ground-distance matrix
//! - [`Flow`] — A transport plan
//! - [`Problem`] — Residual histograms plus the mass that must move
//! - [`Support`] — Bin index type of a distribution
mod density;
mod flow;
mod linear;
mod measure;
mod metric;
mod problem;
mod simplex;
mod solver;
mod support;

pub use density::*;
pub use flow::*;
pub use linear::*;
pub use measure::*;
pub use metric::*;
pub use problem::*;
pub use simplex::*;
pub use solver::*;
pub use support::*;
