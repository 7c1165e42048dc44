use super::flow::Flow;
use super::problem::Problem;
use emd_core::Error;

/// Minimum-cost partial transport engine.
///
/// # Contract
///
/// Given a [`Problem`], return an n×n [`Flow`] of non-negative entries
/// whose total equals [`Problem::mass`], moving that mass at minimum total
/// ground cost. Row sums stay within the source masses and column sums
/// within the target masses.
///
/// Callers treat the returned plan as authoritative and never re-check
/// optimality. Engine failures are reported as [`Error::Solver`].
pub trait Solver {
    fn solve(&self, problem: &Problem) -> Result<Flow, Error>;
}
