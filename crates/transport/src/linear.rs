use super::density::Density;
use super::flow::Flow;
use super::measure::Measure;
use super::problem::Problem;
use super::solver::Solver;
use emd_core::*;

/// Partial transport as a general-purpose linear program.
///
/// # Formulation
///
/// One variable `x(i, j) ≥ 0` per pair of positive source and target bins,
/// weighted by the ground distance, subject to
///
/// - `Σ_j x(i, j) ≤ source(i)` for every source bin
/// - `Σ_i x(i, j) ≤ target(j)` for every target bin
/// - `Σ x(i, j) = mass`
///
/// and handed to `minilp`. Slower than [`Simplex`](crate::Simplex) on
/// large supports, but shares no code with it, which makes the two
/// engines useful cross-checks of each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Solver for Linear {
    fn solve(&self, problem: &Problem) -> Result<Flow, Error> {
        let mut flow = Flow::zeroes(problem.n());
        if problem.mass() <= 0. {
            return Ok(flow);
        }
        let source = problem.source();
        let target = problem.target();
        let metric = problem.metric();
        let rows = source.support().collect::<Vec<_>>();
        let cols = target.support().collect::<Vec<_>>();
        let mut lp = minilp::Problem::new(minilp::OptimizationDirection::Minimize);
        let vars = rows
            .iter()
            .flat_map(|i| cols.iter().map(move |j| (*i, *j)))
            .map(|(i, j)| (i, j, lp.add_var(metric.distance(&i, &j), (0., Energy::INFINITY))))
            .collect::<Vec<_>>();
        for (r, i) in rows.iter().enumerate() {
            let mut expr = minilp::LinearExpr::empty();
            for (_, _, var) in vars.iter().skip(r * cols.len()).take(cols.len()) {
                expr.add(*var, 1.);
            }
            lp.add_constraint(expr, minilp::ComparisonOp::Le, source.density(i));
        }
        for (c, j) in cols.iter().enumerate() {
            let mut expr = minilp::LinearExpr::empty();
            for (_, _, var) in vars.iter().skip(c).step_by(cols.len()) {
                expr.add(*var, 1.);
            }
            lp.add_constraint(expr, minilp::ComparisonOp::Le, target.density(j));
        }
        let mut total = minilp::LinearExpr::empty();
        for (_, _, var) in vars.iter() {
            total.add(*var, 1.);
        }
        lp.add_constraint(total, minilp::ComparisonOp::Eq, problem.mass());
        let solution = lp.solve().map_err(|e| Error::Solver(e.to_string()))?;
        log::trace!("linear program optimal at {:.6}", solution.objective());
        for (i, j, var) in vars {
            let mass = solution[var].max(0.);
            if mass > 0. {
                flow.increment(i, j, mass);
            }
        }
        Ok(flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Metric;
    use crate::Simplex;

    #[test]
    fn moves_exactly_the_lighter_mass() {
        let ref metric = Metric::euclidean(&[0., 1., 2., 3.]);
        let source = [2., 0., 0., 0.];
        let target = [0., 0., 0.5, 0.5];
        let problem = Problem::from((&source[..], &target[..], metric));
        let flow = Linear.solve(&problem).unwrap();
        assert!((flow.total() - 1.).abs() < 1e-9);
        assert!((flow.cost(metric) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn agrees_with_simplex() {
        let ref metric = Metric::euclidean(&[0.5, 1.5, 2.5, 3.5, 4.5]);
        let source = [0.3, 0., 0.2, 0., 0.4];
        let target = [0., 0.5, 0., 0.35, 0.];
        let problem = Problem::from((&source[..], &target[..], metric));
        let lp = Linear.solve(&problem).unwrap().cost(metric);
        let simplex = Simplex.solve(&problem).unwrap().cost(metric);
        assert!((lp - simplex).abs() <= 1e-5 * simplex.abs().max(1.));
    }
}
