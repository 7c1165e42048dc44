use super::backend::Backend;
use super::penalty::Penalty;
use super::preflow::Preflow;
use super::validate::validate;
use emd_core::*;
use emd_transport::*;

/// One Earth Mover's Distance computation between two histograms.
///
/// ```text
/// validate → preflow → (solve residual) → merge flows → charge extra mass
/// ```
///
/// Built from `(first, second, metric)` and configured in place:
///
/// ```ignore
/// let (cost, flow) = Earthmover::from((&first[..], &second[..], &metric))
///     .penalty(1.5)
///     .backend(Backend::Linear)
///     .transport()?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Earthmover<'a> {
    first: &'a [Energy],
    second: &'a [Energy],
    metric: &'a Metric,
    penalty: Penalty,
    backend: Backend,
}

impl<'a> Earthmover<'a> {
    pub fn penalty(mut self, penalty: impl Into<Penalty>) -> Self {
        self.penalty = penalty.into();
        self
    }
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }
    /// Minimum total cost, extra-mass penalty included.
    pub fn distance(&self) -> Result<Energy, Error> {
        self.transport().map(|(cost, _)| cost)
    }
    /// Minimum total cost along with the plan that achieves it.
    pub fn transport(&self) -> Result<(Energy, Flow), Error> {
        self.transport_with(&self.backend)
    }
    /// Same as [`transport`](Self::transport), with an explicit engine in
    /// place of the configured backend.
    pub fn transport_with<S>(&self, solver: &S) -> Result<(Energy, Flow), Error>
    where
        S: Solver,
    {
        validate(self.first, self.second, self.metric)?;
        let extra = (self.first.mass() - self.second.mass()).abs();
        let surcharge = extra * self.penalty.resolve(self.metric);
        let preflow = Preflow::from((self.first, self.second));
        if preflow.cancelable() {
            log::debug!("no residual mass; extra mass {:.6}", extra);
            return Ok((surcharge, Flow::from(preflow)));
        }
        let ref problem = Problem::from((preflow.source(), preflow.target(), self.metric));
        log::debug!(
            "solving {} bins, residual mass {:.6}, extra mass {:.6}",
            problem.n(),
            problem.mass(),
            extra
        );
        let partial = solver.solve(problem)?;
        let cost = partial.cost(self.metric) + surcharge;
        let flow = Flow::from(preflow) + &partial;
        Ok((cost, flow))
    }
}

impl<'a> From<(&'a [Energy], &'a [Energy], &'a Metric)> for Earthmover<'a> {
    fn from((first, second, metric): (&'a [Energy], &'a [Energy], &'a Metric)) -> Self {
        Self {
            first,
            second,
            metric,
            penalty: Penalty::default(),
            backend: Backend::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine that must never be reached.
    struct Unreachable;
    impl Solver for Unreachable {
        fn solve(&self, _: &Problem) -> Result<Flow, Error> {
            panic!("solver invoked on a cancelable problem")
        }
    }

    /// Engine that fails unconditionally.
    struct Failing;
    impl Solver for Failing {
        fn solve(&self, _: &Problem) -> Result<Flow, Error> {
            Err(Error::Solver("no feasible plan".to_string()))
        }
    }

    /// Engine that moves the residual mass from the first positive source
    /// bin to the first positive target bin, whatever it costs.
    struct Naive;
    impl Solver for Naive {
        fn solve(&self, problem: &Problem) -> Result<Flow, Error> {
            let mut flow = Flow::zeroes(problem.n());
            let i = problem.source().support().next().unwrap_or(0);
            let j = problem.target().support().next().unwrap_or(0);
            flow.increment(i, j, problem.mass());
            Ok(flow)
        }
    }

    #[test]
    fn nested_histograms_skip_the_solver() {
        let ref metric = Metric::euclidean(&[0., 1.]);
        let (cost, flow) = Earthmover::from((&[0., 1.][..], &[5., 3.][..], metric))
            .transport_with(&Unreachable)
            .unwrap();
        assert_eq!(cost, 7.);
        assert_eq!(flow.total(), 1.);
    }

    #[test]
    fn validation_precedes_the_solver() {
        let ref metric = Metric::euclidean(&[0., 1.]);
        let result =
            Earthmover::from((&[0., 1., 2.][..], &[5., 3., 3.][..], metric)).transport_with(&Failing);
        assert!(matches!(result, Err(Error::ShapeMismatch(_))));
    }

    #[test]
    fn solver_errors_propagate() {
        let ref metric = Metric::euclidean(&[0., 1.]);
        let result =
            Earthmover::from((&[1., 0.][..], &[0., 1.][..], metric)).transport_with(&Failing);
        assert_eq!(result, Err(Error::Solver("no feasible plan".to_string())));
    }

    #[test]
    fn merges_preflow_with_residual_plan() {
        let ref metric = Metric::euclidean(&[0., 1., 2.]);
        let (cost, flow) = Earthmover::from((&[1., 1., 0.][..], &[0., 1., 2.][..], metric))
            .penalty(10.)
            .transport_with(&Naive)
            .unwrap();
        assert_eq!(flow.get(1, 1), 1.);
        assert_eq!(flow.get(0, 2), 1.);
        assert_eq!(flow.total(), 2.);
        assert_eq!(cost, 2. + 10.);
    }
}
