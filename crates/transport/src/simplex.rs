use super::density::Density;
use super::flow::Flow;
use super::measure::Measure;
use super::problem::Problem;
use super::solver::Solver;
use emd_core::*;

/// Exact partial transport via the transportation simplex method.
///
/// # Algorithm
///
/// 1. Keep only bins with positive mass: source bins become rows, target
///    bins become columns
/// 2. Balance the problem with a zero-cost dummy column (source heavier)
///    or dummy row (target heavier) holding the surplus
/// 3. Seed a basic feasible plan with the north-west corner rule
/// 4. Solve dual potentials `u + v = c` over the basis tree and price
///    every non-basic cell
/// 5. Pivot the most negative reduced cost into the basis along its tree
///    cycle; repeat until no reduced cost is negative
///
/// Degenerate pivots are common after the same-bin preflow. After a run
/// of them longer than the basis, pricing switches to Bland's rule, which
/// cannot cycle.
///
/// # Complexity
///
/// O(rows × cols) per pivot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simplex;

impl Solver for Simplex {
    fn solve(&self, problem: &Problem) -> Result<Flow, Error> {
        if problem.mass() <= 0. {
            return Ok(Flow::zeroes(problem.n()));
        }
        Tableau::from(problem).optimize().map(|t| t.flow(problem.n()))
    }
}

/// A node of the basis tree: either a row or a column of the tableau.
#[derive(Debug, Clone, Copy)]
enum Node {
    Row(usize),
    Col(usize),
}

/// Dense transportation tableau over the support of a [`Problem`].
struct Tableau {
    /// Source bin behind each row. `None` is the dummy row.
    rows: Vec<Option<usize>>,
    /// Target bin behind each column. `None` is the dummy column.
    cols: Vec<Option<usize>>,
    supply: Vec<Energy>,
    demand: Vec<Energy>,
    /// Row-major ground costs.
    cost: Vec<Energy>,
    /// Row-major plan.
    plan: Vec<Energy>,
    /// Row-major basis membership.
    basic: Vec<bool>,
    /// Largest ground cost, scales the optimality tolerance.
    scale: Energy,
}

impl Tableau {
    fn height(&self) -> usize {
        self.rows.len()
    }
    fn width(&self) -> usize {
        self.cols.len()
    }
    fn cell(&self, r: usize, c: usize) -> usize {
        r * self.width() + c
    }
    fn coordinates(&self, cell: usize) -> (usize, usize) {
        (cell / self.width(), cell % self.width())
    }

    /// Runs simplex pivots until the plan is optimal.
    fn optimize(mut self) -> Result<Self, Error> {
        self.corner();
        let limit = SIMPLEX_ITERATIONS * self.plan.len().max(1);
        let mut stall = 0;
        for pivots in 0..limit {
            let (u, v) = self.potentials()?;
            let bland = stall > self.height() + self.width();
            match self.entering(&u, &v, bland) {
                None => {
                    log::trace!("simplex optimal after {} pivots", pivots);
                    return Ok(self);
                }
                Some(cell) => match self.pivot(cell)? > 0. {
                    true => stall = 0,
                    false => stall += 1,
                },
            }
        }
        Err(Error::Solver(format!(
            "transportation simplex did not converge within {} pivots",
            limit
        )))
    }

    /// North-west corner rule.
    ///
    /// Every step advances exactly one row or one column, so the seed basis
    /// has rows + cols - 1 cells and spans every row and column, zero
    /// allocations included.
    fn corner(&mut self) {
        let ref mut supply = self.supply.clone();
        let ref mut demand = self.demand.clone();
        let (h, w) = (self.height(), self.width());
        let (mut r, mut c) = (0, 0);
        loop {
            let cell = self.cell(r, c);
            let mass = Energy::min(supply[r], demand[c]).max(0.);
            self.plan[cell] = mass;
            self.basic[cell] = true;
            supply[r] -= mass;
            demand[c] -= mass;
            match (r + 1 == h, c + 1 == w) {
                (true, true) => break,
                (true, false) => c += 1,
                (false, true) => r += 1,
                (false, false) if supply[r] <= demand[c] => r += 1,
                (false, false) => c += 1,
            }
        }
    }

    /// Dual potentials with `u[0] = 0` and `u[r] + v[c] = cost(r, c)` on
    /// every basic cell.
    fn potentials(&self) -> Result<(Vec<Energy>, Vec<Energy>), Error> {
        let (h, w) = (self.height(), self.width());
        let mut u = vec![None; h];
        let mut v = vec![None; w];
        let mut stack = vec![Node::Row(0)];
        u[0] = Some(0.);
        while let Some(node) = stack.pop() {
            match node {
                Node::Row(r) => {
                    let ur = u[r].unwrap_or_default();
                    for c in 0..w {
                        let cell = self.cell(r, c);
                        if self.basic[cell] && v[c].is_none() {
                            v[c] = Some(self.cost[cell] - ur);
                            stack.push(Node::Col(c));
                        }
                    }
                }
                Node::Col(c) => {
                    let vc = v[c].unwrap_or_default();
                    for r in 0..h {
                        let cell = self.cell(r, c);
                        if self.basic[cell] && u[r].is_none() {
                            u[r] = Some(self.cost[cell] - vc);
                            stack.push(Node::Row(r));
                        }
                    }
                }
            }
        }
        match (
            u.into_iter().collect::<Option<Vec<_>>>(),
            v.into_iter().collect::<Option<Vec<_>>>(),
        ) {
            (Some(u), Some(v)) => Ok((u, v)),
            _ => Err(Error::Solver("simplex basis does not span the tableau".into())),
        }
    }

    /// Non-basic cell with a negative reduced cost, if any.
    /// Dantzig's rule picks the most negative one, Bland's the first one.
    fn entering(&self, u: &[Energy], v: &[Energy], bland: bool) -> Option<usize> {
        let threshold = -SIMPLEX_TOLERANCE * (1. + self.scale);
        let mut candidates = (0..self.plan.len())
            .filter(|&cell| !self.basic[cell])
            .map(|cell| (cell, self.coordinates(cell)))
            .map(|(cell, (r, c))| (cell, self.cost[cell] - u[r] - v[c]))
            .filter(|(_, reduced)| *reduced < threshold);
        let best = match bland {
            true => candidates.next(),
            false => candidates.min_by(|(_, a), (_, b)| a.total_cmp(b)),
        };
        best.map(|(cell, _)| cell)
    }

    /// Basic cells on the tree path from the entering cell's column back to
    /// its row. Cells at even positions lose mass, odd positions gain it.
    fn cycle(&self, entering: usize) -> Result<Vec<usize>, Error> {
        let (h, w) = (self.height(), self.width());
        let (row, col) = self.coordinates(entering);
        let mut above = vec![None; h];
        let mut below = vec![None; w];
        let mut seen = vec![false; h];
        let mut queue = std::collections::VecDeque::from([Node::Row(row)]);
        seen[row] = true;
        while let Some(node) = queue.pop_front() {
            match node {
                Node::Row(r) => {
                    for c in 0..w {
                        if self.basic[self.cell(r, c)] && below[c].is_none() {
                            below[c] = Some(r);
                            queue.push_back(Node::Col(c));
                        }
                    }
                }
                Node::Col(c) => {
                    for r in 0..h {
                        if self.basic[self.cell(r, c)] && !seen[r] {
                            seen[r] = true;
                            above[r] = Some(c);
                            queue.push_back(Node::Row(r));
                        }
                    }
                }
            }
            if below[col].is_some() {
                break;
            }
        }
        let mut path = Vec::new();
        let mut c = col;
        loop {
            let r = below[c].ok_or_else(|| Error::Solver("simplex cycle is broken".into()))?;
            path.push(self.cell(r, c));
            if r == row {
                break;
            }
            c = above[r].ok_or_else(|| Error::Solver("simplex cycle is broken".into()))?;
            path.push(self.cell(r, c));
        }
        Ok(path)
    }

    /// Moves the largest feasible mass around the entering cell's cycle and
    /// swaps the entering cell into the basis. Returns the moved mass.
    fn pivot(&mut self, entering: usize) -> Result<Energy, Error> {
        let path = self.cycle(entering)?;
        let theta = path
            .iter()
            .step_by(2)
            .map(|&cell| self.plan[cell])
            .fold(Energy::INFINITY, Energy::min);
        let leaving = path
            .iter()
            .step_by(2)
            .copied()
            .filter(|&cell| self.plan[cell] <= theta)
            .min()
            .ok_or_else(|| Error::Solver("simplex cycle has no leaving cell".into()))?;
        for (k, &cell) in path.iter().enumerate() {
            match k % 2 {
                0 => self.plan[cell] = (self.plan[cell] - theta).max(0.),
                _ => self.plan[cell] += theta,
            }
        }
        self.plan[entering] = theta;
        self.plan[leaving] = 0.;
        self.basic[leaving] = false;
        self.basic[entering] = true;
        Ok(theta)
    }

    /// Optimal plan mapped back onto the original bins, dummy mass dropped.
    fn flow(&self, n: usize) -> Flow {
        let mut flow = Flow::zeroes(n);
        for (r, row) in self.rows.iter().enumerate() {
            for (c, col) in self.cols.iter().enumerate() {
                if let (Some(i), Some(j)) = (row, col) {
                    let mass = self.plan[self.cell(r, c)];
                    if mass > 0. {
                        flow.increment(*i, *j, mass);
                    }
                }
            }
        }
        flow
    }
}

impl From<&Problem<'_>> for Tableau {
    fn from(problem: &Problem<'_>) -> Self {
        let source = problem.source();
        let target = problem.target();
        let metric = problem.metric();
        let mut rows = source.support().map(Some).collect::<Vec<_>>();
        let mut cols = target.support().map(Some).collect::<Vec<_>>();
        let mut supply = source.support().map(|i| source.density(&i)).collect::<Vec<_>>();
        let mut demand = target.support().map(|j| target.density(&j)).collect::<Vec<_>>();
        let surplus = supply.iter().sum::<Energy>() - demand.iter().sum::<Energy>();
        if surplus > 0. {
            cols.push(None);
            demand.push(surplus);
        }
        if surplus < 0. {
            rows.push(None);
            supply.push(-surplus);
        }
        let cost = rows
            .iter()
            .flat_map(|r| cols.iter().map(move |c| (r, c)))
            .map(|pair| match pair {
                (Some(i), Some(j)) => metric.distance(i, j),
                _ => 0.,
            })
            .collect::<Vec<_>>();
        let scale = cost.iter().copied().fold(0., Energy::max);
        let cells = cost.len();
        Self {
            rows,
            cols,
            supply,
            demand,
            cost,
            plan: vec![0.; cells],
            basic: vec![false; cells],
            scale,
        }
    }
}
