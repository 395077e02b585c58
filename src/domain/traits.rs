use crate::domain::graph::{Graph, SccResult};

pub trait SccSolver {
    fn compute_scc(&self, graph: &Graph) -> SccResult;
}
