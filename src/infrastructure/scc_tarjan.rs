//! Tarjan's strongly-connected-components algorithm over an adjacency-list
//! graph, with an explicit work stack instead of recursion.

use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccSolver;

const UNVISITED: usize = usize::MAX;

pub struct TarjanSccSolver;

impl SccSolver for TarjanSccSolver {
    fn compute_scc(&self, graph: &Graph) -> SccResult {
        TarjanSolver::new(graph).into_result()
    }
}

/// Per-graph solver instance. The solve pass runs at most once; every query
/// after that serves the cached partition.
pub struct TarjanSolver<'g> {
    graph: &'g Graph,
    solved: bool,
    next_id: usize,
    ids: Vec<usize>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    component_of: Vec<usize>,
    components: Vec<Vec<usize>>,
}

impl<'g> TarjanSolver<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            solved: false,
            next_id: 0,
            ids: vec![UNVISITED; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            component_of: vec![UNVISITED; n],
            components: Vec::new(),
        }
    }

    pub fn component_count(&mut self) -> usize {
        self.solve();
        self.components.len()
    }

    /// Groups indexed by component id; component ids follow finalization
    /// order (reverse topological order of the condensation graph), and
    /// members within a group follow stack-unwind order.
    pub fn components(&mut self) -> &[Vec<usize>] {
        self.solve();
        &self.components
    }

    pub fn component_of(&mut self) -> &[usize] {
        self.solve();
        &self.component_of
    }

    pub fn into_result(mut self) -> SccResult {
        self.solve();
        SccResult {
            component_of: self.component_of,
            components: self.components,
        }
    }

    fn solve(&mut self) {
        if self.solved {
            return;
        }
        for vertex in 0..self.graph.vertex_count() {
            if self.ids[vertex] == UNVISITED {
                self.visit(vertex);
            }
        }
        debug_assert!(self.stack.is_empty());
        self.solved = true;
    }

    // Depth-first traversal over explicit (vertex, next-edge) frames; the
    // call depth stays constant no matter how deep the graph is.
    fn visit(&mut self, root: usize) {
        let mut frames: Vec<(usize, usize)> = Vec::new();
        self.begin_visit(root);
        frames.push((root, 0));

        while let Some((at, edge)) = frames.pop() {
            if edge > 0 {
                // The previous edge of `at` is fully explored. Its target may
                // only lower `low[at]` while it is still on the stack; an edge
                // into an already finalized component never does.
                let to = self.graph.neighbors(at)[edge - 1];
                if self.on_stack[to] {
                    self.low[at] = self.low[at].min(self.low[to]);
                }
            }

            if let Some(&to) = self.graph.neighbors(at).get(edge) {
                frames.push((at, edge + 1));
                if self.ids[to] == UNVISITED {
                    self.begin_visit(to);
                    frames.push((to, 0));
                }
            } else if self.low[at] == self.ids[at] {
                // `at` is the root of a component.
                self.close_component(at);
            }
        }
    }

    fn begin_visit(&mut self, vertex: usize) {
        self.ids[vertex] = self.next_id;
        self.low[vertex] = self.next_id;
        self.next_id += 1;
        self.stack.push(vertex);
        self.on_stack[vertex] = true;
    }

    fn close_component(&mut self, root: usize) {
        let component = self.components.len();
        let mut members = Vec::new();
        while let Some(vertex) = self.stack.pop() {
            self.on_stack[vertex] = false;
            self.component_of[vertex] = component;
            members.push(vertex);
            if vertex == root {
                break;
            }
        }
        self.components.push(members);
    }
}
