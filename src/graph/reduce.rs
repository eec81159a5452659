use tracing::{debug, trace};

use super::store::{NodeId, TestGraph};
use crate::error::GraphError;

/// What to do when resolution reaches a node whose own resolution is still
/// running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// The in-flight node contributes 0. Terminates, but undercounts every
    /// node that closes a cycle.
    #[default]
    Lenient,
    /// Fail with [`GraphError::Cycle`].
    Strict,
}

impl CyclePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done(usize),
}

/// A node whose parents are being summed.
#[derive(Debug, Clone, Copy)]
struct Frame {
    id: NodeId,
    next_parent: usize,
    total: usize,
}

/// Memoized depth-first sum of own tests over each node's resolvable
/// ancestors. Parents missing from the graph count as 0.
///
/// The walk keeps its own frame stack, so chain length is bounded by heap
/// rather than thread stack. After a strict-mode cycle error the counter
/// holds half-resolved nodes and should be dropped.
pub struct DeepCounter<'g> {
    graph: &'g TestGraph,
    policy: CyclePolicy,
    visits: Vec<Visit>,
    stack: Vec<Frame>,
}

impl<'g> DeepCounter<'g> {
    pub fn new(graph: &'g TestGraph, policy: CyclePolicy) -> Self {
        Self {
            graph,
            policy,
            visits: vec![Visit::Unvisited; graph.len()],
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, id: NodeId) {
        self.visits[id.index()] = Visit::InProgress;
        self.stack.push(Frame {
            id,
            next_parent: 0,
            total: self.graph.node(id).own_tests(),
        });
    }

    pub fn resolve(&mut self, id: NodeId) -> Result<usize, GraphError> {
        match self.visits[id.index()] {
            Visit::Done(total) => return Ok(total),
            Visit::InProgress => return self.revisit(id),
            Visit::Unvisited => {}
        }

        let graph = self.graph;
        let base = self.stack.len();
        self.enter(id);

        loop {
            let top = self.stack.len() - 1;
            let Frame {
                id: current,
                next_parent,
                ..
            } = self.stack[top];
            let node = graph.node(current);

            match node.parents().get(next_parent) {
                Some(parent) => {
                    self.stack[top].next_parent += 1;
                    let Some(parent_id) = graph.lookup(parent) else {
                        trace!(key = %node.key, parent = %parent, "parent not in graph");
                        continue;
                    };
                    let visit = self.visits[parent_id.index()];
                    match visit {
                        Visit::Done(total) => self.stack[top].total += total,
                        Visit::InProgress => {
                            let total = self.revisit(parent_id)?;
                            self.stack[top].total += total;
                        }
                        Visit::Unvisited => self.enter(parent_id),
                    }
                }
                None => {
                    let done = self.stack.remove(top);
                    self.visits[done.id.index()] = Visit::Done(done.total);
                    if self.stack.len() == base {
                        return Ok(done.total);
                    }
                    let caller = self.stack.len() - 1;
                    self.stack[caller].total += done.total;
                }
            }
        }
    }

    fn revisit(&self, id: NodeId) -> Result<usize, GraphError> {
        let start = self
            .stack
            .iter()
            .position(|frame| frame.id == id)
            .unwrap_or(0);
        let mut chain: Vec<String> = self.stack[start..]
            .iter()
            .map(|frame| self.graph.node(frame.id).key.clone())
            .collect();
        chain.push(self.graph.node(id).key.clone());

        match self.policy {
            CyclePolicy::Strict => Err(GraphError::cycle(chain)),
            CyclePolicy::Lenient => {
                debug!(cycle = %chain.join(" -> "), "inheritance cycle, counting 0 for revisit");
                Ok(0)
            }
        }
    }

    /// Resolves every node. Safe to call repeatedly; finished nodes are
    /// served from the memo.
    pub fn resolve_all(&mut self) -> Result<(), GraphError> {
        let graph = self.graph;
        for id in graph.ids() {
            self.resolve(id)?;
        }
        Ok(())
    }

    pub fn deep_tests(&self, id: NodeId) -> Option<usize> {
        match self.visits[id.index()] {
            Visit::Done(total) => Some(total),
            _ => None,
        }
    }

    pub fn finish(mut self) -> Result<DeepCounts, GraphError> {
        self.resolve_all()?;
        let totals = self
            .visits
            .iter()
            .map(|visit| match visit {
                Visit::Done(total) => *total,
                _ => 0,
            })
            .collect();
        Ok(DeepCounts { totals })
    }
}

/// Final deep test counts, indexed by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepCounts {
    totals: Vec<usize>,
}

impl DeepCounts {
    pub fn get(&self, id: NodeId) -> usize {
        self.totals[id.index()]
    }
}

pub fn compute_deep_counts(
    graph: &TestGraph,
    policy: CyclePolicy,
) -> Result<DeepCounts, GraphError> {
    DeepCounter::new(graph, policy).finish()
}
