//! The graph: sole owner of all nodes, plus the derived indexes and the
//! structural predicates used by the simulation.
//!
//! Topology (nodes and arrows) is fixed at setup and never restructured
//! during a run; only chip counts mutate. Cloning a graph yields an
//! independent trajectory fork: node handles are stable slot-map keys, so
//! the cloned arrows reference the cloned nodes with identical topology.

use std::{collections::HashMap, fmt};

use slotmap::SlotMap;

use crate::{
    Error, Result,
    color::Color,
    node::{Arrow, Node, NodeId},
    types::GridPos,
};

/// The offending (node, arrow, out-node) triple reported when the coherence
/// predicate fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoherenceViolation {
    /// The node the arrow originates from.
    pub node: GridPos,
    /// That node's color, which the out-node lacks a return arrow for.
    pub node_color: Color,
    /// The arrow's neighbor.
    pub neighbor: GridPos,
    /// The arrow's color.
    pub arrow_color: Color,
    /// The out-edge node with no matching return arrow.
    pub out_node: GridPos,
}

impl fmt::Display for CoherenceViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph is not coherent at node {} with arrow to {} of color {}: out-edge node {} has no {} arrow",
            self.node, self.neighbor, self.arrow_color, self.out_node, self.node_color
        )
    }
}

/// A colored directed graph embedded in a 2D integer grid.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: SlotMap<NodeId, Node>,
    /// Canonical node order: insertion order of the construction list. Used
    /// by initialization strategies and for deterministic sampling.
    order: Vec<NodeId>,
    index: HashMap<GridPos, NodeId>,
    by_color: HashMap<Color, Vec<NodeId>>,
    max_x: usize,
    max_y: usize,
}

impl Graph {
    /// Build a graph from a node list, deriving the position index and the
    /// color grouping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePosition`] when two nodes share a grid cell.
    pub fn new(node_list: Vec<Node>) -> Result<Self> {
        let mut nodes = SlotMap::with_key();
        let mut order = Vec::with_capacity(node_list.len());
        let mut index = HashMap::new();
        let mut by_color: HashMap<Color, Vec<NodeId>> = HashMap::new();
        let mut max_x = 0;
        let mut max_y = 0;

        for node in node_list {
            let pos = node.pos();
            max_x = max_x.max(pos.x);
            max_y = max_y.max(pos.y);
            let color = node.color();
            let id = nodes.insert(node);
            if index.insert(pos, id).is_some() {
                return Err(Error::DuplicatePosition { x: pos.x, y: pos.y });
            }
            order.push(id);
            by_color.entry(color).or_default().push(id);
        }

        Ok(Graph {
            nodes,
            order,
            index,
            by_color,
            max_x,
            max_y,
        })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Largest x coordinate of any node.
    pub fn max_x(&self) -> usize {
        self.max_x
    }

    /// Largest y coordinate of any node.
    pub fn max_y(&self) -> usize {
        self.max_y
    }

    /// Node handles in canonical order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Look up a node by handle.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Direct positional lookup; `None` for empty cells.
    pub fn get(&self, x: usize, y: usize) -> Option<&Node> {
        self.node_at(x, y).map(|id| &self.nodes[id])
    }

    /// Handle of the node at `(x, y)`, if the cell is occupied.
    pub fn node_at(&self, x: usize, y: usize) -> Option<NodeId> {
        self.index.get(&GridPos::new(x, y)).copied()
    }

    /// Handle of the node at `(x, y)`, or [`Error::MissingNode`].
    pub fn require(&self, x: usize, y: usize) -> Result<NodeId> {
        self.node_at(x, y).ok_or(Error::MissingNode { x, y })
    }

    /// Nodes of the given color, in canonical order.
    pub fn by_color(&self, color: Color) -> &[NodeId] {
        self.by_color.get(&color).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Derived view of chip-holding nodes, recomputed on demand so it always
    /// reflects live state. Canonical order keeps uniform sampling
    /// reproducible under a seeded random source.
    pub fn nodes_with_chips(&self) -> Vec<NodeId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| self.nodes[id].has_chips())
            .collect()
    }

    /// Wire an arrow from `from` to `to`, linking every node of the arrow's
    /// color as its out-edge set (the graph's color grouping).
    pub fn add_arrow(&mut self, from: NodeId, to: NodeId, color: Color) -> Result<()> {
        let out_edges = self.by_color(color).to_vec();
        self.add_arrow_linked(from, to, color, out_edges)
    }

    /// Wire an arrow with an explicit out-edge node list.
    ///
    /// Every out-edge node's color must equal the arrow's color; on mismatch
    /// the arrow list is left unchanged (no partial append).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArrowColorMismatch`] naming the offending node.
    pub fn add_arrow_linked(
        &mut self,
        from: NodeId,
        to: NodeId,
        color: Color,
        out_edges: Vec<NodeId>,
    ) -> Result<()> {
        for &id in &out_edges {
            let node = &self.nodes[id];
            if node.color() != color {
                return Err(Error::ArrowColorMismatch {
                    arrow: color,
                    found: node.color(),
                    x: node.x(),
                    y: node.y(),
                });
            }
        }
        self.nodes[from].push_arrow(Arrow::new(to, color, out_edges));
        Ok(())
    }

    /// Evaluate the coherence predicate, reporting the first offending
    /// (node, arrow, out-node) triple.
    ///
    /// For every node `n` and every arrow from `n` whose neighbor is not on
    /// the max boundary of the grid, every node in the arrow's out-edge set
    /// must have at least one outgoing arrow colored equal to `n`'s color,
    /// guaranteeing every coupled move a return path. Arrows into the max
    /// boundary are exempt: chips reaching the boundary are terminal.
    pub fn coherence_violation(&self) -> Option<CoherenceViolation> {
        for &id in &self.order {
            let node = &self.nodes[id];
            for arrow in node.arrows() {
                let neighbor = &self.nodes[arrow.neighbor()];
                if neighbor.x() == self.max_x || neighbor.y() == self.max_y {
                    continue;
                }
                for &out_id in arrow.out_edges() {
                    let out_node = &self.nodes[out_id];
                    if out_node.arrow_of_color(node.color()).is_none() {
                        return Some(CoherenceViolation {
                            node: node.pos(),
                            node_color: node.color(),
                            neighbor: neighbor.pos(),
                            arrow_color: arrow.color(),
                            out_node: out_node.pos(),
                        });
                    }
                }
            }
        }
        None
    }

    /// True when the coherence predicate holds for every arrow.
    pub fn is_coherent(&self) -> bool {
        self.coherence_violation().is_none()
    }

    /// True iff every chip-holding node lies on the zero boundary of the
    /// grid (`x == 0 || y == 0`).
    pub fn is_segregated(&self) -> bool {
        self.nodes_with_chips()
            .iter()
            .all(|&id| self.nodes[id].pos().on_zero_boundary())
    }

    /// Grid-shaped snapshot of chip counts, indexed `[x][y]`, zero where no
    /// node exists. This is the read-only view consumed by visualization and
    /// animation collaborators.
    pub fn chip_matrix(&self) -> Vec<Vec<u32>> {
        let mut matrix = vec![vec![0u32; self.max_y + 1]; self.max_x + 1];
        for node in self.nodes.values() {
            matrix[node.x()][node.y()] = node.chips();
        }
        matrix
    }

    /// Total chips across all nodes.
    pub fn total_chips(&self) -> u64 {
        self.nodes.values().map(|n| u64::from(n.chips())).sum()
    }
}
