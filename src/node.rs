//! Nodes and arrows: the building blocks of the grid graph.
//!
//! Nodes live in an arena owned by [`crate::graph::Graph`]; arrows reference
//! their neighbor and out-edge nodes through stable [`NodeId`] handles rather
//! than owning pointers, so cloning a graph preserves topology.

use slotmap::new_key_type;

use crate::{color::Color, types::GridPos};

new_key_type! {
    /// Stable handle for nodes backed by a generational slot map.
    pub struct NodeId;
}

/// A directed, colored edge to a neighbor, coupled to out-edge nodes that
/// fund the second leg of a paired move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrow {
    neighbor: NodeId,
    color: Color,
    out_edges: Vec<NodeId>,
}

impl Arrow {
    pub(crate) fn new(neighbor: NodeId, color: Color, out_edges: Vec<NodeId>) -> Self {
        Arrow {
            neighbor,
            color,
            out_edges,
        }
    }

    /// The node this arrow points at.
    pub fn neighbor(&self) -> NodeId {
        self.neighbor
    }

    /// The arrow's color. Every out-edge node shares it.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The ordered out-edge node set linked to this arrow.
    pub fn out_edges(&self) -> &[NodeId] {
        &self.out_edges
    }
}

/// A grid-positioned, colored chip holder owning its outgoing arrow list.
///
/// Position and color are fixed at construction; only the chip count mutates
/// during a simulation, and only through the engine and the initialization
/// strategies.
#[derive(Debug, Clone)]
pub struct Node {
    x: usize,
    y: usize,
    color: Color,
    chips: u32,
    arrows: Vec<Arrow>,
}

impl Node {
    pub fn new(x: usize, y: usize, color: Color, chips: u32) -> Self {
        Node {
            x,
            y,
            color,
            chips,
            arrows: Vec::new(),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    pub fn has_chips(&self) -> bool {
        self.chips > 0
    }

    /// Outgoing arrows in wiring order.
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    /// The first outgoing arrow matching `color`, if any.
    pub fn arrow_of_color(&self, color: Color) -> Option<&Arrow> {
        self.arrows.iter().find(|a| a.color == color)
    }

    pub(crate) fn push_arrow(&mut self, arrow: Arrow) {
        self.arrows.push(arrow);
    }

    pub(crate) fn set_chips(&mut self, chips: u32) {
        self.chips = chips;
    }

    pub(crate) fn give_chip(&mut self) {
        self.chips += 1;
    }

    pub(crate) fn take_chip(&mut self) {
        debug_assert!(self.chips > 0, "chip taken from an empty node");
        self.chips -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_starts_with_no_arrows() {
        let node = Node::new(1, 2, Color::Blue, 3);
        assert_eq!(node.pos(), GridPos::new(1, 2));
        assert_eq!(node.color(), Color::Blue);
        assert_eq!(node.chips(), 3);
        assert!(node.arrows().is_empty());
    }

    #[test]
    fn chip_transfer_primitives() {
        let mut node = Node::new(0, 0, Color::Red, 1);
        node.give_chip();
        assert_eq!(node.chips(), 2);
        node.take_chip();
        node.take_chip();
        assert!(!node.has_chips());
    }
}
