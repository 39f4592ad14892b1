//! Serializable graph layouts.
//!
//! A layout is the hand-authorable construction input: a node list with
//! explicit positions, colors, and starting chips, an arrow list keyed by
//! grid position, and an optional chip-initialization strategy. Layouts load
//! from and save to JSON.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, color::Color, graph::Graph, init::ChipInit, node::Node};

/// One node of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub x: usize,
    pub y: usize,
    pub color: Color,
    #[serde(default)]
    pub chips: u32,
}

/// One arrow of a layout, endpoints named by grid position. The out-edge set
/// is the graph's color grouping for the arrow's color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowSpec {
    pub from: [usize; 2],
    pub to: [usize; 2],
    pub color: Color,
}

/// A complete graph description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLayout {
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub arrows: Vec<ArrowSpec>,
    #[serde(default)]
    pub init: Option<ChipInit>,
}

impl GraphLayout {
    /// Build the graph this layout describes and wire its arrows.
    ///
    /// # Errors
    ///
    /// Construction errors surface unchanged ([`crate::Error::DuplicatePosition`],
    /// [`crate::Error::ArrowColorMismatch`]); an arrow endpoint naming an
    /// empty cell is [`crate::Error::MissingNode`].
    pub fn build(&self) -> Result<Graph> {
        let nodes = self
            .nodes
            .iter()
            .map(|spec| Node::new(spec.x, spec.y, spec.color, spec.chips))
            .collect();
        let mut graph = Graph::new(nodes)?;

        for spec in &self.arrows {
            let from = graph.require(spec.from[0], spec.from[1])?;
            let to = graph.require(spec.to[0], spec.to[1])?;
            graph.add_arrow(from, to, spec.color)?;
        }
        Ok(graph)
    }

    /// Load a layout from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let layout = serde_json::from_reader(BufReader::new(file))?;
        Ok(layout)
    }

    /// Save the layout to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
