//! Common test fixtures for the schelling-graph test suite.
//!
//! Provides the ten-node 4x4 demo topology used across the scenario tests:
//! a boundary-directed graph whose arrows funnel chips toward the zero
//! boundary, wired so that the coherence predicate holds.

use schelling_graph::{ArrowSpec, Color, Graph, GraphLayout, NodeSpec};

fn node(x: usize, y: usize, color: Color, chips: u32) -> NodeSpec {
    NodeSpec { x, y, color, chips }
}

fn arrow(from: [usize; 2], to: [usize; 2], color: Color) -> ArrowSpec {
    ArrowSpec { from, to, color }
}

/// The demo layout with chips placed at the given positions (zero elsewhere).
pub fn demo_layout(chips_at: &[([usize; 2], u32)]) -> GraphLayout {
    let chips = |x: usize, y: usize| {
        chips_at
            .iter()
            .find(|(pos, _)| *pos == [x, y])
            .map(|(_, count)| *count)
            .unwrap_or(0)
    };

    GraphLayout {
        nodes: vec![
            node(0, 3, Color::Black, chips(0, 3)),
            node(0, 2, Color::Red, chips(0, 2)),
            node(0, 1, Color::Red, chips(0, 1)),
            node(0, 0, Color::Orange, chips(0, 0)),
            node(1, 2, Color::Purple, chips(1, 2)),
            node(1, 1, Color::Blue, chips(1, 1)),
            node(1, 0, Color::Cyan, chips(1, 0)),
            node(2, 1, Color::Green, chips(2, 1)),
            node(2, 0, Color::Cyan, chips(2, 0)),
            node(3, 0, Color::Black, chips(3, 0)),
        ],
        arrows: vec![
            arrow([0, 0], [0, 1], Color::Blue),
            arrow([0, 0], [0, 1], Color::Green),
            arrow([0, 0], [1, 0], Color::Blue),
            arrow([0, 0], [1, 0], Color::Purple),
            arrow([0, 1], [0, 2], Color::Blue),
            arrow([0, 1], [0, 2], Color::Green),
            arrow([0, 2], [0, 3], Color::Blue),
            arrow([0, 2], [0, 3], Color::Green),
            arrow([1, 2], [0, 2], Color::Blue),
            arrow([1, 2], [0, 2], Color::Orange),
            arrow([1, 2], [0, 2], Color::Cyan),
            arrow([1, 1], [1, 2], Color::Blue),
            arrow([1, 1], [0, 1], Color::Blue),
            arrow([1, 1], [2, 1], Color::Blue),
            arrow([1, 1], [1, 0], Color::Blue),
            arrow([1, 1], [1, 1], Color::Blue),
            arrow([1, 1], [1, 0], Color::Red),
            arrow([1, 1], [1, 0], Color::Orange),
            arrow([1, 1], [1, 2], Color::Green),
            arrow([1, 1], [0, 1], Color::Cyan),
            arrow([1, 1], [0, 1], Color::Orange),
            arrow([1, 1], [2, 1], Color::Purple),
            arrow([2, 1], [2, 0], Color::Blue),
            arrow([2, 1], [2, 0], Color::Red),
            arrow([2, 1], [2, 0], Color::Orange),
            arrow([1, 0], [2, 0], Color::Blue),
            arrow([1, 0], [2, 0], Color::Purple),
            arrow([2, 0], [3, 0], Color::Blue),
            arrow([2, 0], [3, 0], Color::Purple),
        ],
        init: None,
    }
}

/// Build the demo graph with chips at the given positions.
pub fn demo_graph(chips_at: &[([usize; 2], u32)]) -> Graph {
    demo_layout(chips_at)
        .build()
        .expect("demo layout should build")
}
