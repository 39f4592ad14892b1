//! Stochastic chip redistribution over colored directed grid graphs
//!
//! This crate provides:
//! - A grid-embedded graph of colored nodes with directed, colored arrows
//!   coupled to out-edge node sets
//! - Structural invariants: coherence (every interior-bound arrow has a
//!   color-matched return path) and segregation (chips confined to the zero
//!   boundary)
//! - A round-based simulation engine executing coupled double moves under a
//!   seeded random source, with idle detection and an event log
//! - Chip initialization strategies (uniform, multinomial, explicit)
//! - JSON graph layouts and a CLI for checking and running them

pub mod cli;
pub mod color;
pub mod engine;
pub mod error;
pub mod graph;
pub mod init;
pub mod layout;
pub mod node;
pub mod observer;
pub mod types;
pub mod utils;

pub use color::Color;
pub use engine::{IdleReason, MoveRecord, RoundOutcome, SimulationEngine};
pub use error::{Error, Result};
pub use graph::{CoherenceViolation, Graph};
pub use init::ChipInit;
pub use layout::{ArrowSpec, GraphLayout, NodeSpec};
pub use node::{Arrow, Node, NodeId};
pub use observer::{MetricsObserver, MetricsSummary, ProgressObserver, RoundObserver};
pub use types::{DEFAULT_ROUND_CAP, GridPos, MULTINOMIAL_BUDGET, PROBABILITY_TOLERANCE};
