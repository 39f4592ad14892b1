//! CLI infrastructure for the schelling-graph toolkit
//!
//! This module provides the command-line interface for checking graph
//! layouts and driving simulations from them.

pub mod commands;
