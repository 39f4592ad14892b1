//! Observers for multi-round runs.
//!
//! Observers allow composable data collection during a run without coupling
//! the driver to specific output formats: a progress bar for interactive
//! use, a metrics accumulator for summaries.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{Result, engine::RoundOutcome};

/// Observer trait for monitoring a multi-round run.
///
/// Methods are called in order: `on_run_start` once, `on_round` after every
/// round (idle or productive), `on_run_end` once. All default to no-ops.
pub trait RoundObserver: Send {
    /// Called before the first round with the configured round cap.
    fn on_run_start(&mut self, _round_cap: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each round with its outcome. `round` counts from 1.
    fn on_round(&mut self, _round: usize, _outcome: &RoundOutcome) -> Result<()> {
        Ok(())
    }

    /// Called once the run terminates, with the total rounds executed.
    fn on_run_end(&mut self, _total_rounds: usize) -> Result<()> {
        Ok(())
    }
}

/// Progress bar observer showing round throughput and the move/idle split.
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    moves: usize,
    idles: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            moves: 0,
            idles: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundObserver for ProgressObserver {
    fn on_run_start(&mut self, round_cap: usize) -> Result<()> {
        let pb = ProgressBar::new(round_cap as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rounds ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_round(&mut self, round: usize, outcome: &RoundOutcome) -> Result<()> {
        if outcome.is_move() {
            self.moves += 1;
        } else {
            self.idles += 1;
        }
        if let Some(pb) = &self.progress_bar {
            pb.set_position(round as u64);
            pb.set_message(format!("M:{} I:{}", self.moves, self.idles));
        }
        Ok(())
    }

    fn on_run_end(&mut self, _total_rounds: usize) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("M:{} I:{}", self.moves, self.idles));
        }
        Ok(())
    }
}

/// Metrics observer accumulating round counters.
pub struct MetricsObserver {
    rounds: usize,
    moves: usize,
    idle_rounds: usize,
    partial_moves: usize,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self {
            rounds: 0,
            moves: 0,
            idle_rounds: 0,
            partial_moves: 0,
        }
    }

    /// Fraction of rounds that produced a move.
    pub fn move_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.moves as f64 / self.rounds as f64
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            rounds: self.rounds,
            moves: self.moves,
            idle_rounds: self.idle_rounds,
            partial_moves: self.partial_moves,
            move_rate: self.move_rate(),
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundObserver for MetricsObserver {
    fn on_round(&mut self, _round: usize, outcome: &RoundOutcome) -> Result<()> {
        self.rounds += 1;
        match outcome {
            RoundOutcome::Move(record) => {
                self.moves += 1;
                if record.second_leg_to.is_none() {
                    self.partial_moves += 1;
                }
            }
            RoundOutcome::Idle(_) => self.idle_rounds += 1,
        }
        Ok(())
    }
}

/// Summary of a run's round counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub rounds: usize,
    pub moves: usize,
    pub idle_rounds: usize,
    pub partial_moves: usize,
    pub move_rate: f64,
}
