//! The simulation engine: single-round resolution and the multi-round driver.
//!
//! Each round is one atomic attempt at a coupled double move: sample a
//! chip-holding node, a compatible arrow, and a linked out-node, then
//! transport one chip along the arrow and one chip along a color-matched
//! arrow of the out-node. Rounds with no eligible move resolve to
//! [`RoundOutcome::Idle`]; nothing changes and the caller decides whether to
//! keep going. All randomness flows through an engine-owned [`StdRng`], so a
//! seeded engine replays the exact round-by-round trace.

use std::fmt;

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    color::Color,
    graph::Graph,
    node::NodeId,
    observer::RoundObserver,
    types::{GridPos, SELF_PAIR_MIN_CHIPS},
};

/// Why a round resolved without a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleReason {
    /// No node holds any chips; callers should stop before this point.
    NoChips,
    /// The sampled node has no arrow with a chip-holding out-edge node.
    NoCandidateArrow,
    /// The sampled arrow's out-edge set holds no chips.
    NoCandidateOutNode,
    /// The out-node is the origin itself and cannot fund both legs.
    SelfPairBelowThreshold,
}

/// A completed coupled move.
///
/// The second leg is absent when the out-node had no arrow matching the
/// origin's color; the first leg's transfer stays committed in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Origin node of the first leg.
    pub from: GridPos,
    /// First-leg destination (the arrow's neighbor).
    pub to: GridPos,
    /// Color of the sampled arrow.
    pub arrow_color: Color,
    /// The sampled out-node funding the second leg.
    pub out_node: GridPos,
    /// The origin node's color, which the second leg must match.
    pub origin_color: Color,
    /// Second-leg destination, when a matching arrow existed.
    pub second_leg_to: Option<GridPos>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --[{}]--> {} & ",
            self.from, self.arrow_color, self.to
        )?;
        match self.second_leg_to {
            Some(to) => write!(f, "{} --[{}]--> {}.", self.out_node, self.origin_color, to),
            None => write!(
                f,
                "{} kept its chip (no {} arrow).",
                self.out_node, self.origin_color
            ),
        }
    }
}

/// The tagged outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// No eligible move; no state change.
    Idle(IdleReason),
    /// A coupled move executed.
    Move(MoveRecord),
}

impl RoundOutcome {
    /// True for productive rounds.
    pub fn is_move(&self) -> bool {
        matches!(self, RoundOutcome::Move(_))
    }
}

/// Executes rounds against a graph, owning the random source, the optional
/// frame buffer, and any attached observers.
pub struct SimulationEngine {
    rng: StdRng,
    record_frames: bool,
    frames: Vec<Vec<Vec<u32>>>,
    observers: Vec<Box<dyn RoundObserver>>,
}

impl SimulationEngine {
    /// Engine with OS-entropy seeding.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Engine with a fixed seed; runs replay round-by-round.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        SimulationEngine {
            rng,
            record_frames: false,
            frames: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Record one chip-matrix snapshot per productive round for the
    /// animation collaborator.
    pub fn with_frame_recording(mut self) -> Self {
        self.record_frames = true;
        self
    }

    /// Attach an observer notified at run start, after every round, and at
    /// run end.
    pub fn with_observer(mut self, observer: Box<dyn RoundObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Recorded chip-matrix snapshots, one per productive round.
    pub fn frames(&self) -> &[Vec<Vec<u32>>] {
        &self.frames
    }

    /// Drain the recorded snapshots.
    pub fn take_frames(&mut self) -> Vec<Vec<Vec<u32>>> {
        std::mem::take(&mut self.frames)
    }

    /// Resolve one round against the graph.
    ///
    /// The decision procedure is a function of the graph state and the
    /// engine's random draws only:
    ///
    /// 1. Sample a node uniformly from the chip holders.
    /// 2. Keep its arrows with at least one chip-holding out-edge node.
    /// 3. Sample one such arrow uniformly.
    /// 4. Keep the arrow's chip-holding out-edge nodes.
    /// 5. Sample one out-node uniformly.
    /// 6. Discard a self-paired out-node that cannot fund both legs.
    /// 7. Transfer one chip along the arrow, then one chip along the
    ///    out-node's first arrow matching the origin's color. A missing
    ///    match skips the second leg; the first transfer stays committed.
    pub fn run_round(&mut self, graph: &mut Graph) -> RoundOutcome {
        let holders = graph.nodes_with_chips();
        let Some(&origin) = holders.choose(&mut self.rng) else {
            return RoundOutcome::Idle(IdleReason::NoChips);
        };
        let origin_pos = graph.node(origin).pos();
        let origin_color = graph.node(origin).color();

        let candidate_arrows: Vec<usize> = graph
            .node(origin)
            .arrows()
            .iter()
            .enumerate()
            .filter(|(_, arrow)| {
                arrow
                    .out_edges()
                    .iter()
                    .any(|&id| graph.node(id).has_chips())
            })
            .map(|(idx, _)| idx)
            .collect();
        let Some(&arrow_idx) = candidate_arrows.choose(&mut self.rng) else {
            return RoundOutcome::Idle(IdleReason::NoCandidateArrow);
        };

        let (arrow_to, arrow_color, out_candidates) = {
            let arrow = &graph.node(origin).arrows()[arrow_idx];
            let outs: Vec<NodeId> = arrow
                .out_edges()
                .iter()
                .copied()
                .filter(|&id| graph.node(id).has_chips())
                .collect();
            (arrow.neighbor(), arrow.color(), outs)
        };
        let Some(&out) = out_candidates.choose(&mut self.rng) else {
            return RoundOutcome::Idle(IdleReason::NoCandidateOutNode);
        };

        if out == origin && graph.node(origin).chips() < SELF_PAIR_MIN_CHIPS {
            return RoundOutcome::Idle(IdleReason::SelfPairBelowThreshold);
        }

        // First leg commits before the second leg is even looked up.
        graph.node_mut(origin).take_chip();
        graph.node_mut(arrow_to).give_chip();

        let matched = graph
            .node(out)
            .arrow_of_color(origin_color)
            .map(|a| a.neighbor());
        let second_leg_to = match matched {
            Some(leg_to) => {
                graph.node_mut(out).take_chip();
                graph.node_mut(leg_to).give_chip();
                Some(graph.node(leg_to).pos())
            }
            None => None,
        };

        RoundOutcome::Move(MoveRecord {
            from: origin_pos,
            to: graph.node(arrow_to).pos(),
            arrow_color,
            out_node: graph.node(out).pos(),
            origin_color,
            second_leg_to,
        })
    }

    /// Repeat rounds until the stop predicate holds or the round cap is
    /// reached, whichever comes first. The predicate is evaluated between
    /// rounds (cooperative cancellation), with priority over the cap.
    ///
    /// Returns the event log: one line per productive round, consecutive
    /// idle rounds coalesced into a single marker, and a final summary line
    /// reporting the total rounds executed.
    pub fn run_rounds<F>(
        &mut self,
        graph: &mut Graph,
        mut stop: F,
        max_rounds: usize,
    ) -> Result<Vec<String>>
    where
        F: FnMut(&Graph) -> bool,
    {
        for observer in &mut self.observers {
            observer.on_run_start(max_rounds)?;
        }

        let mut log = Vec::new();
        let mut idle_streak = 0usize;
        let mut rounds = 0usize;
        let mut condition_met = false;

        loop {
            if stop(graph) {
                condition_met = true;
                break;
            }
            if rounds >= max_rounds {
                break;
            }
            rounds += 1;

            let outcome = self.run_round(graph);
            match &outcome {
                RoundOutcome::Move(record) => {
                    if idle_streak > 0 {
                        log.push(idle_marker(idle_streak));
                        idle_streak = 0;
                    }
                    log.push(record.to_string());
                    if self.record_frames {
                        self.frames.push(graph.chip_matrix());
                    }
                }
                RoundOutcome::Idle(_) => idle_streak += 1,
            }

            for observer in &mut self.observers {
                observer.on_round(rounds, &outcome)?;
            }
        }

        if idle_streak > 0 {
            log.push(idle_marker(idle_streak));
        }
        log.push(if condition_met {
            format!("Stop condition satisfied after {rounds} rounds.")
        } else {
            format!("Round cap reached after {rounds} rounds.")
        });

        for observer in &mut self.observers {
            observer.on_run_end(rounds)?;
        }

        Ok(log)
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn idle_marker(streak: usize) -> String {
    if streak > 1 {
        format!("Idle ({streak} rounds).")
    } else {
        "Idle (1 round).".to_string()
    }
}
