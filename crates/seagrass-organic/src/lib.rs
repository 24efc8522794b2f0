#![forbid(unsafe_code)]

//! Organic (Barnes-Hut force-directed) layout.
//!
//! Every iteration rebuilds a quadtree over the current positions, applies approximated
//! inverse-square repulsion, Hooke springs along edges and optional gravity toward the origin,
//! integrates with fixed damping and a temperature-bounded step, then separates overlapping
//! nodes and cools down.
//!
//! Pass an explicit `random_seed` for reproducible output. Without one the start positions are
//! seeded from the wall clock and differ between runs.

pub mod control;
pub mod quadtree;
pub mod rng;
mod sim;

pub use control::{CancelFlag, Progress, RunControl, StopReason};

use seagrass_graph::{GraphSource, IndexedGraph, Positions, de};
use serde::{Deserialize, Serialize};
use sim::Simulation;
use std::ops::ControlFlow;
use std::time::Instant;

/// Options read from JSON. Missing keys and `null` take the default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOrganicOptions", rename_all = "camelCase")]
pub struct OrganicOptions {
    pub iterations: usize,
    pub repulsion: f64,
    pub attraction: f64,
    pub gravity: f64,
    pub initial_temperature: f64,
    pub cooling: f64,
    /// Mean displacement below which the run stops early. `0` and `+∞` disable early exit.
    pub threshold: f64,
    /// Barnes-Hut opening criterion; `0` makes repulsion exact.
    pub theta: f64,
    /// Spring rest length.
    pub edge_length: f64,
    pub random_seed: Option<u32>,
    pub prevent_overlap: bool,
    pub node_radius: f64,
}

impl Default for OrganicOptions {
    fn default() -> Self {
        Self {
            iterations: 300,
            repulsion: 2000.0,
            attraction: 0.1,
            gravity: 0.1,
            initial_temperature: 100.0,
            cooling: 0.95,
            threshold: 0.5,
            theta: 0.5,
            edge_length: 100.0,
            random_seed: None,
            prevent_overlap: true,
            node_radius: 20.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawOrganicOptions {
    #[serde(deserialize_with = "de::count")]
    iterations: Option<usize>,
    repulsion: Option<f64>,
    attraction: Option<f64>,
    gravity: Option<f64>,
    initial_temperature: Option<f64>,
    cooling: Option<f64>,
    threshold: Option<f64>,
    theta: Option<f64>,
    edge_length: Option<f64>,
    #[serde(deserialize_with = "de::seed")]
    random_seed: Option<u32>,
    prevent_overlap: Option<bool>,
    node_radius: Option<f64>,
}

impl From<RawOrganicOptions> for OrganicOptions {
    fn from(raw: RawOrganicOptions) -> Self {
        let d = Self::default();
        Self {
            iterations: raw.iterations.unwrap_or(d.iterations),
            repulsion: raw.repulsion.unwrap_or(d.repulsion),
            attraction: raw.attraction.unwrap_or(d.attraction),
            gravity: raw.gravity.unwrap_or(d.gravity),
            initial_temperature: raw.initial_temperature.unwrap_or(d.initial_temperature),
            cooling: raw.cooling.unwrap_or(d.cooling),
            threshold: raw.threshold.unwrap_or(d.threshold),
            theta: raw.theta.unwrap_or(d.theta),
            edge_length: raw.edge_length.unwrap_or(d.edge_length),
            random_seed: raw.random_seed,
            prevent_overlap: raw.prevent_overlap.unwrap_or(d.prevent_overlap),
            node_radius: raw.node_radius.unwrap_or(d.node_radius),
        }
    }
}

impl OrganicOptions {
    /// Non-finite values fall back to their defaults (except `threshold = +∞`), distances and
    /// the temperature clamp to `>= 0` and `cooling` clamps into `[0, 1]`.
    pub fn clamped(self) -> Self {
        let d = Self::default();
        let threshold = if self.threshold == f64::INFINITY {
            self.threshold
        } else {
            de::non_negative(self.threshold, d.threshold)
        };
        Self {
            repulsion: de::finite_or(self.repulsion, d.repulsion),
            attraction: de::finite_or(self.attraction, d.attraction),
            gravity: de::finite_or(self.gravity, d.gravity),
            initial_temperature: de::non_negative(self.initial_temperature, d.initial_temperature),
            cooling: de::unit_interval(self.cooling, d.cooling),
            threshold,
            theta: de::non_negative(self.theta, d.theta),
            edge_length: de::non_negative(self.edge_length, d.edge_length),
            node_radius: de::non_negative(self.node_radius, d.node_radius),
            ..self
        }
    }

    fn converged(&self, mean_displacement: f64) -> bool {
        self.threshold.is_finite() && self.threshold > 0.0 && mean_displacement < self.threshold
    }
}

/// Result of [`OrganicLayout::run`].
#[derive(Debug, Clone)]
pub struct OrganicRun {
    pub positions: Positions,
    /// Iterations actually executed.
    pub iterations: usize,
    pub stop: StopReason,
    pub temperature: f64,
}

#[derive(Debug, Clone, Default)]
pub struct OrganicLayout {
    options: OrganicOptions,
}

impl OrganicLayout {
    pub fn new(options: OrganicOptions) -> Self {
        Self {
            options: options.clamped(),
        }
    }

    pub fn options(&self) -> &OrganicOptions {
        &self.options
    }

    pub fn compute<G: GraphSource + ?Sized>(&self, graph: &G) -> Positions {
        self.run(graph, RunControl::default()).positions
    }

    /// Runs the simulation under `control`. Cancellation, budget and observer are consulted
    /// between iterations; every stop path returns the positions reached so far.
    pub fn run<G: GraphSource + ?Sized>(
        &self,
        graph: &G,
        mut control: RunControl<'_>,
    ) -> OrganicRun {
        let opts = &self.options;
        let ix = IndexedGraph::ingest(graph);
        let mut rng = match opts.random_seed {
            Some(seed) => rng::Lcg::new(seed),
            None => {
                tracing::debug!("no random seed given; seeding from the wall clock");
                rng::Lcg::from_time()
            }
        };
        let mut sim = Simulation::new(&ix, opts, &mut rng);

        let started = Instant::now();
        let mut iterations = 0;
        let mut stop = StopReason::Completed;
        while !ix.is_empty() && iterations < opts.iterations {
            if control.is_cancelled() {
                stop = StopReason::Cancelled;
                break;
            }
            if control.time_budget.is_some_and(|b| started.elapsed() >= b) {
                stop = StopReason::BudgetExhausted;
                break;
            }

            let mean_displacement = sim.step();
            iterations += 1;
            tracing::trace!(
                iteration = iterations,
                temperature = sim.temperature,
                mean_displacement,
                "organic iteration"
            );

            let progress = Progress {
                iteration: iterations,
                temperature: sim.temperature,
                mean_displacement,
                ids: ix.ids(),
                points: &sim.points,
            };
            if let ControlFlow::Break(()) = control.notify(&progress) {
                stop = StopReason::ObserverStopped;
                break;
            }
            if opts.converged(mean_displacement) {
                stop = StopReason::Converged;
                break;
            }
        }

        tracing::debug!(
            nodes = ix.node_count(),
            iterations,
            ?stop,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "organic layout finished"
        );
        OrganicRun {
            positions: ix.positions(sim.points.iter().copied()),
            iterations,
            stop,
            temperature: sim.temperature,
        }
    }
}
