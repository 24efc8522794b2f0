//! Cooperative control over a running organic layout: cancellation, wall-time budgets and a
//! per-iteration progress observer.

use seagrass_graph::{Point, Positions};
use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared cancellation token. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Why a run stopped. Every variant comes with usable positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// All configured iterations ran.
    Completed,
    /// Mean displacement fell below `threshold`.
    Converged,
    Cancelled,
    BudgetExhausted,
    /// The progress observer returned `ControlFlow::Break`.
    ObserverStopped,
}

/// Snapshot handed to the observer after each finished iteration.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// 1-based count of finished iterations.
    pub iteration: usize,
    /// Temperature after cooling.
    pub temperature: f64,
    pub mean_displacement: f64,
    pub ids: &'a [String],
    /// Current coordinates, indexed like `ids`.
    pub points: &'a [Point],
}

impl Progress<'_> {
    pub fn positions(&self) -> Positions {
        self.ids
            .iter()
            .cloned()
            .zip(self.points.iter().copied())
            .collect()
    }
}

type Observer<'a> = Box<dyn FnMut(&Progress<'_>) -> ControlFlow<()> + 'a>;

/// Checked between iterations, never inside one.
#[derive(Default)]
pub struct RunControl<'a> {
    pub cancel: Option<CancelFlag>,
    pub time_budget: Option<Duration>,
    observer: Option<Observer<'a>>,
}

impl<'a> RunControl<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&Progress<'_>) -> ControlFlow<()> + 'a,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }

    pub(crate) fn notify(&mut self, progress: &Progress<'_>) -> ControlFlow<()> {
        match self.observer.as_mut() {
            Some(observer) => observer(progress),
            None => ControlFlow::Continue(()),
        }
    }
}

impl fmt::Debug for RunControl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunControl")
            .field("cancel", &self.cancel)
            .field("time_budget", &self.time_budget)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
