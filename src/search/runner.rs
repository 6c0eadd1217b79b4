//! The search driver: builds paths edge by edge and restarts for
//! alternative routes.
//!
//! [`SearchRunner`] exclusively owns the three working sets (`open`,
//! `closed`, the committed route) and the cost accumulators; nothing else
//! mutates them. One call to [`run`](SearchRunner::run) executes a whole
//! run: repeated attempts from the start node until no alternative routes
//! remain.
//!
//! A quirk worth knowing before reading on: `closed` persists across
//! attempts within a run. Every edge an attempt commits stays excluded
//! from later attempts' successor discovery, so the run walks a
//! monotonically shrinking graph rather than performing independent
//! searches. That behavior is deliberate and pinned by tests.

use miette::Diagnostic;
use thiserror::Error;

use crate::edge::Edge;
use crate::event_bus::{EmitterError, Event, EventEmitter};
use crate::graph::RouteMap;
use crate::sets::{EdgeSet, Route};
use crate::types::Weight;

use super::config::SearchConfig;
use super::selector::select_lowest;
use super::successors::find_successors;

/// Errors that abort a run.
///
/// A dead end is *not* an error — it is the normal terminal outcome of one
/// attempt. These variants signal inconsistent state or exhausted budgets,
/// after which continuing would build on broken invariants.
#[derive(Debug, Error, Diagnostic)]
pub enum SearchError {
    /// A commit tried to remove an edge that is not in the open set.
    #[error("edge {edge} is not in the open set")]
    #[diagnostic(
        code(wayfinder::search::missing_from_open),
        help("Commits only apply to edges previously discovered as successors; this is a driver logic error.")
    )]
    MissingFromOpen { edge: Edge },

    /// A commit tried to close an edge that is already closed.
    #[error("edge {edge} is already committed")]
    #[diagnostic(code(wayfinder::search::already_closed))]
    AlreadyClosed { edge: Edge },

    /// A commit tried to route an edge the route already contains.
    #[error("edge {edge} is already part of the route")]
    #[diagnostic(code(wayfinder::search::already_routed))]
    AlreadyRouted { edge: Edge },

    /// The bounded-steps safety valve fired.
    #[error("search exceeded the step limit of {limit}")]
    #[diagnostic(
        code(wayfinder::search::step_limit),
        help("The greedy walk does not terminate on every graph; raise SearchConfig::max_steps if the graph is legitimately this large.")
    )]
    StepLimitExceeded { limit: usize },

    /// Event reporting failed.
    #[error("event bus error: {0}")]
    #[diagnostic(code(wayfinder::search::event_bus))]
    Emit(#[from] EmitterError),
}

/// Outcome of a single search step.
enum StepFlow {
    /// The path was extended; keep searching.
    Continue,
    /// The finish node was reached.
    Finished,
    /// No viable successor from the frontier.
    DeadEnd,
}

/// Terminal state of one attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptEnd {
    /// The attempt reached the finish node.
    Finished,
    /// The attempt ran out of successors before reaching the finish.
    DeadEnd,
}

/// One reported path: the route of a single attempt with positive cost.
///
/// Dead-ended attempts that accumulated cost are reported exactly like
/// finished ones; `reached_finish` tells them apart.
#[derive(Clone, Debug)]
pub struct DiscoveredPath {
    /// 1-based attempt number within the run.
    pub attempt: u64,
    /// Committed edges in path order, the start self-loop first.
    pub edges: Vec<Edge>,
    /// Sum of the committed weights.
    pub total_cost: Weight,
    /// Whether the attempt ended on the finish node.
    pub reached_finish: bool,
}

/// Summary of a completed run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Correlation id from the configuration.
    pub run_id: String,
    /// Attempts executed, including a final zero-cost dead end if any.
    pub attempts: u64,
    /// Inner steps executed across all attempts.
    pub steps: usize,
    /// Paths discovered, in attempt order.
    pub paths: Vec<DiscoveredPath>,
}

/// Drives repeated search attempts over one [`RouteMap`].
///
/// # Examples
///
/// ```rust
/// use wayfinder::event_bus::EventBus;
/// use wayfinder::graph::RouteMap;
/// use wayfinder::search::{SearchConfig, SearchRunner};
///
/// let config = SearchConfig::new(1, 3);
/// let map = RouteMap::from_rows(
///     config.edge_bias,
///     [(1u64, 2u64, 2u64, "a"), (2, 3, 1, "b")],
/// )
/// .unwrap();
///
/// let bus = EventBus::default();
/// let report = SearchRunner::new(&map, config, bus.sender()).run().unwrap();
/// bus.drain();
///
/// assert_eq!(report.paths[0].total_cost, 3);
/// assert!(report.paths[0].reached_finish);
/// ```
pub struct SearchRunner<'a, E: EventEmitter> {
    map: &'a RouteMap,
    config: SearchConfig,
    events: E,
    open: EdgeSet,
    closed: EdgeSet,
    best: Route,
    frontier: Edge,
    current_cost: Weight,
    total_cost: Weight,
    attempt: u64,
    steps: usize,
}

impl<'a, E: EventEmitter> SearchRunner<'a, E> {
    /// Creates a runner with `closed` and the route seeded by the synthetic
    /// start self-loop.
    #[must_use]
    pub fn new(map: &'a RouteMap, config: SearchConfig, events: E) -> Self {
        let start_loop = Edge::start_loop(config.start);
        let mut closed = EdgeSet::new(config.edge_bias);
        closed.insert(start_loop.clone());
        Self {
            map,
            open: EdgeSet::new(config.edge_bias),
            closed,
            best: Route::seeded(start_loop.clone()),
            frontier: start_loop,
            current_cost: 0,
            total_cost: 0,
            attempt: 0,
            steps: 0,
            config,
            events,
        }
    }

    /// Runs attempts until no alternative routes remain from the start.
    ///
    /// After each attempt the route is reported when its accumulated cost
    /// is positive. The run ends when `open` is empty after an attempt.
    ///
    /// # Errors
    ///
    /// Invariant violations during commit and the step-limit safety valve
    /// abort the run; see [`SearchError`].
    pub fn run(mut self) -> Result<RunReport, SearchError> {
        let mut paths = Vec::new();
        loop {
            self.attempt += 1;
            let end = self.run_attempt()?;
            if self.total_cost > 0 {
                let path = DiscoveredPath {
                    attempt: self.attempt,
                    edges: self.best.edges().to_vec(),
                    total_cost: self.total_cost,
                    reached_finish: end == AttemptEnd::Finished,
                };
                self.emit(Event::path(
                    self.attempt,
                    path.edges.clone(),
                    path.total_cost,
                    path.reached_finish,
                ))?;
                paths.push(path);
            }
            if self.open.is_empty() {
                // Every road from the start has been tried.
                break;
            }
            self.reset_attempt();
        }
        self.emit(Event::diagnostic(
            "run",
            format!(
                "no more attempts: {} path(s) discovered in {} attempt(s)",
                paths.len(),
                self.attempt
            ),
        ))?;
        tracing::debug!(
            run_id = %self.config.run_id,
            attempts = self.attempt,
            paths = paths.len(),
            "run complete"
        );
        Ok(RunReport {
            run_id: self.config.run_id.clone(),
            attempts: self.attempt,
            steps: self.steps,
            paths,
        })
    }

    /// Executes one attempt to completion.
    fn run_attempt(&mut self) -> Result<AttemptEnd, SearchError> {
        loop {
            match self.step()? {
                StepFlow::Continue => {}
                StepFlow::Finished => return Ok(AttemptEnd::Finished),
                StepFlow::DeadEnd => return Ok(AttemptEnd::DeadEnd),
            }
        }
    }

    /// One search step: discover, select, commit.
    fn step(&mut self) -> Result<StepFlow, SearchError> {
        self.steps += 1;
        if self.steps > self.config.max_steps {
            return Err(SearchError::StepLimitExceeded {
                limit: self.config.max_steps,
            });
        }

        self.emit(Event::snapshot(
            "best",
            self.attempt,
            self.steps,
            self.best.edges(),
            None,
        ))?;

        let found = find_successors(self.map, &self.closed, &self.frontier, &self.config);
        self.open.merge(found);
        self.emit(Event::snapshot(
            "open",
            self.attempt,
            self.steps,
            self.open.edges(),
            None,
        ))?;

        let selected = select_lowest(&self.open, &self.frontier, self.config.max_weight, &self.config);
        // Weight zero doubles as the "nothing found" sentinel: only the
        // start self-loop legitimately weighs zero, and it is never open.
        let selected = match selected {
            Some(edge) if edge.weight() > 0 => edge,
            _ => {
                self.emit(Event::search(
                    self.attempt,
                    self.steps,
                    "dead-end",
                    format!("no viable successor from {}", self.frontier),
                ))?;
                return Ok(StepFlow::DeadEnd);
            }
        };

        if selected.dest() == self.config.finish {
            self.total_cost += selected.weight();
            self.commit(selected.clone())?;
            self.emit(Event::search(
                self.attempt,
                self.steps,
                "finished",
                format!("reached {} via {selected}", selected.dest()),
            ))?;
            return Ok(StepFlow::Finished);
        }

        self.current_cost = self.best.total_weight();
        self.total_cost = self.current_cost + selected.weight();
        self.frontier = selected.clone();
        self.commit(selected.clone())?;
        self.emit(Event::search(
            self.attempt,
            self.steps,
            "advance",
            format!(
                "committed {selected}; cost so far {} -> {}",
                self.current_cost, self.total_cost
            ),
        ))?;
        Ok(StepFlow::Continue)
    }

    /// Moves an edge from `open` into `closed` and the route.
    ///
    /// The three mutations stand or fall together: any failure aborts path
    /// construction with the state untouched beyond the failing point.
    fn commit(&mut self, edge: Edge) -> Result<(), SearchError> {
        if !self.open.remove(&edge) {
            return Err(SearchError::MissingFromOpen { edge });
        }
        if !self.closed.insert(edge.clone()) {
            return Err(SearchError::AlreadyClosed { edge });
        }
        if !self.best.push(edge.clone()) {
            return Err(SearchError::AlreadyRouted { edge });
        }
        tracing::trace!(%edge, "edge committed to route");
        Ok(())
    }

    /// Rewinds to the start node for another attempt.
    ///
    /// `open` and the route are discarded and re-seeded; `closed` is kept,
    /// so edges committed by earlier attempts stay out of play.
    fn reset_attempt(&mut self) {
        let start_loop = Edge::start_loop(self.config.start);
        self.open.clear();
        self.best = Route::seeded(start_loop.clone());
        self.frontier = start_loop;
        self.current_cost = 0;
        self.total_cost = 0;
    }

    fn emit(&self, event: Event) -> Result<(), EmitterError> {
        self.events.emit(event)
    }
}
