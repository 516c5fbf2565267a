//! Routing trait and the frontier-expansion search.
//!
//! # Algorithm
//!
//! The search is a breadth-first, time-indexed relative of Dijkstra.  It keeps
//! a frontier of candidate paths instead of a priority queue, so edge costs
//! can depend on *when* a leg is sailed:
//!
//! 1. A path whose last cell is the finish is *settled*: it is carried into
//!    the next frontier unchanged.
//! 2. Every other path is extended to each in-bounds, obstacle-free Moore
//!    neighbour (skipping cells it already visited unless repeat visits are
//!    allowed).  Each leg is timed by the oracle using the origin cell's
//!    conditions in the slice active at the path's current duration.
//! 3. Candidates identical in duration and cell sequence are merged.
//! 4. Once a settled path has been carried, the search stops as soon as the
//!    shortest settled duration equals the shortest duration anywhere in the
//!    frontier.  Durations never decrease along a path, so no unsettled path
//!    can still finish sooner.
//!
//! If that never happens within `max_iterations` rounds, or the frontier
//! empties, the result is [`TimedPath::not_found`].
//!
//! # Determinism
//!
//! Frontier order is fixed by the order paths were created, neighbours are
//! visited in [`surround`]'s fixed order, and the first shortest settled path
//! wins.  Identical inputs give identical output.

use log::{debug, info, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use sr_core::GridCoord;
use sr_grid::surround;
use sr_polar::PerformanceOracle;

use crate::frontier::{NodeIdx, PathArena, PathNode};
use crate::{Pruning, RouterConfig, RoutingProblem, TimedPath};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync` so one router can be shared by
/// searches running on several threads; each call owns its working state.
pub trait Router: Send + Sync {
    /// Compute the minimum-time route for `problem`.
    ///
    /// Never fails: when no route is certified the result has an empty
    /// `path` (check [`TimedPath::is_found`]).
    fn route(&self, problem: &RoutingProblem, oracle: &dyn PerformanceOracle) -> TimedPath;
}

// ── Search statistics ─────────────────────────────────────────────────────────

/// Why a search stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A settled path was proven shortest.
    Optimal,
    /// The shortest settled path among those [`Pruning::CellSlice`] kept.
    /// A dropped candidate may have finished sooner.
    Pruned,
    /// `max_iterations` rounds ran without a proof.
    IterationCap,
    /// Every candidate dead-ended before the finish was proven.
    Exhausted,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchStats {
    /// Expansion rounds performed.
    pub iterations:    u32,
    /// Largest frontier seen after merging.
    pub peak_frontier: usize,
    /// Candidate paths created, including the start.
    pub arena_nodes:   usize,
    pub outcome:       SearchOutcome,
}

// ── FrontierRouter ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct FrontierRouter {
    pub config: RouterConfig,
}

impl Router for FrontierRouter {
    fn route(&self, problem: &RoutingProblem, oracle: &dyn PerformanceOracle) -> TimedPath {
        self.route_with_stats(problem, oracle).0
    }
}

/// Run [`FrontierRouter`] with the default [`RouterConfig`].
pub fn minimum_time_route(problem: &RoutingProblem, oracle: &dyn PerformanceOracle) -> TimedPath {
    FrontierRouter::default().route(problem, oracle)
}

/// Identity of a frontier entry.
///
/// Every frontier entry's parent is itself a unique frontier path from the
/// previous round, so `(parent, last cell, duration)` identifies the whole
/// `(duration, cell sequence)` pair without walking it.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
struct FrontierKey {
    parent:        Option<NodeIdx>,
    coord:         GridCoord,
    duration_bits: u64,
}

impl FrontierKey {
    fn of(node: &PathNode) -> Self {
        Self {
            parent:        node.parent,
            coord:         node.coord,
            duration_bits: node.duration.to_bits(),
        }
    }
}

impl FrontierRouter {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Like [`Router::route`], also reporting how the search went.
    pub fn route_with_stats(
        &self,
        problem: &RoutingProblem,
        oracle:  &dyn PerformanceOracle,
    ) -> (TimedPath, SearchStats) {
        let finish = problem.finish();
        let pruning = self.config.pruning;

        if problem.start_index() != 0 {
            debug!(
                "start_index {} is stored but slice selection starts at slice 0",
                problem.start_index()
            );
        }

        let mut arena = PathArena::new();
        let root = arena.root(problem.start());
        let mut frontier: Vec<NodeIdx> = vec![root];

        // Best arrival per (cell, slice); only maintained under CellSlice.
        let mut best_arrival: FxHashMap<(GridCoord, usize), f64> = FxHashMap::default();
        if pruning == Pruning::CellSlice {
            best_arrival.insert((problem.start(), problem.slice_index(0.0)), 0.0);
        }

        let mut stats = SearchStats {
            iterations:    0,
            peak_frontier: 1,
            arena_nodes:   1,
            outcome:       SearchOutcome::IterationCap,
        };
        let mut reached = false;

        for iteration in 1..=self.config.max_iterations {
            stats.iterations = iteration;

            let mut next: Vec<NodeIdx> = Vec::with_capacity(frontier.len() * 2);
            let mut seen: FxHashSet<FrontierKey> = FxHashSet::default();

            for &idx in &frontier {
                let node = *arena.get(idx);

                if node.coord == finish {
                    reached = true;
                    if seen.insert(FrontierKey::of(&node)) {
                        next.push(idx);
                    }
                    continue;
                }

                let slice = problem.active_slice(node.duration);
                let here = slice.get(node.coord);

                for coord in surround(node.coord, slice, problem.obstacles()) {
                    if !problem.allow_repeat_visits() && arena.visits(idx, coord) {
                        continue;
                    }

                    let there = slice.get(coord);
                    let minutes = oracle.segment_time(&here.surface, here.position, there.position);
                    let duration = node.duration + minutes;

                    let key = FrontierKey {
                        parent:        Some(idx),
                        coord,
                        duration_bits: duration.to_bits(),
                    };
                    if !seen.insert(key) {
                        continue;
                    }

                    if pruning == Pruning::CellSlice {
                        let cell_slice = (coord, problem.slice_index(duration));
                        match best_arrival.get(&cell_slice) {
                            Some(&best) if best <= duration => continue,
                            _ => {
                                best_arrival.insert(cell_slice, duration);
                            }
                        }
                    }

                    next.push(arena.extend(idx, coord, minutes));
                }
            }

            frontier = next;
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
            stats.arena_nodes = arena.len();
            debug!(
                "iteration {iteration}: frontier {} paths, {} created",
                frontier.len(),
                arena.len()
            );

            if frontier.is_empty() {
                stats.outcome = SearchOutcome::Exhausted;
                break;
            }

            if reached {
                if let Some(best) = certified_best(&arena, &frontier, finish) {
                    stats.outcome = match pruning {
                        Pruning::ExactDuplicates => SearchOutcome::Optimal,
                        Pruning::CellSlice => SearchOutcome::Pruned,
                    };
                    let path = arena.to_timed_path(best);
                    info!(
                        "route found ({:?}): {:.4} min over {} legs after {iteration} iterations (peak frontier {})",
                        stats.outcome,
                        path.duration,
                        path.legs(),
                        stats.peak_frontier
                    );
                    return (path, stats);
                }
            }
        }

        match stats.outcome {
            SearchOutcome::Exhausted => info!(
                "no route from {} to {}: every candidate dead-ended after {} iterations",
                problem.start(),
                finish,
                stats.iterations
            ),
            _ => warn!(
                "no route certified from {} to {} within {} iterations (peak frontier {})",
                problem.start(),
                finish,
                self.config.max_iterations,
                stats.peak_frontier
            ),
        }
        (TimedPath::not_found(self.config.failure_duration), stats)
    }
}

/// First settled path with the shortest settled duration, provided nothing in
/// the frontier is shorter.
fn certified_best(arena: &PathArena, frontier: &[NodeIdx], finish: GridCoord) -> Option<NodeIdx> {
    let mut global_min = f64::INFINITY;
    let mut best: Option<(NodeIdx, f64)> = None;

    for &idx in frontier {
        let node = arena.get(idx);
        global_min = global_min.min(node.duration);
        if node.coord == finish {
            match best {
                Some((_, d)) if d <= node.duration => {}
                _ => best = Some((idx, node.duration)),
            }
        }
    }

    match best {
        Some((idx, finished_min)) if finished_min == global_min => Some(idx),
        _ => None,
    }
}
