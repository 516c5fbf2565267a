//! Search configuration.

/// How the frontier is thinned between iterations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Pruning {
    /// Drop only candidates identical in both duration and coordinate
    /// sequence.  Exhaustive; the frontier can grow combinatorially with
    /// grid size.
    #[default]
    ExactDuplicates,

    /// Additionally drop a candidate when some earlier candidate reached the
    /// same cell within the same time slice no later.  Keeps the frontier
    /// bounded by `cells × slices`.
    ///
    /// Not exact, even when every slice is constant.  The dropped candidate
    /// may arrive late enough that its next legs fall into a better slice, or
    /// (without repeat visits) it may have left cells unvisited that the
    /// kept one can no longer use.  Results are reported as
    /// [`SearchOutcome::Pruned`](crate::SearchOutcome::Pruned), never as
    /// optimal.
    CellSlice,
}

/// Parameters of one search run.
///
/// Typically embedded in the application's scenario file and passed to
/// [`FrontierRouter::new`](crate::FrontierRouter::new).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouterConfig {
    /// Expansion rounds before giving up.  Default: 1000.
    pub max_iterations: u32,

    /// Duration, in minutes, stamped on the empty path returned when no route
    /// is certified within `max_iterations`.  Default: 1000.0.
    pub failure_duration: f64,

    /// Frontier thinning rule.  Default: [`Pruning::ExactDuplicates`].
    pub pruning: Pruning,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_iterations:   1_000,
            failure_duration: 1_000.0,
            pruning:          Pruning::ExactDuplicates,
        }
    }
}

impl RouterConfig {
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_max_iterations(mut self, n: u32) -> Self {
        self.max_iterations = n;
        self
    }
}
