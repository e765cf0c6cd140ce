//! Strategy selection and limits.

/// Default cap on candidate pairs the exact matcher will sort.
pub const DEFAULT_MATCH_BUDGET: usize = 2_000_000;

/// Default cap on `n * m` for the quadratic-time fallback under [`Strategy::Auto`].
pub const DEFAULT_MAX_FALLBACK_CELLS: usize = 16_777_216;

/// Which algorithm aligns the residual middle of two sequences.
///
/// | Strategy | Optimal | Time | Extra space |
/// |----------|---------|------|-------------|
/// | `Exact` | yes | O((r + n) log n) | O(r + m) |
/// | `LinearSpace` | yes | O(n * m) | O(m) |
/// | `Bidirectional` | yes | O((n + m) * d) | O(n + m) |
/// | `Greedy` | no | O(n * m) worst | O(1) |
/// | `Auto` | yes | depends on input | depends on input |
///
/// `r` is the number of candidate match pairs, `d` the edit distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Hunt-Szymanski, falling back to `LinearSpace` past the match budget
    #[default]
    Exact,
    /// Hirschberg divide and conquer
    LinearSpace,
    /// Myers middle-snake search
    Bidirectional,
    /// Single-pass heuristic
    Greedy,
    /// `Exact`, falling back to `LinearSpace` or `Bidirectional` by size
    Auto,
}

/// Configuration for a [`Differ`](crate::Differ).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    /// Algorithm for the untrimmed middle.
    /// Default: [`Strategy::Exact`]
    pub strategy: Strategy,
    /// Maximum candidate pairs before the exact matcher gives up.
    /// Default: 2,000,000
    pub match_budget: usize,
    /// Largest residual `n * m` that `Auto` hands to the quadratic fallback.
    /// Default: 16,777,216
    pub max_fallback_cells: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            match_budget: DEFAULT_MATCH_BUDGET,
            max_fallback_cells: DEFAULT_MAX_FALLBACK_CELLS,
        }
    }
}

impl DiffConfig {
    /// Create config with the given strategy and default limits.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy, ..Self::default() }
    }

    /// Create config for large inputs (higher limits, size-based fallback).
    pub fn large() -> Self {
        Self {
            strategy: Strategy::Auto,
            match_budget: 20_000_000,
            max_fallback_cells: 268_435_456,
        }
    }

    /// Create config for small inputs (lower limits, earlier fallback).
    pub fn small() -> Self {
        Self {
            strategy: Strategy::Auto,
            match_budget: 100_000,
            max_fallback_cells: 1_048_576,
        }
    }

    /// Set the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the exact matcher's candidate budget.
    pub fn with_match_budget(mut self, match_budget: usize) -> Self {
        self.match_budget = match_budget;
        self
    }

    /// Set the `Auto` fallback threshold.
    pub fn with_max_fallback_cells(mut self, max_fallback_cells: usize) -> Self {
        self.max_fallback_cells = max_fallback_cells;
        self
    }
}
