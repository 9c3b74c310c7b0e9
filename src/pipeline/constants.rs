/// Calories every meal is rescaled to before comparing macros.
pub const BASE_FACTOR: u32 = 100;

/// Smallest combination size generated when none is given.
pub const DEFAULT_MIN_DEPTH: usize = 1;

/// Tolerance used when checking derived totals against their parts.
pub const SUM_TOLERANCE: f64 = 1e-9;
