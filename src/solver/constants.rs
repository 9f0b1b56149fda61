// Progress reporting cadence: first report after this many expansions,
// then each threshold is the previous one times GROWTH_NUM / GROWTH_DEN
pub const FIRST_PROGRESS_REPORT: usize = 100;
pub const PROGRESS_GROWTH_NUM: usize = 3;
pub const PROGRESS_GROWTH_DEN: usize = 2;

// CLI defaults
pub const DEFAULT_SEEDS: [&str; 2] = ["69", "420"];
pub const DEFAULT_TARGET: &str = "2017";
