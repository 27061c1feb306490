//Tolerance used when comparing computed values against closed forms in tests
pub const DEFAULT_TEST_THRESH : f64 = 0.000000001f64;

//Loose tolerance for Monte-Carlo moment checks
pub const MOMENT_TEST_THRESH : f64 = 0.1f64;

pub const NUM_MOMENT_SAMPLES : usize = 20000;

//Added to the magnitude of random diagonals so that test factors stay well-conditioned
pub const TEST_DIAGONAL_OFFSET : f64 = 0.5f64;

pub const DEFAULT_TEST_SEED : u64 = 1337;
