/// Benchmark timing data.
///
/// - Key = `NUM_ITERATIONS` value of the trial (a power of two)
/// - Value = wall-clock time of the `make -j4` step in seconds
///
/// A `BTreeMap` so the final report iterates in ascending key order
/// for free.
pub(crate) type Timings = std::collections::BTreeMap<u64, f32>;
