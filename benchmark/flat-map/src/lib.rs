#![doc = include_str!("../README.md")]

use compile_bench_lib::Benchmark;

/// Marker struct that implements [`Benchmark`].
pub struct FlatMap;

// This variant will be run by `compile-bench`.
//
// 7 trials, so the largest build instantiates the
// `flat_map<int, A>` template 2^7 = 128 times.
impl Benchmark for FlatMap {
    const PROJECT_FILE: &'static str = "../compile_time.pro";
    const MKSPEC: &'static str = "unsupported/linux-clang";
    const DEFINES: &'static [&'static str] = &["COMPILE_FLAT_MAP", "BOOST_FLAT_MAP"];
    const CLEAN_COMMAND: &'static str = "rm main.o";
    const TRIALS: u32 = 7;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn largest_trial_is_128_iterations() {
        assert_eq!(1_u64 << FlatMap::TRIALS, 128);
    }
}
