#![doc = include_str!("../README.md")]

use compile_bench_lib::Benchmark;

/// Marker struct that implements [`Benchmark`].
pub struct UniquePtr;

// This variant will be run by `compile-bench`.
//
// 10 trials, so the largest build instantiates the
// `dunique_ptr<A>` template 2^10 = 1024 times. The project has no
// separate artifact worth deleting by hand here, a `make clean`
// resets the build instead.
impl Benchmark for UniquePtr {
    const PROJECT_FILE: &'static str = "../compile_time.pro";
    const MKSPEC: &'static str = "unsupported/linux-clang";
    const DEFINES: &'static [&'static str] = &["COMPILE_UNIQUE_PTR"];
    const CLEAN_COMMAND: &'static str = "make clean";
    const TRIALS: u32 = 10;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn largest_trial_is_1024_iterations() {
        assert_eq!(1_u64 << UniquePtr::TRIALS, 1024);
    }
}
