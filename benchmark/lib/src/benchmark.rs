//---------------------------------------------------------------------------------------------------- trait Benchmark
/// A compile-time benchmark variant and its build parameters.
///
/// Each implementor corresponds to one of the original benchmark
/// scripts: everything that varied between them is an associated
/// constant here, everything that didn't lives in the driver.
pub trait Benchmark {
    /// The qmake project file, relative to [`crate::BUILD_DIR`].
    const PROJECT_FILE: &'static str;

    /// The qmake mkspec passed via `-spec`.
    const MKSPEC: &'static str;

    /// Defines enabled for every trial, before the
    /// per-trial `NUM_ITERATIONS` define is appended.
    ///
    /// Tokens must not contain whitespace, see [`crate::Invocation`].
    const DEFINES: &'static [&'static str];

    /// Command removing the previous trial's build artifact,
    /// e.g. `rm main.o` or `make clean`.
    const CLEAN_COMMAND: &'static str;

    /// Number of trials.
    ///
    /// Trial `i` (0-based) builds with `NUM_ITERATIONS = 2^(i+1)`.
    const TRIALS: u32;
}
