#![doc = include_str!("../README.md")]

mod benchmark;
mod error;
mod fs;
mod invocation;
mod spawner;

pub use benchmark::Benchmark;
pub use error::RunError;
pub use fs::create_build_dir;
pub use invocation::{configure_invocation, define_token, Invocation, NUM_ITERATIONS_DEFINE};
pub use spawner::{ProcessSpawner, Spawner};

/// The directory holding per-trial build outputs,
/// created next to the driver's working directory.
pub const BUILD_DIR: &str = "num_iterations";

/// The tool used to (re)configure the project before each trial.
pub const CONFIGURE_TOOL: &str = "qmake-qt4";

/// The build command timed by each trial.
pub const BUILD_COMMAND: &str = "make -j4";
