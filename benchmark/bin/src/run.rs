use std::{io::Write, path::Path, time::Instant};

use tracing::warn;

use compile_bench_lib::{
    configure_invocation, create_build_dir, Benchmark, Invocation, RunError, Spawner,
    BUILD_COMMAND,
};

use crate::timings::Timings;

/// Run a [`Benchmark`] variant and record its per-trial timings.
///
/// Every trial reconfigures, cleans, then times a fresh build inside
/// `build_dir` (created if absent). Trial `i` builds with
/// `NUM_ITERATIONS = 2^(i+1)`.
pub(crate) fn run_benchmark<B: Benchmark>(
    spawner: &mut impl Spawner,
    build_dir: &Path,
    timings: &mut Timings,
) -> Result<(), RunError> {
    create_build_dir(build_dir)?;

    let clean = Invocation::parse(B::CLEAN_COMMAND)?;
    let build = Invocation::parse(BUILD_COMMAND)?;

    for i in 0..B::TRIALS {
        let num_iterations = 1_u64 << (i + 1);

        // Print the trial's iteration count.
        print!("{num_iterations:>12} ... ");
        std::io::stdout().flush().unwrap();

        // Reconfigure the project with this trial's define.
        let configure = configure_invocation::<B>(num_iterations)?;
        run_command(spawner, build_dir, &configure)?;

        // Remove the previous trial's artifact.
        run_command(spawner, build_dir, &clean)?;

        // Run/time the build.
        let now = Instant::now();
        run_command(spawner, build_dir, &build)?;
        let time = now.elapsed().as_secs_f32();

        // Print the trial timing.
        println!("{time}");
        assert!(
            timings.insert(num_iterations, time).is_none(),
            "[compile-bench]: two trials with NUM_ITERATIONS={num_iterations} - this collides the final output",
        );
    }

    Ok(())
}

/// Run one external command, logging (and otherwise ignoring) its
/// exit status.
///
/// A non-zero status is not an error: the original scripts never
/// checked exit codes, so a failed configure/clean/build still counts
/// as a trial. The status only reaches the logs.
fn run_command(
    spawner: &mut impl Spawner,
    dir: &Path,
    invocation: &Invocation,
) -> Result<(), RunError> {
    match spawner.run(dir, invocation)? {
        Some(0) => {}
        Some(code) => warn!("`{invocation}` exited with status {code}"),
        None => warn!("`{invocation}` terminated by signal"),
    }

    Ok(())
}
