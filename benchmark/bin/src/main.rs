#![doc = include_str!("../README.md")]
#![allow(
    unused_crate_dependencies,
    unused_imports,
    reason = "this crate imports many potentially unused dependencies and items, depending on the enabled variant features"
)]

mod log;
mod print;
mod run;
mod timings;

use std::path::Path;

use cfg_if::cfg_if;

use compile_bench_lib::{ProcessSpawner, BUILD_DIR};

/// What `main()` does:
/// 1. Run all enabled benchmark variants
/// 2. Record per-trial build timings
/// 3. Print timing data
///
/// To add a new variant to be ran here:
/// 1. Copy + paste a `cfg_if` block
/// 2. Change it to your variant's feature flag
/// 3. Change it to your variant's type
#[allow(
    clippy::allow_attributes,
    unused_variables,
    unused_mut,
    unreachable_code,
    reason = "clippy does not account for all cfg()s"
)]
fn main() -> anyhow::Result<()> {
    log::init_logger();

    let mut timings = timings::Timings::new();
    let mut spawner = ProcessSpawner;

    cfg_if! {
        if #[cfg(not(any(feature = "flat-map", feature = "unique-ptr")))] {
            println!("No variant specified. Use `--features $VARIANT_FEATURE` when building.");
            return Ok(());
        }
    }

    cfg_if! {
        if #[cfg(feature = "flat-map")] {
            run::run_benchmark::<compile_bench_flat_map::FlatMap>(
                &mut spawner,
                Path::new(BUILD_DIR),
                &mut timings,
            )?;
        }
    }

    cfg_if! {
        if #[cfg(feature = "unique-ptr")] {
            run::run_benchmark::<compile_bench_unique_ptr::UniquePtr>(
                &mut spawner,
                Path::new(BUILD_DIR),
                &mut timings,
            )?;
        }
    }

    print::print_timings(&timings);

    Ok(())
}
