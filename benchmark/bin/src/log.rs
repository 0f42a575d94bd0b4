use cfg_if::cfg_if;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// The driver's max log level, picked at compile time by cargo
/// feature (see the README), `info` when none is enabled.
const LOG_LEVEL: Level = {
    cfg_if! {
        if #[cfg(feature = "trace")] {
            Level::TRACE
        } else if #[cfg(feature = "debug")] {
            Level::DEBUG
        } else if #[cfg(feature = "info")] {
            Level::INFO
        } else if #[cfg(feature = "warn")] {
            Level::WARN
        } else if #[cfg(feature = "error")] {
            Level::ERROR
        } else {
            Level::INFO
        }
    }
};

/// Initializes the `tracing` logger for `compile-bench`.
///
/// The spawned configure/clean/build commands inherit the terminal,
/// so the driver's own log lines interleave with their output.
pub(crate) fn init_logger() {
    FmtSubscriber::builder().with_max_level(LOG_LEVEL).init();

    info!("compile-bench log level: {LOG_LEVEL}");
}
