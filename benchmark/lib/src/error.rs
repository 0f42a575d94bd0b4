use std::path::PathBuf;

/// An unrecoverable error in the benchmark driver.
///
/// A spawned command exiting non-zero is deliberately _not_ in here:
/// the original scripts never looked at exit statuses and a faithful
/// driver records the trial's timing regardless. Only failures that
/// would have killed the original script (a missing executable, an
/// unwritable build directory) surface as errors.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A command template tokenized to nothing.
    #[error("empty command line")]
    EmptyCommandLine,

    /// A define token would be split by whitespace tokenization.
    #[error("define token contains whitespace: `{0}`")]
    WhitespaceInToken(String),

    /// The build directory could not be created.
    #[error("failed to create build directory `{}`: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An external command could not be spawned at all.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}
