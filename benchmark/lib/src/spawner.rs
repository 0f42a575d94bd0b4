//! The seam between the driver loop and real external processes.

//---------------------------------------------------------------------------------------------------- Use
use std::{path::Path, process::Command};

use crate::{Invocation, RunError};

//---------------------------------------------------------------------------------------------------- trait Spawner
/// Runs external commands to completion.
///
/// The driver loop is generic over this so tests can substitute a
/// recording mock for the real [`ProcessSpawner`].
pub trait Spawner {
    /// Run `invocation` inside `dir` and wait for it to exit.
    ///
    /// Returns the exit code, or `None` if the process was terminated
    /// by a signal. The driver does not branch on the code, it only
    /// logs it.
    ///
    /// # Errors
    /// Errors if the process could not be spawned at all.
    fn run(&mut self, dir: &Path, invocation: &Invocation) -> Result<Option<i32>, RunError>;
}

//---------------------------------------------------------------------------------------------------- ProcessSpawner
/// The real [`Spawner`], backed by [`std::process::Command`].
///
/// Stdout/stderr are inherited, the same as the original scripts:
/// configure and build output stream straight to the terminal.
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn run(&mut self, dir: &Path, invocation: &Invocation) -> Result<Option<i32>, RunError> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(dir)
            .status()
            .map_err(|source| RunError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        Ok(status.code())
    }
}
