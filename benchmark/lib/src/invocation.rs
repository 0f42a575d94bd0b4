//! External command lines and their tokenization.

//---------------------------------------------------------------------------------------------------- Use
use std::fmt;

use crate::{Benchmark, RunError, CONFIGURE_TOOL};

//---------------------------------------------------------------------------------------------------- Const
/// The define injected with a fresh power-of-two value each trial.
pub const NUM_ITERATIONS_DEFINE: &str = "NUM_ITERATIONS";

//---------------------------------------------------------------------------------------------------- Invocation
/// A whitespace-tokenized external command line.
///
/// Tokenization is the original scripts' naive `str.split()`: any run
/// of whitespace separates tokens and there is no quoting or escaping.
/// This is why substituted tokens (defines in particular) must not
/// contain whitespace themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// The executable name, resolved through `PATH` when spawned.
    pub program: String,
    /// Arguments, one token each.
    pub args: Vec<String>,
}

impl Invocation {
    /// Tokenize a command template.
    ///
    /// # Errors
    /// Errors if `command_line` contains no tokens at all.
    pub fn parse(command_line: &str) -> Result<Self, RunError> {
        let mut tokens = command_line.split_whitespace();

        let program = tokens.next().ok_or(RunError::EmptyCommandLine)?.to_string();
        let args = tokens.map(ToString::to_string).collect();

        Ok(Self { program, args })
    }

    /// Append a single already-substituted token.
    ///
    /// # Errors
    /// Errors if the token contains whitespace, since it would
    /// silently become multiple arguments under [`Self::parse`]'s
    /// tokenization rules.
    fn push_token(&mut self, token: String) -> Result<(), RunError> {
        if token.contains(char::is_whitespace) {
            return Err(RunError::WhitespaceInToken(token));
        }

        self.args.push(token);
        Ok(())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// The `NUM_ITERATIONS=<n>` define token for one trial.
pub fn define_token(num_iterations: u64) -> String {
    format!("{NUM_ITERATIONS_DEFINE}={num_iterations}")
}

/// The configure command for one trial of benchmark `B`.
///
/// Equivalent to the original scripts'
/// `qmake-qt4 <project> -r -spec <mkspec> DEFINES+=<...> DEFINES+=NUM_ITERATIONS=<n>`.
///
/// # Errors
/// Errors if any of `B`'s defines contains whitespace.
pub fn configure_invocation<B: Benchmark>(num_iterations: u64) -> Result<Invocation, RunError> {
    let mut invocation = Invocation::parse(&format!(
        "{CONFIGURE_TOOL} {} -r -spec {}",
        B::PROJECT_FILE,
        B::MKSPEC,
    ))?;

    for define in B::DEFINES {
        invocation.push_token(format!("DEFINES+={define}"))?;
    }
    invocation.push_token(format!("DEFINES+={}", define_token(num_iterations)))?;

    Ok(invocation)
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Dummy;

    impl Benchmark for Dummy {
        const PROJECT_FILE: &'static str = "../compile_time.pro";
        const MKSPEC: &'static str = "unsupported/linux-clang";
        const DEFINES: &'static [&'static str] = &["COMPILE_FLAT_MAP", "BOOST_FLAT_MAP"];
        const CLEAN_COMMAND: &'static str = "rm main.o";
        const TRIALS: u32 = 7;
    }

    /// Any run of whitespace separates tokens.
    #[test]
    fn parse_splits_on_whitespace_runs() {
        let invocation = Invocation::parse("make  -j4 \t clean").unwrap();
        assert_eq!(invocation.program, "make");
        assert_eq!(invocation.args, ["-j4", "clean"]);
    }

    #[test]
    fn parse_rejects_empty_command_line() {
        assert!(matches!(
            Invocation::parse("  \t "),
            Err(RunError::EmptyCommandLine)
        ));
    }

    /// The full configure line for one trial, defines in declaration
    /// order with the iteration define last.
    #[test]
    fn configure_invocation_matches_script() {
        let invocation = configure_invocation::<Dummy>(64).unwrap();
        assert_eq!(invocation.program, "qmake-qt4");
        assert_eq!(
            invocation.args,
            [
                "../compile_time.pro",
                "-r",
                "-spec",
                "unsupported/linux-clang",
                "DEFINES+=COMPILE_FLAT_MAP",
                "DEFINES+=BOOST_FLAT_MAP",
                "DEFINES+=NUM_ITERATIONS=64",
            ]
        );
    }

    #[test]
    fn define_token_format() {
        assert_eq!(define_token(1024), "NUM_ITERATIONS=1024");
    }

    #[test]
    fn whitespace_in_define_is_rejected() {
        struct BadDefine;

        impl Benchmark for BadDefine {
            const PROJECT_FILE: &'static str = "../compile_time.pro";
            const MKSPEC: &'static str = "unsupported/linux-clang";
            const DEFINES: &'static [&'static str] = &["COMPILE FLAT MAP"];
            const CLEAN_COMMAND: &'static str = "rm main.o";
            const TRIALS: u32 = 1;
        }

        assert!(matches!(
            configure_invocation::<BadDefine>(2),
            Err(RunError::WhitespaceInToken(_))
        ));
    }

    #[test]
    fn display_round_trips_simple_command() {
        let invocation = Invocation::parse("make -j4").unwrap();
        assert_eq!(invocation.to_string(), "make -j4");
    }
}
