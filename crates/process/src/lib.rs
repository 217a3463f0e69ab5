//! External command invocation for the Android toolchain.
//!
//! Runs shell command strings (`gradlew assembleDebug`, `adb install ...`)
//! in an explicit working directory and hands back their exit status and
//! captured output instead of printing and swallowing failures.

mod error;
mod runner;

pub use error::CommandError;
pub use runner::{CommandOutput, log_output, run_in_dir};
