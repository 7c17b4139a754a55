//! # Process Runners
//!
//! The [`CommandRunner`] trait is the seam between the execution engine and the
//! operating system. The engine decides *what* to run and *how* (interactive or
//! captured); the runner only hands the string to a shell.
//!
//! - [`shell::ShellRunner`]: production runner, `sh -c` (or `cmd /C` on Windows)
//! - [`recording::RecordingRunner`]: test runner that records commands and
//!   returns scripted results, without spawning anything
//!
//! Both calls block until the child exits. There is no timeout.

use std::io;

pub mod shell;

#[cfg(any(test, feature = "test_utils"))]
pub mod recording;

/// Output of a child whose streams were captured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// `None` when the child was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub trait CommandRunner {
    /// Runs `command` attached to the current terminal and returns its exit code.
    fn run_interactive(&self, command: &str) -> io::Result<Option<i32>>;

    /// Runs `command` with stdout and stderr collected as text.
    fn run_captured(&self, command: &str) -> io::Result<CapturedOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run_interactive(&self, command: &str) -> io::Result<Option<i32>> {
        (**self).run_interactive(command)
    }

    fn run_captured(&self, command: &str) -> io::Result<CapturedOutput> {
        (**self).run_captured(command)
    }
}
