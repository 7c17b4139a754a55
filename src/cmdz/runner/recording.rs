use super::{CapturedOutput, CommandRunner};
use crate::engine::ExecutionMode;
use std::cell::RefCell;
use std::io;

/// A runner that never spawns a process.
///
/// Every call is appended to [`RecordingRunner::calls`]; captured runs return
/// the scripted [`CapturedOutput`], interactive runs return its status.
/// Uses `RefCell` since cmdz is single-threaded.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<(ExecutionMode, String)>>,
    output: RefCell<CapturedOutput>,
    simulate_launch_error: RefCell<bool>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            output: RefCell::new(CapturedOutput {
                status: Some(0),
                ..CapturedOutput::default()
            }),
            ..Self::default()
        }
    }

    /// Sets the result returned by subsequent runs.
    pub fn respond_with(&self, status: Option<i32>, stdout: &str, stderr: &str) {
        *self.output.borrow_mut() = CapturedOutput {
            status,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        };
    }

    /// Makes subsequent runs fail as if the shell could not be started.
    pub fn set_simulate_launch_error(&self, simulate: bool) {
        *self.simulate_launch_error.borrow_mut() = simulate;
    }

    pub fn calls(&self) -> Vec<(ExecutionMode, String)> {
        self.calls.borrow().clone()
    }

    fn record(&self, mode: ExecutionMode, command: &str) -> io::Result<()> {
        if *self.simulate_launch_error.borrow() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "simulated launch error",
            ));
        }
        self.calls.borrow_mut().push((mode, command.to_string()));
        Ok(())
    }
}

impl CommandRunner for RecordingRunner {
    fn run_interactive(&self, command: &str) -> io::Result<Option<i32>> {
        self.record(ExecutionMode::Interactive, command)?;
        Ok(self.output.borrow().status)
    }

    fn run_captured(&self, command: &str) -> io::Result<CapturedOutput> {
        self.record(ExecutionMode::Captured, command)?;
        Ok(self.output.borrow().clone())
    }
}
