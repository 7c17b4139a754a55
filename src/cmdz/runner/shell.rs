use super::{CapturedOutput, CommandRunner};
use std::io;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs commands through the host shell.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    fn command(&self, command: &str) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.arg(command_flag(&self.shell)).arg(command);
        cmd
    }
}

/// `cmd` takes its command after `/C`, POSIX shells after `-c`.
fn command_flag(shell: &str) -> &'static str {
    let program = shell
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(shell)
        .to_ascii_lowercase();
    if program == "cmd" || program == "cmd.exe" {
        "/C"
    } else {
        "-c"
    }
}

impl CommandRunner for ShellRunner {
    fn run_interactive(&self, command: &str) -> io::Result<Option<i32>> {
        debug!(shell = %self.shell, %command, "running interactive command");
        let status = self
            .command(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status.code())
    }

    fn run_captured(&self, command: &str) -> io::Result<CapturedOutput> {
        debug!(shell = %self.shell, %command, "running captured command");
        let output = self.command(command).output()?;
        Ok(CapturedOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
