//! Per-invocation state machine.
//!
//! ```text
//!            args == ["-h"] ──────────────▶ Help
//! request ─┤ len(args) != arity ─────────▶ ArityMismatch (+ help, status 2)
//!            otherwise ─▶ substitute ─▶ classify ─▶ Plan ─▶ execute
//! ```
//!
//! Planning and executing are separate steps so a client can show the plan
//! (the resolved command line) before an interactive child takes over the
//! terminal. [`run`] does both in one call.

use super::{help, CmdMessage, CmdResult};
use crate::engine::{
    substitute, ExecutionMode, InteractivePrograms, ARITY_MISMATCH_STATUS, LAUNCH_FAILURE_STATUS,
};
use crate::error::{CmdzError, Result};
use crate::model::ExecutionRequest;
use crate::runner::CommandRunner;
use tracing::debug;

/// A fully substituted command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub command: String,
    pub mode: ExecutionMode,
}

/// What happened when a plan ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub command: String,
    pub mode: ExecutionMode,
    pub status: i32,
    /// Empty in interactive mode.
    pub stdout: String,
    /// Empty in interactive mode.
    pub stderr: String,
}

/// Decides what an invocation does, without running anything.
pub fn plan(programs: &InteractivePrograms, request: &ExecutionRequest) -> Result<CmdResult> {
    let template = request.template;

    if request.is_help() {
        return Ok(CmdResult::default().with_help(help::describe(request.name, template)));
    }

    let expected = template.arity();
    let actual = request.args.len();
    if actual != expected {
        debug!(template = request.name, expected, actual, "argument count mismatch");
        let mut result = CmdResult::default()
            .with_help(help::describe(request.name, template))
            .with_exit_code(ARITY_MISMATCH_STATUS);
        result.add_message(CmdMessage::error(format!(
            "Error: {} parameter(s) required, {} provided",
            expected, actual
        )));
        return Ok(result);
    }

    let command = template
        .command
        .as_deref()
        .ok_or_else(|| CmdzError::MissingCommand(request.name.to_string()))?;
    let command = substitute(command, request.args);
    let mode = programs.mode_for(&command);
    debug!(template = request.name, %command, ?mode, "planned command");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Executing: {}", command)));
    Ok(result.with_plan(Plan { command, mode }))
}

/// Runs a plan. Launch failures are reported, not returned as errors.
pub fn execute<R: CommandRunner>(runner: &R, plan: &Plan) -> CmdResult {
    let mut result = CmdResult::default();

    let outcome = match plan.mode {
        ExecutionMode::Interactive => runner
            .run_interactive(&plan.command)
            .map(|status| (status, String::new(), String::new())),
        ExecutionMode::Captured => runner
            .run_captured(&plan.command)
            .map(|out| (out.status, out.stdout, out.stderr)),
    };

    match outcome {
        Ok((status, stdout, stderr)) => {
            let status = status.unwrap_or_else(|| {
                result.add_message(CmdMessage::warning(
                    "Command was terminated by a signal",
                ));
                LAUNCH_FAILURE_STATUS
            });
            debug!(command = %plan.command, status, "command finished");
            result.with_execution(Execution {
                command: plan.command.clone(),
                mode: plan.mode,
                status,
                stdout,
                stderr,
            })
        }
        Err(e) => {
            debug!(command = %plan.command, error = %e, "command failed to launch");
            result.add_message(CmdMessage::error(format!("Execution failed: {}", e)));
            result.with_exit_code(LAUNCH_FAILURE_STATUS)
        }
    }
}

/// Plans and, when the plan is ready, executes in one step.
pub fn run<R: CommandRunner>(
    runner: &R,
    programs: &InteractivePrograms,
    request: &ExecutionRequest,
) -> Result<CmdResult> {
    let planned = plan(programs, request)?;
    match planned.plan.clone() {
        Some(p) => Ok(planned.merge(execute(runner, &p))),
        None => Ok(planned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::CommandTemplate;
    use crate::runner::recording::RecordingRunner;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn two_params() -> CommandTemplate {
        CommandTemplate::new("echo $1-$2")
            .with_description("Join two words")
            .with_parameter("left", "Left word")
            .with_parameter("right", "Right word")
            .with_example("cmdz join.json a b")
    }

    fn programs() -> InteractivePrograms {
        InteractivePrograms::new(["ssh", "vim"])
    }

    #[test]
    fn test_exact_arity_executes_substituted_command() {
        let runner = RecordingRunner::new();
        runner.respond_with(Some(0), "a-b\n", "");
        let template = two_params();
        let a = args(&["a", "b"]);

        let result = run(&runner, &programs(), &ExecutionRequest::new("join", &template, &a)).unwrap();

        assert_eq!(
            runner.calls(),
            vec![(ExecutionMode::Captured, "echo a-b".to_string())]
        );
        let execution = result.execution.unwrap();
        assert_eq!(execution.command, "echo a-b");
        assert_eq!(execution.stdout, "a-b\n");
        assert_eq!(result.exit_code, Some(0));
        assert!(result.plan.is_none());
        assert_eq!(result.messages, vec![CmdMessage::info("Executing: echo a-b")]);
    }

    #[test]
    fn test_too_few_and_too_many_never_execute() {
        let template = two_params();
        for values in [&["a"][..], &["a", "b", "c"][..], &[][..]] {
            let runner = RecordingRunner::new();
            let a = args(values);

            let result =
                run(&runner, &programs(), &ExecutionRequest::new("join", &template, &a)).unwrap();

            assert!(runner.calls().is_empty());
            assert!(!result.executed());
            assert_eq!(result.exit_code, Some(ARITY_MISMATCH_STATUS));
            assert!(result.help.is_some());
            assert_eq!(result.messages[0].level, MessageLevel::Error);
            assert_eq!(
                result.messages[0].content,
                format!("Error: 2 parameter(s) required, {} provided", values.len())
            );
        }
    }

    #[test]
    fn test_help_flag_never_executes() {
        let runner = RecordingRunner::new();
        let template = two_params();
        let a = args(&["-h"]);

        let result = run(&runner, &programs(), &ExecutionRequest::new("join", &template, &a)).unwrap();

        assert!(runner.calls().is_empty());
        assert!(result.exit_code.is_none());
        assert!(result.messages.is_empty());
        let help = result.help.unwrap();
        assert_eq!(help.parameters.len(), 2);
        assert_eq!(help.parameters[0].ordinal, 1);
        assert_eq!(help.example.as_deref(), Some("cmdz join.json a b"));
        assert_eq!(help.command.as_deref(), Some("echo $1-$2"));
    }

    #[test]
    fn test_help_flag_on_single_parameter_template_shows_help() {
        // "-h" is never passed through as a value, even when arity is 1.
        let runner = RecordingRunner::new();
        let template = CommandTemplate::new("echo $1").with_parameter("msg", "x");
        let a = args(&["-h"]);

        let result = run(&runner, &programs(), &ExecutionRequest::new("echo", &template, &a)).unwrap();
        assert!(runner.calls().is_empty());
        assert!(result.help.is_some());
    }

    #[test]
    fn test_help_flag_with_other_args_is_arity_mismatch() {
        let runner = RecordingRunner::new();
        let template = CommandTemplate::new("echo $1");
        let a = args(&["-h", "x"]);

        let result = run(&runner, &programs(), &ExecutionRequest::new("echo", &template, &a)).unwrap();
        assert!(runner.calls().is_empty());
        assert_eq!(result.exit_code, Some(ARITY_MISMATCH_STATUS));
    }

    #[test]
    fn test_interactive_command_runs_attached() {
        let runner = RecordingRunner::new();
        runner.respond_with(Some(130), "ignored", "ignored");
        let template = CommandTemplate::new("SSH $1").with_parameter("host", "Host");
        let a = args(&["box"]);

        let result = run(&runner, &programs(), &ExecutionRequest::new("ssh", &template, &a)).unwrap();

        assert_eq!(
            runner.calls(),
            vec![(ExecutionMode::Interactive, "SSH box".to_string())]
        );
        let execution = result.execution.unwrap();
        assert_eq!(execution.status, 130);
        assert!(execution.stdout.is_empty());
        assert!(execution.stderr.is_empty());
    }

    #[test]
    fn test_classification_uses_substituted_command() {
        let runner = RecordingRunner::new();
        let template = CommandTemplate::new("$1 file.txt").with_parameter("editor", "Editor");
        let a = args(&["vim"]);

        run(&runner, &programs(), &ExecutionRequest::new("edit", &template, &a)).unwrap();
        assert_eq!(runner.calls()[0].0, ExecutionMode::Interactive);
    }

    #[test]
    fn test_child_failure_status_is_passed_through() {
        let runner = RecordingRunner::new();
        runner.respond_with(Some(42), "", "boom\n");
        let template = CommandTemplate::new("false");

        let result = run(&runner, &programs(), &ExecutionRequest::new("f", &template, &[])).unwrap();
        assert_eq!(result.exit_code, Some(42));
        assert_eq!(result.execution.unwrap().stderr, "boom\n");
    }

    #[test]
    fn test_signal_termination_reports_failure_status() {
        let runner = RecordingRunner::new();
        runner.respond_with(None, "", "");
        let template = CommandTemplate::new("sleep 100");

        let result = run(&runner, &programs(), &ExecutionRequest::new("s", &template, &[])).unwrap();
        assert_eq!(result.exit_code, Some(LAUNCH_FAILURE_STATUS));
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn test_launch_error_is_reported_with_sentinel() {
        let runner = RecordingRunner::new();
        runner.set_simulate_launch_error(true);
        let template = CommandTemplate::new("echo hi");

        let result = run(&runner, &programs(), &ExecutionRequest::new("e", &template, &[])).unwrap();
        assert_eq!(result.exit_code, Some(LAUNCH_FAILURE_STATUS));
        assert!(!result.executed());
        let last = result.messages.last().unwrap();
        assert_eq!(last.level, MessageLevel::Error);
        assert!(last.content.starts_with("Execution failed:"));
    }

    #[test]
    fn test_missing_command_is_an_error() {
        let runner = RecordingRunner::new();
        let template = CommandTemplate::default().with_description("Docs only");

        let err = run(&runner, &programs(), &ExecutionRequest::new("docs", &template, &[])).unwrap_err();
        assert!(matches!(err, CmdzError::MissingCommand(name) if name == "docs"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_missing_command_still_has_help() {
        let template = CommandTemplate::default();
        let a = args(&["-h"]);
        let result = plan(&programs(), &ExecutionRequest::new("docs", &template, &a)).unwrap();
        assert!(result.help.unwrap().command.is_none());
    }

    #[test]
    fn test_plan_does_not_run() {
        let template = CommandTemplate::new("vim $1").with_parameter("file", "File");
        let a = args(&["notes.txt"]);

        let result = plan(&programs(), &ExecutionRequest::new("vim", &template, &a)).unwrap();
        assert_eq!(
            result.plan,
            Some(Plan {
                command: "vim notes.txt".to_string(),
                mode: ExecutionMode::Interactive,
            })
        );
        assert!(result.exit_code.is_none());
        assert!(!result.executed());
    }

    #[test]
    fn test_injected_placeholder_is_substituted_again() {
        let runner = RecordingRunner::new();
        let template = two_params();
        let a = args(&["$2", "b"]);

        run(&runner, &programs(), &ExecutionRequest::new("join", &template, &a)).unwrap();
        assert_eq!(runner.calls()[0].1, "echo b-b");
    }
}
