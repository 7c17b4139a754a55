//! # API Facade
//!
//! The single entry point for cmdz operations, whatever the UI.
//!
//! [`CmdzApi`] owns the immutable [`TemplateStore`] snapshot built at startup,
//! the interactive program set from [`CmdzConfig`], and a [`CommandRunner`].
//! It resolves targets to templates and dispatches to the command layer.
//!
//! ## Generic Over CommandRunner
//!
//! - Production: `CmdzApi<ShellRunner>`
//! - Testing: `CmdzApi<RecordingRunner>`, which records instead of spawning
//!
//! ## Resolution
//!
//! A target that names an existing file is loaded from that file. Otherwise
//! it is looked up as a store key, and a target that is neither ends in
//! [`CmdzError::NotFound`](crate::error::CmdzError::NotFound). Direct loads do
//! not touch the store.

use crate::commands::{self, help::template_name, CmdResult, Plan};
use crate::config::CmdzConfig;
use crate::engine::InteractivePrograms;
use crate::error::Result;
use crate::model::{CommandTemplate, ExecutionRequest};
use crate::runner::CommandRunner;
use crate::store::{fs, ScanFailure, ScanReport, TemplateStore};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

pub struct CmdzApi<R: CommandRunner> {
    store: TemplateStore,
    failures: Vec<ScanFailure>,
    programs: InteractivePrograms,
    runner: R,
}

impl<R: CommandRunner> CmdzApi<R> {
    pub fn new(store: TemplateStore, config: &CmdzConfig, runner: R) -> Self {
        Self {
            store,
            failures: Vec::new(),
            programs: InteractivePrograms::new(&config.interactive_programs),
            runner,
        }
    }

    /// Builds the API from a scan, keeping its failures for [`CmdzApi::list`].
    pub fn from_scan(report: ScanReport, config: &CmdzConfig, runner: R) -> Self {
        let mut api = Self::new(report.store, config, runner);
        api.failures = report.failures;
        api
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.store, &self.failures)
    }

    /// Loads `target` when it is an existing file, otherwise looks it up by key.
    pub fn resolve(&self, target: &str) -> Result<Cow<'_, CommandTemplate>> {
        let path = Path::new(target);
        if path.is_file() {
            debug!(%target, "loading template from path");
            return fs::load_one(path).map(Cow::Owned);
        }
        if let Some(template) = self.store.get(target) {
            debug!(%target, "resolved from store");
            return Ok(Cow::Borrowed(template));
        }
        fs::load_one(path).map(Cow::Owned)
    }

    pub fn help(&self, target: &str) -> Result<CmdResult> {
        let template = self.resolve(target)?;
        Ok(CmdResult::default().with_help(commands::help::describe(
            &template_name(target),
            &template,
        )))
    }

    /// Validates `args` against the target and works out what would run.
    pub fn prepare<S: AsRef<str>>(&self, target: &str, args: &[S]) -> Result<CmdResult> {
        let template = self.resolve(target)?;
        let args = owned_args(args);
        let name = template_name(target);
        commands::run::plan(
            &self.programs,
            &ExecutionRequest::new(&name, &template, &args),
        )
    }

    pub fn execute(&self, plan: &Plan) -> CmdResult {
        commands::run::execute(&self.runner, plan)
    }

    /// Prepares and executes in one call.
    pub fn run<S: AsRef<str>>(&self, target: &str, args: &[S]) -> Result<CmdResult> {
        let template = self.resolve(target)?;
        let args = owned_args(args);
        let name = template_name(target);
        commands::run::run(
            &self.runner,
            &self.programs,
            &ExecutionRequest::new(&name, &template, &args),
        )
    }
}

fn owned_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter().map(|a| a.as_ref().to_string()).collect()
}

pub use crate::commands::{
    CmdMessage, Execution, HelpParameter, MessageLevel, TemplateEntry, TemplateHelp,
};
pub use crate::engine::ExecutionMode;
