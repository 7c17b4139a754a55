use super::render::{
    print_execution, print_messages, render_help, render_template_list, render_usage_error,
    stdout_color,
};
use super::setup::{print_help, Cli};
use clap::Parser;
use cmdz::api::CmdzApi;
use cmdz::config::CmdzConfig;
use cmdz::error::Result;
use cmdz::runner::shell::ShellRunner;
use cmdz::store::fs::scan;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Exit status when the first argument is not a template file.
const USAGE_STATUS: i32 = 2;

const PROJECT_CONFIG_DIR: &str = ".cmdz";
const HOME_ENV: &str = "CMDZ_HOME";

struct AppContext {
    api: CmdzApi<ShellRunner>,
    config: CmdzConfig,
}

/// Parses arguments, dispatches, and returns the process exit status.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.help {
        print_help();
        return Ok(0);
    }

    let ctx = init_context(&cli)?;

    match cli.target() {
        None => handle_list(&ctx),
        Some((target, args)) if ctx.config.is_template_path(target) => {
            handle_template(&ctx, target, args)
        }
        Some((target, _)) => {
            print!(
                "{}",
                render_usage_error(target, ctx.config.get_extension(), stdout_color())
            );
            Ok(USAGE_STATUS)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = CmdzConfig::load_first(&config_dirs(&cwd))?;

    let commands_dir = match &cli.dir {
        Some(dir) => cwd.join(dir),
        None => config.commands_dir_in(&cwd),
    };
    debug!(dir = %commands_dir.display(), "scanning for templates");

    let report = scan(&commands_dir, config.get_extension());
    let runner = ShellRunner::new(config.shell.clone());
    let api = CmdzApi::from_scan(report, &config, runner);

    Ok(AppContext { api, config })
}

/// Config lookup order: the project's `.cmdz/`, then `$CMDZ_HOME` or the
/// platform config directory.
fn config_dirs(cwd: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![cwd.join(PROJECT_CONFIG_DIR)];
    if let Some(home) = std::env::var_os(HOME_ENV) {
        dirs.push(PathBuf::from(home));
    } else if let Some(proj_dirs) = ProjectDirs::from("com", "cmdz", "cmdz") {
        dirs.push(proj_dirs.config_dir().to_path_buf());
    }
    dirs
}

fn handle_list(ctx: &AppContext) -> Result<i32> {
    let result = ctx.api.list();
    print!(
        "{}",
        render_template_list(
            &result.listed_templates,
            ctx.config.get_extension(),
            stdout_color(),
        )
    );
    print_messages(&result.messages);
    Ok(0)
}

fn handle_template(ctx: &AppContext, target: &str, args: &[String]) -> Result<i32> {
    let prepared = ctx.api.prepare(target, args)?;

    // Shown before running so an interactive child gets a clean terminal.
    print_messages(&prepared.messages);
    if let Some(help) = &prepared.help {
        print!("{}", render_help(help, stdout_color()));
    }

    let Some(plan) = prepared.plan else {
        return Ok(prepared.exit_code.unwrap_or(0));
    };

    let result = ctx.api.execute(&plan);
    if let Some(execution) = &result.execution {
        print_execution(execution);
    }
    print_messages(&result.messages);
    Ok(result.exit_code.unwrap_or(0))
}
