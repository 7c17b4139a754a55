use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

// `-h` belongs to templates (`cmdz tpl.json -h`), so clap's short help flag is
// disabled and only `--help` is kept for cmdz itself.
#[derive(Parser, Debug)]
#[command(
    name = "cmdz",
    bin_name = "cmdz",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Run shell commands described by JSON templates", long_about = None)]
pub struct Cli {
    /// Directory scanned for templates (overrides the config file)
    #[arg(short, long, value_name = "DIR", help_heading = "Options")]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(long, help_heading = "Options")]
    pub help: bool,

    /// Template file followed by its arguments; lists templates when omitted
    #[arg(
        value_name = "TEMPLATE [ARGS]",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub invocation: Vec<String>,
}

impl Cli {
    /// Splits the invocation into the template target and its arguments.
    pub fn target(&self) -> Option<(&str, &[String])> {
        self.invocation
            .split_first()
            .map(|(target, args)| (target.as_str(), args))
    }
}

pub fn print_help() {
    print!("{}", Cli::command().render_help());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cmdz").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_arguments_lists() {
        let cli = parse(&[]);
        assert!(cli.target().is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_template_with_arguments() {
        let cli = parse(&["commands/ping.json", "example.org", "3"]);
        let (target, args) = cli.target().unwrap();
        assert_eq!(target, "commands/ping.json");
        assert_eq!(args, ["example.org".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_template_help_flag_is_passed_through() {
        let cli = parse(&["commands/ping.json", "-h"]);
        let (_, args) = cli.target().unwrap();
        assert_eq!(args, ["-h".to_string()]);
        assert!(!cli.help);
    }

    #[test]
    fn test_flags_after_target_belong_to_template() {
        let cli = parse(&["tpl.json", "--verbose", "-d", "x"]);
        assert!(!cli.verbose);
        assert!(cli.dir.is_none());
        assert_eq!(cli.target().unwrap().1.len(), 3);
    }

    #[test]
    fn test_global_options_before_target() {
        let cli = parse(&["-v", "--dir", "templates", "tpl.json", "a"]);
        assert!(cli.verbose);
        assert_eq!(cli.dir, Some(PathBuf::from("templates")));
        assert_eq!(cli.target().unwrap().0, "tpl.json");
    }

    #[test]
    fn test_bare_short_help_is_a_target() {
        let cli = parse(&["-h"]);
        assert_eq!(cli.target().unwrap().0, "-h");
    }

    #[test]
    fn test_long_help() {
        assert!(parse(&["--help"]).help);
    }
}
