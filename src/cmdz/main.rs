//! The `cmdz` binary. All behavior lives in the library and in `cli/`; this
//! file only turns the CLI's result into a process exit status.

mod cli;

fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
