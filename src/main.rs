//! Pokesprite - command-line tool for composing entity sprites

use std::process::ExitCode;

use pokesprite::cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    cli::run()
}
