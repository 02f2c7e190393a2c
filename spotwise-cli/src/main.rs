//! Entry point for the `spotwise` command-line interface.
#![forbid(unsafe_code)]

use spotwise_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match spotwise_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("spotwise: {err}");
            std::process::exit(1);
        }
    }
}
