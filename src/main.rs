mod cli;
mod config;
pub mod modules;

use std::process::ExitCode;

use config::CONFIG_FILE_NAME;

fn main() -> ExitCode {
    let err_exit = ExitCode::from(1);
    let ok_exit = ExitCode::from(0);

    let config = match config::parse_config() {
        Ok(config) => config,
        Err(err) => {
            println!("Error parsing {}: {}", CONFIG_FILE_NAME, err);
            return err_exit;
        }
    };

    // Log to stderr, `RUST_LOG` overrides the configured level.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    match cli::cli(&config) {
        cli::CliRes::NoCli => {
            cli::help();
            err_exit
        }
        cli::CliRes::Ok => ok_exit,
        cli::CliRes::Err => err_exit,
    }
}
