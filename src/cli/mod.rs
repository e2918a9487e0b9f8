use std::path::Path;

use log::debug;
use map::Map;

use crate::config::Config;

use self::{illegal_brush::IllegalBrushCli, rewrite::Rewrite, soup::Soup, summary::Summary};

mod illegal_brush;
mod rewrite;
mod soup;
mod summary;

pub enum CliRes {
    NoCli,
    Ok,
    Err,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    /// Each module has to handle the arguments by itself.
    ///
    /// `args[1]` is the name of the module. Arguments start at `args[2]`.
    fn cli(&self, config: &Config) -> CliRes;
    fn cli_help(&self);
}

// Add new modules here.
const MODULES: &[&dyn Cli] = &[&Summary, &Soup, &IllegalBrushCli, &Rewrite];

pub fn help() {
    println!(
        "\
polysoup

Usage:
polysoup <.map>
polysoup <module> ...

Available modules:"
    );

    for module in MODULES {
        println!("{}", module.name());
    }
}

/// Runs command-line options
pub fn cli(config: &Config) -> CliRes {
    let args: Vec<String> = std::env::args().collect();

    // No arguments
    if args.len() < 2 {
        return CliRes::NoCli;
    }

    let command = args[1].as_str();

    for module in MODULES {
        if command == module.name() {
            return module.cli(config);
        }
    }

    if matches!(command, "help" | "-h" | "--help") {
        help();
        return CliRes::Ok;
    }

    // `polysoup <.map>`
    summary::print_summary(command)
}

/// Prints the error with its line number when parsing fails.
fn read_map(path: impl AsRef<Path>) -> Option<Map> {
    let path = path.as_ref();

    debug!("Reading {}", path.display());

    match Map::from_file(path) {
        Ok(map) => Some(map),
        Err(err) => {
            println!("Cannot parse `{}`: {}", path.display(), err);
            None
        }
    }
}
