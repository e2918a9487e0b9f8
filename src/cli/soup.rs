use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::modules::polysoup::polysoup;

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct SoupCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints the three plane points of every face
    Soup {
        /// Path to .map
        map: PathBuf,
        /// Only faces of entities with this classname
        #[arg(short, long)]
        classname: Option<String>,
    },
}

pub struct Soup;
impl Cli for Soup {
    fn name(&self) -> &'static str {
        "soup"
    }

    fn cli(&self, _config: &Config) -> CliRes {
        let cli = SoupCli::parse();
        let Commands::Soup { map, classname } = cli.command;

        let Some(map) = read_map(&map) else {
            return CliRes::Err;
        };

        for face in polysoup(&map, classname.as_deref()) {
            println!("{face}");
        }

        CliRes::Ok
    }

    fn cli_help(&self) {
        // handled by clap
        unreachable!()
    }
}
