use crate::modules::summary::summarize;

use super::*;

pub struct Summary;
impl Cli for Summary {
    fn name(&self) -> &'static str {
        "summary"
    }

    // .map file
    fn cli(&self, _config: &Config) -> CliRes {
        let args: Vec<String> = std::env::args().skip(2).collect();

        if args.len() != 1 {
            self.cli_help();
            return CliRes::Err;
        }

        print_summary(&args[0])
    }

    fn cli_help(&self) {
        println!(
            "\
Counts entities, brushes and faces of a map.

<.map>
"
        )
    }
}

pub fn print_summary(path: &str) -> CliRes {
    let Some(map) = read_map(path) else {
        return CliRes::Err;
    };

    print!("{}", summarize(&map));

    CliRes::Ok
}
