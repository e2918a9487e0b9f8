use log::info;

use super::*;

pub struct Rewrite;
impl Cli for Rewrite {
    fn name(&self) -> &'static str {
        "rewrite"
    }

    // In, Out
    fn cli(&self, _config: &Config) -> CliRes {
        let args: Vec<String> = std::env::args().skip(2).collect();

        if args.len() != 2 {
            self.cli_help();
            return CliRes::Err;
        }

        let Some(map) = read_map(&args[0]) else {
            return CliRes::Err;
        };

        if let Err(err) = map.write(&args[1]) {
            println!("{}", err);
            return CliRes::Err;
        }

        info!("Wrote {} entities to {}", map.entities.len(), args[1]);

        CliRes::Ok
    }

    fn cli_help(&self) {
        println!(
            "\
Parses a map and writes it back out with one entity/brush comment per block.

<.map> <output .map>
"
        )
    }
}
