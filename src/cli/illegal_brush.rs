use crate::modules::check_illegal_brush::check_illegal_brush;

use super::*;

pub struct IllegalBrushCli;
impl Cli for IllegalBrushCli {
    fn name(&self) -> &'static str {
        "illegal_brush"
    }

    // .map file
    fn cli(&self, config: &Config) -> CliRes {
        let args: Vec<String> = std::env::args().skip(2).collect();

        if args.len() != 1 {
            self.cli_help();
            return CliRes::Err;
        }

        let Some(map) = read_map(&args[0]) else {
            return CliRes::Err;
        };

        let illegal = check_illegal_brush(&map, config.min_brush_faces, config.max_brush_faces);

        if illegal.is_empty() {
            println!("There is no illegal brush. Good job");
        }

        for brush in illegal {
            println!("{brush}");
        }

        CliRes::Ok
    }

    fn cli_help(&self) {
        println!(
            "\
Lists brushes with too few or too many faces.
Bounds come from min_brush_faces and max_brush_faces in polysoup.toml.

<.map>
"
        )
    }
}
