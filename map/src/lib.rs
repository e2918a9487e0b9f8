//! id Tech .map parsing
//!
//! A .map file is read line by line. Each line is classified by its first
//! character, then a recursive descent builds entities, brushes and faces.
//!
//! ```text
//! // entity 0
//! {
//! "classname" "worldspawn"
//! // brush 0
//! {
//! ( -64 -64 -16 ) ( -64 -63 -16 ) ( -64 -64 -15 ) NULL 0 0 0 1 1
//! }
//! }
//! ```
use std::path::Path;

mod error;
mod parser;
mod texture;
pub mod tokenizer;
mod types;
pub mod vertex;
mod writer;

pub use error::{MapError, TextureError, VertexError};
pub use parser::FrameKind;
pub use texture::{TextureAlignment, TextureInfo};
pub use types::{Attributes, Brush, Entity, Face, Map};

impl Map {
    /// Parses a sequence of lines. Line endings are allowed but not required.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, MapError> {
        parser::parse_map(lines)
    }

    pub fn from_text(text: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = text.lines().collect();

        Self::from_lines(&lines)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();

        let text = std::fs::read_to_string(path).map_err(|source| MapError::IOError {
            source,
            path: path.to_path_buf(),
        })?;

        Self::from_text(&text)
    }
}

#[cfg(test)]
mod test {
    use glam::DVec3;

    use super::*;

    #[test]
    fn file_read() {
        let map = Map::from_file("./test/sky_box.map").unwrap();

        assert_eq!(map.entities.len(), 2);

        let worldspawn = &map.entities[0];

        assert_eq!(worldspawn.classname(), Some("worldspawn"));
        assert_eq!(worldspawn.attributes.get("mapversion"), Some("220"));
        assert_eq!(worldspawn.brushes.len(), 2);
        assert!(worldspawn.brushes().all(|brush| brush.faces.len() == 6));

        let face = &worldspawn.brushes[1].faces[2];

        assert_eq!(face.p2, DVec3::new(-120., -136., -16.));
        assert_eq!(face.texture_name(), Some("NULL"));
        assert!(matches!(
            face.texture_info().unwrap().alignment,
            TextureAlignment::Valve220 { .. }
        ));

        let player = &map.entities[1];

        assert_eq!(player.attributes.get("origin"), Some("-80 -88 60"));
        assert!(player.brushes.is_empty());
    }

    #[test]
    fn file_missing() {
        let err = Map::from_file("./test/does_not_exist.map").unwrap_err();

        assert!(matches!(err, MapError::IOError { .. }));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn text_and_lines_agree() {
        let text = "{\n\"classname\" \"worldspawn\"\n}\n";
        let lines: Vec<String> = text.lines().map(|line| format!("{line}\n")).collect();

        assert_eq!(Map::from_text(text).unwrap(), Map::from_lines(&lines).unwrap());
    }
}
