use std::{
    fs::OpenOptions,
    io::{self, BufWriter, Write},
    path::Path,
};

use glam::DVec3;

use crate::{error::MapError, types::Map};

fn write_point(writer: &mut impl Write, p: DVec3) -> io::Result<()> {
    // f64 Display is the shortest text that parses back to the same value
    write!(writer, "( {} {} {} )", p.x, p.y, p.z)
}

impl Map {
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for (entity_index, entity) in self.entities.iter().enumerate() {
            writeln!(writer, "// entity {}", entity_index)?;
            writeln!(writer, "{{")?;

            for (key, value) in entity.attributes.iter() {
                writeln!(writer, "\"{}\" \"{}\"", key, value)?;
            }

            for (brush_index, brush) in entity.brushes.iter().enumerate() {
                writeln!(writer, "// brush {}", brush_index)?;
                writeln!(writer, "{{")?;

                for face in &brush.faces {
                    write_point(writer, face.p1)?;
                    write!(writer, " ")?;
                    write_point(writer, face.p2)?;
                    write!(writer, " ")?;
                    write_point(writer, face.p3)?;

                    for field in &face.texture {
                        write!(writer, " {}", field)?;
                    }

                    writeln!(writer)?;
                }

                writeln!(writer, "}}")?;
            }

            writeln!(writer, "}}")?;
        }

        Ok(())
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), MapError> {
        let path = path.as_ref();
        let io_error = |source: io::Error| MapError::IOError {
            source,
            path: path.to_path_buf(),
        };

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(io_error)?;

        let mut file = BufWriter::new(file);

        self.write_to(&mut file).map_err(io_error)?;
        file.flush().map_err(io_error)?;

        Ok(())
    }
}
