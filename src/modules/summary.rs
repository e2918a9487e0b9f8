use std::{collections::BTreeMap, fmt};

use map::Map;

#[derive(Debug, Clone, PartialEq)]
pub struct MapSummary {
    pub entities: usize,
    pub brushes: usize,
    pub faces: usize,
    /// How many entities of each classname.
    pub classnames: BTreeMap<String, usize>,
}

pub fn summarize(map: &Map) -> MapSummary {
    let classnames = map
        .entities()
        .fold(BTreeMap::<String, usize>::new(), |mut acc, entity| {
            let classname = entity.classname().unwrap_or("<no classname>");
            *acc.entry(classname.to_string()).or_default() += 1;
            acc
        });

    MapSummary {
        entities: map.entities.len(),
        brushes: map.brush_count(),
        faces: map.face_count(),
        classnames,
    }
}

impl fmt::Display for MapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Entities: {}", self.entities)?;
        writeln!(f, "Brushes: {}", self.brushes)?;
        writeln!(f, "Faces: {}", self.faces)?;

        for (classname, count) in &self.classnames {
            writeln!(f, "  {classname}: {count}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts() {
        let map = Map::from_text(
            "\
{
\"classname\" \"worldspawn\"
{
( 0 0 0 ) ( 0 0 1 ) ( 0 1 0 ) NULL 0 0 0 1 1
( 0 0 0 ) ( 0 1 0 ) ( 1 0 0 ) NULL 0 0 0 1 1
}
}
{
\"classname\" \"light\"
}
{
\"classname\" \"light\"
}
{
}",
        )
        .unwrap();

        let summary = summarize(&map);

        assert_eq!(summary.entities, 4);
        assert_eq!(summary.brushes, 1);
        assert_eq!(summary.faces, 2);
        assert_eq!(summary.classnames.get("light"), Some(&2));
        assert_eq!(summary.classnames.get("<no classname>"), Some(&1));

        let text = summary.to_string();

        assert!(text.starts_with("Entities: 4\nBrushes: 1\nFaces: 2\n"));
        assert!(text.contains("  worldspawn: 1\n"));
    }
}
