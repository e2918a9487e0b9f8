use std::fmt;

use glam::DVec3;

use map::Map;

#[derive(Debug, Clone, PartialEq)]
pub struct IllegalBrush {
    pub entity: usize,
    pub brush: usize,
    pub face_count: usize,
    /// Plane points of the first face, to find the brush in an editor.
    pub first_face: Option<[DVec3; 3]>,
}

impl fmt::Display for IllegalBrush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity {} Brush {}", self.entity, self.brush)?;

        if let Some([p1, p2, p3]) = self.first_face {
            write!(
                f,
                " ( {} {} {} ) ( {} {} {} ) ( {} {} {} )",
                p1.x, p1.y, p1.z, p2.x, p2.y, p2.z, p3.x, p3.y, p3.z
            )?;
        }

        write!(f, " might be illegal: {} faces", self.face_count)
    }
}

/// Brushes whose face count is outside `min_faces..=max_faces`.
pub fn check_illegal_brush(map: &Map, min_faces: usize, max_faces: usize) -> Vec<IllegalBrush> {
    map.entities
        .iter()
        .enumerate()
        .flat_map(|(entity_idx, entity)| {
            entity
                .brushes
                .iter()
                .enumerate()
                .filter(|(_, brush)| {
                    brush.faces.len() < min_faces || brush.faces.len() > max_faces
                })
                .map(move |(brush_idx, brush)| IllegalBrush {
                    entity: entity_idx,
                    brush: brush_idx,
                    face_count: brush.faces.len(),
                    first_face: brush.faces.first().map(|face| face.points()),
                })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn out_of_bounds() {
        let map = Map::from_text(
            "\
{
\"classname\" \"worldspawn\"
{
( 0 0 0 ) ( 0 0 1 ) ( 0 1 0 ) NULL 0 0 0 1 1
}
{
( 0 0 0 ) ( 0 0 1 ) ( 0 1 0 ) NULL 0 0 0 1 1
( 0 0 0 ) ( 0 1 0 ) ( 1 0 0 ) NULL 0 0 0 1 1
( 0 0 0 ) ( 1 0 0 ) ( 0 0 1 ) NULL 0 0 0 1 1
( 1 1 1 ) ( 1 1 2 ) ( 1 2 1 ) NULL 0 0 0 1 1
}
}
{
\"classname\" \"func_wall\"
{
}
}",
        )
        .unwrap();

        let illegal = check_illegal_brush(&map, 4, 32);

        assert_eq!(illegal.len(), 2);
        assert_eq!((illegal[0].entity, illegal[0].brush), (0, 0));
        assert_eq!(illegal[0].face_count, 1);
        assert_eq!(
            illegal[0].to_string(),
            "Entity 0 Brush 0 ( 0 0 0 ) ( 0 0 1 ) ( 0 1 0 ) might be illegal: 1 faces"
        );
        assert_eq!((illegal[1].entity, illegal[1].brush), (1, 0));
        assert!(illegal[1].first_face.is_none());
        assert_eq!(illegal[1].to_string(), "Entity 1 Brush 0 might be illegal: 0 faces");

        assert_eq!(check_illegal_brush(&map, 1, 3).len(), 2);
        assert!(check_illegal_brush(&map, 0, 4).is_empty());
    }
}
