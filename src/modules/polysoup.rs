use std::fmt;

use glam::DVec3;
use rayon::prelude::*;

use map::Map;

/// The plane points of one face, with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SoupFace {
    pub entity: usize,
    pub brush: usize,
    pub points: [DVec3; 3],
}

impl fmt::Display for SoupFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.points;

        write!(
            f,
            "( {} {} {} ) ( {} {} {} ) ( {} {} {} )",
            a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z
        )
    }
}

/// Collects the raw vertex triples of every face in file order.
///
/// `classname` limits the output to matching entities.
pub fn polysoup(map: &Map, classname: Option<&str>) -> Vec<SoupFace> {
    map.entities
        .par_iter()
        .enumerate()
        .filter(|(_, entity)| classname.map_or(true, |name| entity.classname() == Some(name)))
        .flat_map_iter(|(entity_index, entity)| {
            entity
                .brushes()
                .enumerate()
                .flat_map(move |(brush_index, brush)| {
                    brush.faces().map(move |face| SoupFace {
                        entity: entity_index,
                        brush: brush_index,
                        points: face.points(),
                    })
                })
        })
        .collect()
}
