use glam::DVec3;

/// One bounding plane of a brush.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub p1: DVec3,
    pub p2: DVec3,
    pub p3: DVec3,
    /// Whitespace separated fields after the third point, kept as they are.
    ///
    /// See [`Face::texture_info`] for an interpretation.
    pub texture: Vec<String>,
}

impl Face {
    pub fn points(&self) -> [DVec3; 3] {
        [self.p1, self.p2, self.p3]
    }

    pub fn texture_name(&self) -> Option<&str> {
        self.texture.first().map(|s| s.as_str())
    }
}

/// A convex solid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Brush {
    pub faces: Vec<Face>,
}

impl Brush {
    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }
}

/// Key/value pairs of an entity, in the order they first appear.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Inserts a pair. An existing key keeps its position and gets the new value,
    /// the old value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    // All entities have attributes.
    pub attributes: Attributes,
    pub brushes: Vec<Brush>,
}

impl Entity {
    pub fn classname(&self) -> Option<&str> {
        self.attributes.get("classname")
    }

    pub fn brushes(&self) -> impl Iterator<Item = &Brush> {
        self.brushes.iter()
    }

    pub fn face_count(&self) -> usize {
        self.brushes.iter().map(|brush| brush.faces.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map {
    pub entities: Vec<Entity>,
}

impl Map {
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn brush_count(&self) -> usize {
        self.entities.iter().map(|entity| entity.brushes.len()).sum()
    }

    pub fn face_count(&self) -> usize {
        self.entities.iter().map(Entity::face_count).sum()
    }
}
