use crate::{
    error::{Error, Result},
    search::{GeoPoint, PointId},
};
use std::collections::HashMap;

/// The points known to a single optimisation run. Built fresh for every
/// request and read-only once the search starts.
#[derive(Debug, Clone, Default)]
pub struct PointRegistry {
    points: HashMap<PointId, GeoPoint>,
}

impl PointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point, replacing any earlier point registered under the same id.
    pub fn register(&mut self, point: GeoPoint) -> Option<GeoPoint> {
        self.points.insert(point.id, point)
    }

    pub fn get(&self, id: PointId) -> Option<&GeoPoint> {
        self.points.get(&id)
    }

    /// Like [`PointRegistry::get`], but an unknown id is an error.
    pub fn resolve(&self, id: PointId) -> Result<&GeoPoint> {
        self.points.get(&id).ok_or(Error::UnknownPoint(id))
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.points.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<GeoPoint> for PointRegistry {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        let mut registry = Self::new();
        for point in iter {
            registry.register(point);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_overwrites_existing_id() {
        let mut registry = PointRegistry::new();
        assert!(registry
            .register(GeoPoint::new(PointId(7), "old", 1.0, 1.0))
            .is_none());
        let previous = registry.register(GeoPoint::new(PointId(7), "new", 2.0, 2.0));
        assert_eq!(previous.map(|p| p.label), Some("old".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(PointId(7)).unwrap().label, "new");
    }

    #[test]
    fn resolve_reports_missing_id() {
        let registry: PointRegistry = [GeoPoint::new(PointId(1), "a", 0.0, 0.0)]
            .into_iter()
            .collect();
        assert!(registry.resolve(PointId(1)).is_ok());
        match registry.resolve(PointId(2)) {
            Err(Error::UnknownPoint(id)) => assert_eq!(id, PointId(2)),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn out_of_range_coordinates_are_accepted() {
        let mut registry = PointRegistry::new();
        registry.register(GeoPoint::new(PointId(1), "nowhere", 123.0, 456.0));
        assert!(registry.contains(PointId(1)));
    }
}
