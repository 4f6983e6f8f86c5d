//! City name → position lookup.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Serialize;

use crate::grid::{Grid, Position};

use super::error::CityError;

/// A named endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub name: String,
    pub position: Position,
}

/// Registry of named endpoints, in file order.
#[derive(Debug, Clone, Default)]
pub struct CityRegistry {
    cities: Vec<City>,
    by_name: HashMap<String, usize>,
}

impl CityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city. Names must be unique.
    pub fn insert(&mut self, name: impl Into<String>, position: Position) -> Result<(), CityError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(CityError::Duplicate { name });
        }
        self.by_name.insert(name.clone(), self.cities.len());
        self.cities.push(City { name, position });
        Ok(())
    }

    /// Parse a JSON list of single-city objects:
    /// `[{"Bern": {"x": 12, "y": 30}}, ...]`.
    pub fn parse(json: &str) -> Result<Self, CityError> {
        let entries: Vec<BTreeMap<String, Position>> = serde_json::from_str(json)?;
        let mut registry = Self::new();

        for (index, entry) in entries.into_iter().enumerate() {
            if entry.len() != 1 {
                return Err(CityError::MalformedEntry {
                    index,
                    found: entry.len(),
                });
            }
            for (name, position) in entry {
                registry.insert(name, position)?;
            }
        }

        Ok(registry)
    }

    /// Read and parse a registry file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CityError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Look up a city's position by exact name.
    pub fn get(&self, name: &str) -> Result<Position, CityError> {
        self.by_name
            .get(name)
            .map(|&idx| self.cities[idx].position)
            .ok_or_else(|| CityError::UnknownCity {
                name: name.to_string(),
            })
    }

    /// Resolve a departure and an arrival city.
    pub fn resolve(&self, from: &str, to: &str) -> Result<(Position, Position), CityError> {
        Ok((self.get(from)?, self.get(to)?))
    }

    /// Iterate over the cities in file order.
    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities that cannot be used as endpoints on `grid`.
    pub fn validate<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = &'a City> + 'a {
        self.cities.iter().filter(|c| !grid.is_walkable(c.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITIES: &str = r#"[
        {"Geneva": {"x": 1, "y": 3}},
        {"Zurich": {"x": 4, "y": 0}},
        {"Basel": {"x": 9, "y": 9}}
    ]"#;

    #[test]
    fn parse_in_file_order() {
        let registry = CityRegistry::parse(CITIES).unwrap();
        assert_eq!(registry.len(), 3);
        let names: Vec<_> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Geneva", "Zurich", "Basel"]);
    }

    #[test]
    fn lookup() {
        let registry = CityRegistry::parse(CITIES).unwrap();
        assert_eq!(registry.get("Zurich").unwrap(), Position::new(4, 0));
        assert_eq!(
            registry.resolve("Geneva", "Zurich").unwrap(),
            (Position::new(1, 3), Position::new(4, 0))
        );
    }

    #[test]
    fn unknown_names() {
        let registry = CityRegistry::parse(CITIES).unwrap();
        let err = registry.get("zurich").unwrap_err();
        assert!(matches!(err, CityError::UnknownCity { name } if name == "zurich"));

        let err = registry.resolve("Geneva", "Lugano").unwrap_err();
        assert!(matches!(err, CityError::UnknownCity { name } if name == "Lugano"));
    }

    #[test]
    fn rejects_malformed_entries() {
        let err = CityRegistry::parse(r#"[{"A": {"x": 0, "y": 0}, "B": {"x": 1, "y": 1}}]"#)
            .unwrap_err();
        assert!(matches!(err, CityError::MalformedEntry { index: 0, found: 2 }));

        let err = CityRegistry::parse(r#"[{}]"#).unwrap_err();
        assert!(matches!(err, CityError::MalformedEntry { index: 0, found: 0 }));

        let err = CityRegistry::parse(r#"{"A": 1}"#).unwrap_err();
        assert!(matches!(err, CityError::Json(_)));
    }

    #[test]
    fn rejects_duplicates() {
        let err = CityRegistry::parse(r#"[{"A": {"x": 0, "y": 0}}, {"A": {"x": 1, "y": 1}}]"#)
            .unwrap_err();
        assert!(matches!(err, CityError::Duplicate { name } if name == "A"));
    }

    #[test]
    fn validate_reports_unusable_cities() {
        let registry = CityRegistry::parse(CITIES).unwrap();
        let grid = Grid::parse_csv("1,1,1,1,1\n1,1,1,1,1\n1,1,1,1,1\n1,0,1,1,1\n").unwrap();
        let names: Vec<_> = registry.validate(&grid).map(|c| c.name.as_str()).collect();
        // Geneva sits on an obstacle, Basel is outside the grid.
        assert_eq!(names, vec!["Geneva", "Basel"]);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.json");
        std::fs::write(&path, CITIES).unwrap();
        assert_eq!(CityRegistry::load(&path).unwrap().len(), 3);
    }
}
