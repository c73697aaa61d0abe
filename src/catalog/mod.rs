// Cafe catalog module
// The city -> cafes table: built once at startup, read-only afterwards

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::logger;

/// The cafe table: city name -> ordered cafe names.
///
/// Insertion order within a city is significant; truncated responses return
/// the leading entries of the list. The catalog is assembled in `main` and
/// never mutated afterwards, so request handlers read it without locking.
pub struct CafeCatalog {
    cities: HashMap<String, Vec<String>>,
}

/// On-disk catalog format (`[cities]` table, one array per city)
#[derive(Debug, Deserialize, Default)]
struct CatalogFile {
    #[serde(default)]
    cities: HashMap<String, Vec<String>>,
}

impl CafeCatalog {
    /// Built-in entries, served when no catalog file is configured.
    pub fn builtin() -> Self {
        let mut cities = HashMap::new();
        cities.insert(
            "moscow".to_string(),
            vec![
                "Мир кофе".to_string(),
                "Сладкоежка".to_string(),
                "Кофе и завтраки".to_string(),
                "Сытый студент".to_string(),
            ],
        );
        Self { cities }
    }

    /// Build the catalog from built-in entries plus the optional file.
    ///
    /// File problems are logged and the built-in entries are kept, so a bad
    /// catalog file never prevents startup.
    pub fn load(file: Option<&str>) -> Self {
        let mut catalog = Self::builtin();
        if let Some(path) = file {
            if let Some(extra) = read_catalog_file(Path::new(path)) {
                catalog.merge(extra);
            }
        }
        catalog
    }

    /// Merge file entries in. A file entry replaces the whole list for its
    /// city; cities only present in the file are added.
    fn merge(&mut self, file: CatalogFile) {
        for (city, cafes) in file.cities {
            self.cities.insert(city, cafes);
        }
    }

    /// Exact, case-sensitive lookup of a city's cafe list.
    pub fn get(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    /// Known city keys, sorted for stable output.
    pub fn city_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of cities in the catalog.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Read and parse a catalog file, logging and returning `None` on failure.
fn read_catalog_file(path: &Path) -> Option<CatalogFile> {
    if !path.exists() {
        logger::log_warning(&format!(
            "Catalog file {} not found, using built-in entries",
            path.display()
        ));
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(file) => {
                logger::write_info(&format!("Loaded catalog file {}", path.display()));
                Some(file)
            }
            Err(e) => {
                logger::log_error(&format!(
                    "Failed to parse catalog file {}: {e}",
                    path.display()
                ));
                None
            }
        },
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read catalog file {}: {e}",
                path.display()
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_moscow_order() {
        let catalog = CafeCatalog::builtin();
        let cafes = catalog.get("moscow").expect("moscow is built in");
        assert_eq!(
            cafes,
            [
                "Мир кофе",
                "Сладкоежка",
                "Кофе и завтраки",
                "Сытый студент"
            ]
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = CafeCatalog::builtin();
        assert!(catalog.get("moscow").is_some());
        assert!(catalog.get("Moscow").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_merge_adds_and_replaces() {
        let mut catalog = CafeCatalog::builtin();
        let file: CatalogFile = toml::from_str(
            r#"
            [cities]
            moscow = ["Только один"]
            tula = ["Пряник", "Самовар"]
            "#,
        )
        .expect("valid catalog toml");

        catalog.merge(file);

        assert_eq!(catalog.get("moscow").unwrap(), ["Только один"]);
        assert_eq!(catalog.get("tula").unwrap(), ["Пряник", "Самовар"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_city_names_sorted() {
        let mut catalog = CafeCatalog::builtin();
        catalog.merge(CatalogFile {
            cities: HashMap::from([("abakan".to_string(), vec!["Кафе".to_string()])]),
        });
        assert_eq!(catalog.city_names(), ["abakan", "moscow"]);
    }

    #[test]
    fn test_empty_cities_table_in_file() {
        let file: CatalogFile = toml::from_str("").expect("empty file is valid");
        let mut catalog = CafeCatalog::builtin();
        catalog.merge(file);
        assert_eq!(catalog.len(), 1);
    }
}
