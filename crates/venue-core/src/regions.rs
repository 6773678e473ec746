//! Region (state/province) reference catalog
//!
//! Loaded once at startup, read-only afterwards. The built-in catalog lists
//! the US states plus the District of Columbia; a JSON file of
//! `[{"id": "..", "name": ".."}]` can replace it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::ConfigError;
use crate::model::Region;

const BUILTIN_REGIONS: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

static BUILTIN: Lazy<RegionCatalog> = Lazy::new(|| RegionCatalog {
    regions: BUILTIN_REGIONS
        .iter()
        .map(|(id, name)| Region::new(*id, *name))
        .collect(),
});

/// Ordered, read-only list of region options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// The built-in catalog
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a catalog, rejecting empty lists, blank entries and duplicate ids
    pub fn new(regions: Vec<Region>) -> Result<Self, ConfigError> {
        if regions.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for (position, region) in regions.iter().enumerate() {
            if region.id.trim().is_empty() || region.name.trim().is_empty() {
                return Err(ConfigError::BlankRegion(position));
            }
            if !seen.insert(region.id.as_str()) {
                return Err(ConfigError::DuplicateRegion(region.id.clone()));
            }
        }

        Ok(Self { regions })
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let regions: Vec<Region> =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::new(regions)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "Loaded region catalog");
        Ok(catalog)
    }

    /// Load from `path` if given, otherwise use the built-in catalog
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Find a region by id
    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Position of a region in display order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.regions.iter().position(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog() {
        let catalog = RegionCatalog::builtin();
        assert_eq!(catalog.len(), 51);
        assert_eq!(
            catalog.get("CA"),
            Some(&Region::new("CA", "California"))
        );
        assert_eq!(catalog.position("AL"), Some(0));
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(matches!(
            RegionCatalog::new(Vec::new()),
            Err(ConfigError::EmptyCatalog)
        ));
        let dupes = vec![Region::new("ON", "Ontario"), Region::new("ON", "Ontario")];
        assert!(matches!(
            RegionCatalog::new(dupes),
            Err(ConfigError::DuplicateRegion(id)) if id == "ON"
        ));
    }

    #[test]
    fn test_rejects_blank_id_or_name() {
        let blank_name = vec![Region::new("ON", "Ontario"), Region::new("QC", "  ")];
        assert!(matches!(
            RegionCatalog::new(blank_name),
            Err(ConfigError::BlankRegion(1))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "", "name": "Nowhere"}}]"#).unwrap();
        assert!(matches!(
            RegionCatalog::load(file.path()),
            Err(ConfigError::BlankRegion(0))
        ));
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "ON", "name": "Ontario"}}, {{"id": "QC", "name": "Quebec"}}]"#
        )
        .unwrap();

        let catalog = RegionCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.regions()[1].name, "Quebec");
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            RegionCatalog::load(file.path()),
            Err(ConfigError::Json { .. })
        ));
    }

    #[test]
    fn test_load_or_builtin_without_path() {
        let catalog = RegionCatalog::load_or_builtin(None).unwrap();
        assert_eq!(catalog, RegionCatalog::builtin());
    }
}
