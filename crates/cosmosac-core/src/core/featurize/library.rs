use crate::core::models::error::{InputShapeError, ensure_positive};
use crate::core::models::sigma::SigmaProfile;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Curated surface data for one molecule.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProfileEntry {
    pub area: f64,
    pub volume: f64,
    pub sigma_profiles: SigmaProfile,
}

/// Exception table of molecules whose sigma profiles are known and should
/// bypass prediction, keyed by molecule identifier.
#[derive(Debug, Clone, Default)]
pub struct ProfileLibrary {
    entries: HashMap<String, ProfileEntry>,
}

#[derive(Debug, Error)]
pub enum LibraryLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid library entry '{identifier}': {source}")]
    InvalidEntry {
        identifier: String,
        source: InputShapeError,
    },
}

impl ProfileLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, LibraryLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LibraryLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let entries: HashMap<String, ProfileEntry> =
            toml::from_str(&content).map_err(|e| LibraryLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        for (identifier, entry) in &entries {
            ensure_positive("area", entry.area)
                .and_then(|_| ensure_positive("volume", entry.volume))
                .map_err(|source| LibraryLoadError::InvalidEntry {
                    identifier: identifier.clone(),
                    source,
                })?;
        }

        Ok(Self { entries })
    }

    pub fn insert(&mut self, identifier: impl Into<String>, entry: ProfileEntry) {
        self.entries.insert(identifier.into(), entry);
    }

    pub fn get(&self, identifier: &str) -> Option<&ProfileEntry> {
        self.entries.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sigma::{NUM_BINS, ProfileType};
    use std::fs;
    use tempfile::tempdir;

    fn profile_toml(nhb_value: f64) -> String {
        let row = |v: f64| {
            let values = vec![format!("{v}"); NUM_BINS];
            format!("[{}]", values.join(", "))
        };
        format!("[{}, {}, {}]", row(nhb_value), row(0.0), row(0.0))
    }

    #[test]
    fn load_reads_entries_keyed_by_identifier() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.toml");
        fs::write(
            &path,
            format!(
                "[O]\narea = 43.4\nvolume = 25.7\nsigma_profiles = {}\n\n[\"CCO\"]\narea = 95.0\nvolume = 70.0\nsigma_profiles = {}\n",
                profile_toml(0.5),
                profile_toml(1.0)
            ),
        )
        .unwrap();

        let library = ProfileLibrary::load(&path).unwrap();
        assert_eq!(library.len(), 2);
        assert!(library.contains("CCO"));

        let water = library.get("O").unwrap();
        assert_eq!(water.area, 43.4);
        assert_eq!(water.sigma_profiles.get(ProfileType::NonHydrogenBonding, 3), 0.5);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ProfileLibrary::load(&dir.path().join("none.toml"));
        assert!(matches!(result, Err(LibraryLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.toml");
        fs::write(&path, "[O]\narea = 43.4\nvolume = 25.7\nsigma_profiles = [[1.0, 2.0]]\n").unwrap();
        let result = ProfileLibrary::load(&path);
        assert!(matches!(result, Err(LibraryLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_non_positive_area() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.toml");
        fs::write(
            &path,
            format!("[O]\narea = -1.0\nvolume = 25.7\nsigma_profiles = {}\n", profile_toml(0.5)),
        )
        .unwrap();
        let result = ProfileLibrary::load(&path);
        assert!(matches!(result, Err(LibraryLoadError::InvalidEntry { .. })));
    }
}
