use crate::error::{CliError, Result};
use cosmosac::core::featurize::library::ProfileLibrary;
use cosmosac::core::models::molecule::MoleculeDescriptor;
use cosmosac::core::models::sigma::SigmaProfile;
use cosmosac::core::typing::classifier::ScanTermination;
use cosmosac::engine::config::{GammaConfig, GammaConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialSolverConfig {
    #[serde(rename = "max-iterations")]
    max_iterations: Option<usize>,
    tolerance: Option<f64>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    pub name: String,
    #[serde(rename = "mole-fraction")]
    pub mole_fraction: f64,
    pub atoms: Vec<String>,
    pub bonds: Vec<Vec<u8>>,
    pub area: Option<f64>,
    pub volume: Option<f64>,
    #[serde(rename = "sigma-profiles")]
    pub sigma_profiles: Option<SigmaProfile>,
}

/// A mixture as described in a TOML input file.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct MixtureFile {
    temperature: Option<f64>,
    library: Option<PathBuf>,
    solver: Option<PartialSolverConfig>,
    #[serde(rename = "component", default)]
    components: Vec<ComponentEntry>,
    #[serde(skip)]
    base_dir: PathBuf,
}

/// Command-line values that take precedence over the mixture file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub temperature: Option<f64>,
    pub max_iterations: Option<usize>,
    pub tolerance: Option<f64>,
    pub per_atom_scan: bool,
}

impl MixtureFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading mixture from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut mixture: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        mixture.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(mixture)
    }

    pub fn components(&self) -> &[ComponentEntry] {
        &self.components
    }

    pub fn composition(&self) -> Vec<f64> {
        self.components.iter().map(|c| c.mole_fraction).collect()
    }

    pub fn temperature(&self, overrides: &Overrides) -> Result<f64> {
        overrides.temperature.or(self.temperature).ok_or_else(|| {
            CliError::Config(
                "A temperature is required either in the mixture file or via --temperature."
                    .to_string(),
            )
        })
    }

    /// Library path, resolved relative to the mixture file.
    pub fn library_path(&self) -> Option<PathBuf> {
        self.library.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                self.base_dir.join(p)
            }
        })
    }

    pub fn load_library(&self) -> Result<Option<ProfileLibrary>> {
        self.library_path()
            .map(|path| {
                ProfileLibrary::load(&path).map_err(|e| CliError::FileParsing {
                    path: path.clone(),
                    source: e.into(),
                })
            })
            .transpose()
    }

    pub fn gamma_config(&self, overrides: &Overrides) -> Result<GammaConfig> {
        let solver = self.solver.clone().unwrap_or_default();
        let mut builder = GammaConfigBuilder::new();
        if let Some(n) = overrides.max_iterations.or(solver.max_iterations) {
            builder = builder.max_iterations(n);
        }
        if let Some(tol) = overrides.tolerance.or(solver.tolerance) {
            builder = builder.tolerance(tol);
        }
        if overrides.per_atom_scan {
            builder = builder.scan_termination(ScanTermination::Atom);
        }
        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    /// Builds one descriptor per component. Inline surface data wins; a
    /// component without it is looked up in `library` by name.
    pub fn molecules(&self, library: Option<&ProfileLibrary>) -> Result<Vec<MoleculeDescriptor>> {
        if self.components.is_empty() {
            return Err(CliError::Config(
                "The mixture file must define at least one [[component]].".to_string(),
            ));
        }
        self.components
            .iter()
            .map(|component| component.to_descriptor(library))
            .collect()
    }
}

impl ComponentEntry {
    fn to_descriptor(&self, library: Option<&ProfileLibrary>) -> Result<MoleculeDescriptor> {
        let (area, volume, profile) = match (self.area, self.volume, &self.sigma_profiles) {
            (Some(area), Some(volume), Some(profile)) => (area, volume, profile.clone()),
            (None, None, None) => {
                let entry = library.and_then(|l| l.get(&self.name)).ok_or_else(|| {
                    CliError::Config(format!(
                        "Component '{}' has no inline surface data and no library entry.",
                        self.name
                    ))
                })?;
                debug!(component = %self.name, "Using library surface data.");
                (entry.area, entry.volume, entry.sigma_profiles.clone())
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Component '{}' must give all of `area`, `volume` and `sigma-profiles`, or none of them.",
                    self.name
                )));
            }
        };

        MoleculeDescriptor::new(&self.atoms, &self.bonds, area, volume, profile)
            .map(|m| m.with_name(self.name.clone()))
            .map_err(|source| CliError::Component {
                name: self.name.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmosac::core::featurize::library::ProfileEntry;
    use cosmosac::core::models::sigma::NUM_BINS;
    use std::fs;
    use tempfile::tempdir;

    fn profile_rows() -> String {
        let row = |v: f64| {
            let values = vec![format!("{v:?}"); NUM_BINS];
            format!("[{}]", values.join(", "))
        };
        format!("[{}, {}, {}]", row(1.0), row(0.5), row(0.0))
    }

    fn write_mixture(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("mixture.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn water_component(extra: &str) -> String {
        format!(
            r#"
[[component]]
name = "water"
mole-fraction = 1.0
atoms = ["O", "H", "H"]
bonds = [[0, 1, 1], [1, 0, 0], [1, 0, 0]]
{extra}
"#
        )
    }

    #[test]
    fn inline_component_builds_descriptor() {
        let dir = tempdir().unwrap();
        let content = format!(
            "temperature = 298.15\n{}",
            water_component(&format!(
                "area = 76.5\nvolume = 25.7\nsigma-profiles = {}",
                profile_rows()
            ))
        );
        let path = write_mixture(dir.path(), &content);
        let mixture = MixtureFile::from_file(&path).unwrap();

        let molecules = mixture.molecules(None).unwrap();
        assert_eq!(molecules.len(), 1);
        assert_eq!(molecules[0].name(), Some("water"));
        assert_eq!(molecules[0].atoms().len(), 3);
        assert_eq!(mixture.composition(), vec![1.0]);
        assert_eq!(mixture.temperature(&Overrides::default()).unwrap(), 298.15);
    }

    #[test]
    fn component_without_surface_data_uses_library() {
        let dir = tempdir().unwrap();
        let path = write_mixture(dir.path(), &water_component(""));
        let mixture = MixtureFile::from_file(&path).unwrap();

        let mut library = ProfileLibrary::new();
        library.insert(
            "water",
            ProfileEntry {
                area: 43.4,
                volume: 25.7,
                sigma_profiles: SigmaProfile::zeros(),
            },
        );

        let molecules = mixture.molecules(Some(&library)).unwrap();
        assert_eq!(molecules[0].area(), 43.4);

        let missing = mixture.molecules(None);
        assert!(matches!(missing, Err(CliError::Config(_))));
    }

    #[test]
    fn library_path_is_resolved_relative_to_mixture_file() {
        let dir = tempdir().unwrap();
        let content = format!("library = \"profiles.toml\"\n{}", water_component(""));
        let path = write_mixture(dir.path(), &content);
        fs::write(
            dir.path().join("profiles.toml"),
            format!("[water]\narea = 43.4\nvolume = 25.7\nsigma_profiles = {}\n", profile_rows()),
        )
        .unwrap();

        let mixture = MixtureFile::from_file(&path).unwrap();
        assert_eq!(mixture.library_path(), Some(dir.path().join("profiles.toml")));
        let library = mixture.load_library().unwrap().unwrap();
        assert!(library.contains("water"));
    }

    #[test]
    fn partial_surface_data_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_mixture(dir.path(), &water_component("area = 40.0"));
        let mixture = MixtureFile::from_file(&path).unwrap();
        assert!(matches!(mixture.molecules(None), Err(CliError::Config(_))));
    }

    #[test]
    fn cli_overrides_take_precedence_over_file() {
        let dir = tempdir().unwrap();
        let content = format!(
            "temperature = 298.15\n[solver]\nmax-iterations = 50\ntolerance = 1e-5\n{}",
            water_component("")
        );
        let path = write_mixture(dir.path(), &content);
        let mixture = MixtureFile::from_file(&path).unwrap();

        let file_only = mixture.gamma_config(&Overrides::default()).unwrap();
        assert_eq!(file_only.solver.max_iterations, 50);
        assert_eq!(file_only.solver.tolerance, 1e-5);

        let overrides = Overrides {
            temperature: Some(330.0),
            max_iterations: Some(10),
            tolerance: None,
            per_atom_scan: true,
        };
        let merged = mixture.gamma_config(&overrides).unwrap();
        assert_eq!(merged.solver.max_iterations, 10);
        assert_eq!(merged.solver.tolerance, 1e-5);
        assert_eq!(merged.classifier.termination, ScanTermination::Atom);
        assert_eq!(mixture.temperature(&overrides).unwrap(), 330.0);
    }

    #[test]
    fn missing_temperature_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = write_mixture(dir.path(), &water_component(""));
        let mixture = MixtureFile::from_file(&path).unwrap();
        assert!(matches!(
            mixture.temperature(&Overrides::default()),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn invalid_solver_setting_is_a_config_error() {
        let dir = tempdir().unwrap();
        let content = format!("[solver]\ntolerance = -1.0\n{}", water_component(""));
        let path = write_mixture(dir.path(), &content);
        let mixture = MixtureFile::from_file(&path).unwrap();
        assert!(matches!(
            mixture.gamma_config(&Overrides::default()),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn unknown_key_fails_to_parse() {
        let dir = tempdir().unwrap();
        let path = write_mixture(dir.path(), "pressure = 1.0\n");
        assert!(matches!(
            MixtureFile::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }
}
