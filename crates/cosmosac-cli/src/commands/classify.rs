use crate::cli::ClassifyArgs;
use crate::config::{MixtureFile, Overrides};
use crate::error::Result;
use cosmosac::core::models::molecule::MoleculeDescriptor;
use cosmosac::core::typing::classifier::{AtomClassification, classify_molecule};
use std::fmt::Write;
use tracing::info;

pub fn run(args: ClassifyArgs) -> Result<()> {
    let mixture = MixtureFile::from_file(&args.input)?;
    let overrides = Overrides {
        per_atom_scan: args.per_atom_scan,
        ..Overrides::default()
    };
    let config = mixture.gamma_config(&overrides)?;
    let library = mixture.load_library()?;
    let molecules = mixture.molecules(library.as_ref())?;

    info!("Classifying {} component(s).", molecules.len());
    for molecule in &molecules {
        let classification = classify_molecule(molecule, &config.classifier);
        print!("{}", render(molecule, &classification));
    }
    Ok(())
}

pub fn render(molecule: &MoleculeDescriptor, classification: &AtomClassification) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}]",
        molecule.name().unwrap_or("<unnamed>"),
        classification.nature()
    );
    for (index, element) in molecule.atoms().iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>3} {:<2} {:<10} {}",
            index,
            element,
            classification.category(index),
            classification.profile_types()[index]
        );
    }
    out
}
