use crate::cli::GammaArgs;
use crate::config::{MixtureFile, Overrides};
use crate::error::{CliError, Result};
use cosmosac::core::cosmo::params::CosmoSacParams;
use cosmosac::workflows::gamma::{ActivityModel, GammaResult};
use std::fmt::Write;
use tracing::info;

pub fn run(args: GammaArgs) -> Result<()> {
    let mixture = MixtureFile::from_file(&args.input)?;
    let overrides = Overrides {
        temperature: args.temperature,
        max_iterations: args.max_iterations,
        tolerance: args.tolerance,
        per_atom_scan: args.per_atom_scan,
    };

    let params = match &args.params {
        Some(path) => {
            info!("Loading model parameters from {:?}", path);
            CosmoSacParams::load(path).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })?
        }
        None => CosmoSacParams::default(),
    };

    let config = mixture.gamma_config(&overrides)?;
    let temperature = mixture.temperature(&overrides)?;
    let library = mixture.load_library()?;
    let molecules = mixture.molecules(library.as_ref())?;

    info!(
        "Computing activity coefficients for {} component(s) at {} K.",
        molecules.len(),
        temperature
    );
    let model = ActivityModel::new(params, config);
    let result = model.evaluate(&molecules, &mixture.composition(), temperature)?;

    print!("{}", render(&result, &mixture.composition()));
    Ok(())
}

pub fn render(result: &GammaResult, composition: &[f64]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Temperature: {:.2} K", result.temperature);
    let _ = writeln!(
        out,
        "{:<20} {:>8} {:>12} {:>12} {:>12} {:>12}",
        "component", "x", "ln γ comb", "ln γ res", "ln γ disp", "γ"
    );
    for (i, (component, x)) in result.components.iter().zip(composition).enumerate() {
        let name = component
            .name
            .clone()
            .unwrap_or_else(|| format!("#{}", i + 1));
        let _ = writeln!(
            out,
            "{:<20} {:>8.4} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            name,
            x,
            component.terms.combinatorial,
            component.terms.residual,
            component.terms.dispersive,
            component.gamma
        );
    }
    out
}
