use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chemical elements the COSMO-SAC typing rules are parameterized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    H,
    C,
    N,
    O,
    F,
    Cl,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported element symbol: '{0}'")]
pub struct ParseElementError(pub String);

#[rustfmt::skip]
static SYMBOLS: Map<&'static str, Element> = phf_map! {
    "H" => Element::H,
    "C" => Element::C,
    "N" => Element::N,
    "O" => Element::O,
    "F" => Element::F,
    "Cl" => Element::Cl, "CL" => Element::Cl, "cl" => Element::Cl,
    // Lowercase aromatic notation as emitted by some cheminformatics toolkits.
    "c" => Element::C, "n" => Element::N, "o" => Element::O,
};

impl Element {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::H => "H",
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::F => "F",
            Self::Cl => "Cl",
        }
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SYMBOLS
            .get(s.trim())
            .copied()
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}
