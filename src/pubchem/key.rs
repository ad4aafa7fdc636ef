use std::fmt;

use crate::analysis::Compound;

lazy_static::lazy_static! {
    static ref INCHIKEY_RE: regex::Regex = regex::Regex::new(r"^[A-Z]{14}-[A-Z]{10}-[A-Z]$").unwrap();
}

/// Identifier for the first lookup, the one that resolves a structure to a CID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureKey {
    InchiKey(String),
    Smiles(String),
}

impl StructureKey {
    pub fn inchikey(key: &str) -> eyre::Result<Self> {
        let normalized = key.trim().to_uppercase();
        if !INCHIKEY_RE.is_match(&normalized) {
            return Err(eyre::eyre!("Malformed InChIKey: {}", key));
        }
        Ok(StructureKey::InchiKey(normalized))
    }
}

impl From<&Compound> for StructureKey {
    fn from(compound: &Compound) -> Self {
        StructureKey::Smiles(compound.canonical_smiles.clone())
    }
}

impl fmt::Display for StructureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureKey::InchiKey(key) => write!(f, "InChIKey {}", key),
            StructureKey::Smiles(smiles) => write!(f, "SMILES {}", smiles),
        }
    }
}
