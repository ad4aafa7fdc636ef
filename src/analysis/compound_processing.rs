use rdkit::ROMol;

#[derive(Debug, thiserror::Error)]
#[error("Invalid SMILES: {0}")]
pub struct InvalidSmiles(pub String);

/// A parsed input structure together with its canonical form.
///
/// `romol` is rebuilt from `canonical_smiles`, so two spellings of the same
/// molecule end up with identical molecules and identical descriptors.
pub struct Compound {
    pub canonical_smiles: String,
    pub romol: ROMol,
}

impl Compound {
    pub fn from_smiles(smi: &str) -> eyre::Result<Self> {
        let parsed = parse_smiles(smi)?;
        let canonical_smiles = parsed.as_smiles();
        let romol = parse_smiles(&canonical_smiles)?;

        log::debug!("canonicalized {} to {}", smi, canonical_smiles);

        Ok(Self {
            canonical_smiles,
            romol,
        })
    }
}

pub fn parse_smiles(smi: &str) -> eyre::Result<ROMol> {
    // RDKit happily builds an empty molecule from an empty string
    if smi.trim().is_empty() {
        return Err(InvalidSmiles(smi.to_string()).into());
    }

    ROMol::from_smiles(smi).map_err(|e| {
        log::debug!("RDKit rejected {}: {}", smi, e);
        InvalidSmiles(smi.to_string()).into()
    })
}
