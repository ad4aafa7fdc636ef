use std::fmt;

use crate::analysis::MolecularDescriptors;
use crate::config::MAX_SYNONYMS;
use crate::pubchem::PubChemRecord;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum Metadata {
    Found(PubChemRecord),
    NotFound,
    Skipped,
}

impl From<Option<PubChemRecord>> for Metadata {
    fn from(record: Option<PubChemRecord>) -> Self {
        match record {
            Some(record) => Metadata::Found(record),
            None => Metadata::NotFound,
        }
    }
}

/// Everything printed for one structure: the PubChem block followed by the
/// RDKit block.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub metadata: Metadata,
    pub canonical_smiles: String,
    pub descriptors: MolecularDescriptors,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.metadata {
            Metadata::Found(record) => write_pubchem_info(f, record)?,
            Metadata::NotFound => writeln!(f, "No PubChem data found.")?,
            Metadata::Skipped => writeln!(f, "PubChem lookup skipped.")?,
        }

        writeln!(f)?;
        writeln!(f, "=== RDKit Properties ===")?;
        writeln!(f, "SMILES: {}", self.canonical_smiles)?;
        write_descriptors(f, &self.descriptors)
    }
}

fn write_pubchem_info(f: &mut fmt::Formatter<'_>, record: &PubChemRecord) -> fmt::Result {
    writeln!(f, "=== PubChem Information ===")?;
    writeln!(
        f,
        "IUPAC Name: {}",
        record.iupac_name.as_deref().unwrap_or(NOT_AVAILABLE)
    )?;

    if record.synonyms.is_empty() {
        writeln!(f, "Synonyms: {}", NOT_AVAILABLE)
    } else {
        writeln!(f, "Synonyms:")?;
        for synonym in record.synonyms.iter().take(MAX_SYNONYMS) {
            writeln!(f, "  - {}", synonym)?;
        }
        Ok(())
    }
}

fn write_descriptors(f: &mut fmt::Formatter<'_>, descriptors: &MolecularDescriptors) -> fmt::Result {
    writeln!(f, "Molecular Formula: {}", descriptors.formula)?;
    writeln!(f, "Molecular Weight: {:.2}", descriptors.molecular_weight)?;
    writeln!(f, "LogP (octanol-water): {:.2}", descriptors.logp)?;
    writeln!(f, "H-Bond Donors: {}", descriptors.h_bond_donors)?;
    writeln!(f, "H-Bond Acceptors: {}", descriptors.h_bond_acceptors)?;
    writeln!(f, "TPSA: {:.2}", descriptors.tpsa)?;
    writeln!(f, "Rings: {}", descriptors.rings)
}
