use std::collections::{BTreeMap, HashMap};

use rdkit::{Properties, ROMol};

#[derive(Debug, Clone, PartialEq)]
pub struct MolecularDescriptors {
    pub formula: String,
    pub molecular_weight: f64,
    pub logp: f64,
    pub h_bond_donors: u32,
    pub h_bond_acceptors: u32,
    pub tpsa: f64,
    pub rings: u32,
}

impl MolecularDescriptors {
    pub fn compute(romol: &ROMol) -> eyre::Result<Self> {
        let properties = Properties::new();
        let computed = properties.compute_properties(romol);

        Ok(Self {
            formula: molecular_formula(romol)?,
            molecular_weight: get_descriptor(&computed, "amw")?,
            logp: get_descriptor(&computed, "CrippenClogP")?,
            h_bond_donors: get_descriptor(&computed, "NumHBD")? as u32,
            h_bond_acceptors: get_descriptor(&computed, "NumHBA")? as u32,
            tpsa: get_descriptor(&computed, "tpsa")?,
            rings: get_descriptor(&computed, "NumRings")? as u32,
        })
    }
}

fn get_descriptor(computed: &HashMap<String, f64>, name: &str) -> eyre::Result<f64> {
    computed
        .get(name)
        .copied()
        .ok_or(eyre::eyre!("RDKit did not compute {}", name))
}

/// Collects element counts from every atom of the molecule and renders them
/// in Hill order. Each atom counts under its own symbol, so isotopic hydrogens
/// and dummy atoms kept as explicit nodes are included.
pub fn molecular_formula(romol: &ROMol) -> eyre::Result<String> {
    let computed = Properties::new().compute_properties(romol);
    // NumAtoms is the number of atom nodes plus every node's total H count
    let total_atoms = get_descriptor(&computed, "NumAtoms")? as u32;

    let mut mol = romol.clone();
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_charge = 0;
    let mut seen = 0;
    let mut atom_idx = 0;

    while seen < total_atoms {
        let mut atom = mol.atom_with_idx(atom_idx);

        *counts.entry(atom.symbol()).or_default() += 1;

        let num_hs = atom.get_total_num_hs() as u32;
        if num_hs > 0 {
            *counts.entry("H".to_string()).or_default() += num_hs;
        }

        total_charge += atom.get_formal_charge();
        seen += 1 + num_hs;
        atom_idx += 1;
    }

    Ok(hill_formula(&counts, total_charge))
}

/// Carbon first, then hydrogen, then everything else alphabetically. Without
/// carbon every element, hydrogen included, is alphabetical.
pub fn hill_formula(counts: &BTreeMap<String, u32>, total_charge: i32) -> String {
    let mut ordered: Vec<(&str, u32)> = Vec::with_capacity(counts.len());

    if let Some(&carbons) = counts.get("C") {
        ordered.push(("C", carbons));
        if let Some(&hydrogens) = counts.get("H") {
            ordered.push(("H", hydrogens));
        }
        ordered.extend(
            counts
                .iter()
                .filter(|(symbol, _)| symbol.as_str() != "C" && symbol.as_str() != "H")
                .map(|(symbol, count)| (symbol.as_str(), *count)),
        );
    } else {
        ordered.extend(counts.iter().map(|(symbol, count)| (symbol.as_str(), *count)));
    }

    let mut formula = ordered
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(symbol, count)| match count {
            1 => symbol.to_string(),
            n => format!("{}{}", symbol, n),
        })
        .collect::<String>();

    if total_charge > 0 {
        formula.push('+');
        if total_charge > 1 {
            formula.push_str(&total_charge.to_string());
        }
    } else if total_charge < 0 {
        formula.push('-');
        if total_charge < -1 {
            formula.push_str(&(-total_charge).to_string());
        }
    }

    formula
}
