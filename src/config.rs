use clap::ArgMatches;

use crate::pubchem::StructureKey;

pub const BASE_URL_ENV: &str = "PUBCHEM_BASE_URL";
pub const MAX_SYNONYMS: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub offline: bool,
    /// Overrides the canonical SMILES as the key of the CID lookup.
    pub inchikey: Option<StructureKey>,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> eyre::Result<Self> {
        let base_url = matches
            .get_one::<String>("pubchem-url")
            .ok_or(eyre::eyre!("Failed to extract PubChem URL"))?
            .clone();

        let inchikey = matches
            .get_one::<String>("inchikey")
            .map(|key| StructureKey::inchikey(key))
            .transpose()?;

        Ok(Self {
            base_url,
            offline: matches.get_flag("offline"),
            inchikey,
        })
    }
}
