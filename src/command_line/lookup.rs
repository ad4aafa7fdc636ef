use std::io::Write;

use crate::analysis::{Compound, MolecularDescriptors};
use crate::command_line::prelude::*;
use crate::config::{Config, BASE_URL_ENV};
use crate::pubchem::{PubChemClient, StructureKey, DEFAULT_BASE_URL};
use crate::report::{Metadata, Report};

pub const NAME: &str = "smiles-info";

pub fn command() -> Command {
    Command::new(NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Look up a SMILES structure on PubChem and report RDKit descriptors")
        .arg(
            Arg::new("smiles")
                .required(true)
                .num_args(1)
                .value_name("SMILES")
                .help("Structure to look up, e.g. 'CCO'"),
        )
        .arg(
            Arg::new("inchikey")
                .required(false)
                .long("inchikey")
                .short('k')
                .num_args(1)
                .help("Resolve the PubChem record by this InChIKey instead of the canonical SMILES"),
        )
        .arg(
            Arg::new("pubchem-url")
                .required(false)
                .long("pubchem-url")
                .num_args(1)
                .env(BASE_URL_ENV)
                .default_value(DEFAULT_BASE_URL)
                .help("PUG-REST base URL"),
        )
        .arg(
            Arg::new("offline")
                .long("offline")
                .action(ArgAction::SetTrue)
                .help("Skip PubChem and print the RDKit properties only"),
        )
}

pub async fn action(matches: &ArgMatches, out: &mut impl Write) -> eyre::Result<()> {
    let smiles = matches
        .get_one::<String>("smiles")
        .ok_or(eyre::eyre!("Failed to extract SMILES"))?;
    let config = Config::from_matches(matches)?;

    let compound = Compound::from_smiles(smiles)?;
    let descriptors = MolecularDescriptors::compute(&compound.romol)?;

    let metadata = if config.offline {
        Metadata::Skipped
    } else {
        let key = config
            .inchikey
            .clone()
            .unwrap_or_else(|| StructureKey::from(&compound));
        let client = PubChemClient::new(&config.base_url)?;
        Metadata::from(client.lookup(&key).await)
    };

    let report = Report {
        metadata,
        canonical_smiles: compound.canonical_smiles,
        descriptors,
    };

    write!(out, "{}", report)?;
    out.flush()?;

    Ok(())
}
